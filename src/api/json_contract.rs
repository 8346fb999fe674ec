use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

use super::DrawingInstructions;

pub const DRAWING_INSTRUCTIONS_JSON_SCHEMA_V1: u32 = 1;

/// Versioned envelope handed to external display backends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingInstructionsJsonContractV1 {
    pub schema_version: u32,
    pub instructions: DrawingInstructions,
}

impl DrawingInstructions {
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize drawing instructions: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = DrawingInstructionsJsonContractV1 {
            schema_version: DRAWING_INSTRUCTIONS_JSON_SCHEMA_V1,
            instructions: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!(
                "failed to serialize drawing instructions contract v1: {e}"
            ))
        })
    }

    /// Accepts either a bare instruction bundle or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        if let Ok(instructions) = serde_json::from_str::<DrawingInstructions>(input) {
            return Ok(instructions);
        }
        let payload: DrawingInstructionsJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                PlotError::InvalidData(format!(
                    "failed to parse drawing instructions json payload: {e}"
                ))
            })?;
        if payload.schema_version != DRAWING_INSTRUCTIONS_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported drawing instructions schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.instructions)
    }
}
