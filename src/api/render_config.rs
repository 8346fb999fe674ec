use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

use super::GraphStyle;
use super::axis_ticks::DEFAULT_TARGET_TICK_COUNT;

/// Public renderer configuration.
///
/// This type is serializable so host applications can persist/load plot setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphRenderConfig {
    #[serde(default = "default_target_tick_count")]
    pub target_tick_count: usize,
    #[serde(default = "default_padding_ratio")]
    pub padding_ratio: f64,
    #[serde(default)]
    pub style: GraphStyle,
}

impl Default for GraphRenderConfig {
    fn default() -> Self {
        Self {
            target_tick_count: default_target_tick_count(),
            padding_ratio: default_padding_ratio(),
            style: GraphStyle::default(),
        }
    }
}

impl GraphRenderConfig {
    /// Sets the number of gridlines the tick step aims for.
    #[must_use]
    pub fn with_target_tick_count(mut self, target_tick_count: usize) -> Self {
        self.target_tick_count = target_tick_count;
        self
    }

    /// Sets the fraction of each axis span added on both ends.
    #[must_use]
    pub fn with_padding_ratio(mut self, padding_ratio: f64) -> Self {
        self.padding_ratio = padding_ratio;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: GraphStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if self.target_tick_count == 0 {
            return Err(PlotError::InvalidConfig(
                "target tick count must be > 0".to_owned(),
            ));
        }
        if !self.padding_ratio.is_finite() || self.padding_ratio < 0.0 {
            return Err(PlotError::InvalidConfig(
                "padding ratio must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidConfig(format!("failed to parse render config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_target_tick_count() -> usize {
    DEFAULT_TARGET_TICK_COUNT
}

fn default_padding_ratio() -> f64 {
    0.1
}
