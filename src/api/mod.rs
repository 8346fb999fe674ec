mod axis_ticks;
mod drawing;
mod json_contract;
mod render_config;
mod render_frame_builder;
mod render_style;
mod renderer;

pub use axis_ticks::{AxisLabelFormat, DEFAULT_TARGET_TICK_COUNT, nice_tick_step, nice_ticks};
pub use drawing::{
    AxisInstructions, AxisTick, DrawingInstructions, EdgeInstruction, LegendEntry,
    NodeInstruction, NodeRole,
};
pub use json_contract::{DRAWING_INSTRUCTIONS_JSON_SCHEMA_V1, DrawingInstructionsJsonContractV1};
pub use render_config::GraphRenderConfig;
pub use render_style::GraphStyle;
pub use renderer::{GraphRenderer, X_AXIS_TITLE, Y_AXIS_TITLE, render};

use crate::core::{Graph, parse};
use crate::error::PlotResult;

/// Parses `text` and renders it in one step; `label` names the source.
pub fn parse_and_render(
    renderer: &GraphRenderer,
    text: &str,
    label: &str,
) -> PlotResult<DrawingInstructions> {
    let graph: Graph = parse(text)?;
    Ok(renderer.render(&graph, label))
}
