use serde::{Deserialize, Serialize};

use crate::core::{AxisBounds, NodePosition};
use crate::render::Color;

use super::axis_ticks::AxisLabelFormat;

/// Highlight role of one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeRole {
    Start,
    Goal,
    Regular,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInstruction {
    pub index: usize,
    pub position: NodePosition,
    pub role: NodeRole,
    pub color: Color,
    pub label: String,
}

/// One drawn segment per unordered node pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeInstruction {
    pub u: usize,
    pub v: usize,
    pub from: NodePosition,
    pub to: NodePosition,
    pub weight: f64,
    pub label: String,
    pub label_position: NodePosition,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisInstructions {
    pub title: String,
    /// Padded data range of the axis; may have zero span.
    pub bounds: AxisBounds,
    pub step: f64,
    pub label_format: AxisLabelFormat,
    pub ticks: Vec<AxisTick>,
}

impl AxisInstructions {
    /// Range a display backend should map onto the plot area.
    ///
    /// Equal to `bounds` unless that range is degenerate, in which case the
    /// hull of the ticks and bounds is used so the span is always positive.
    #[must_use]
    pub fn display_range(&self) -> AxisBounds {
        if self.bounds.span() > 0.0 {
            return self.bounds;
        }

        let values = self
            .ticks
            .iter()
            .map(|tick| tick.value)
            .chain([self.bounds.min, self.bounds.max]);
        match AxisBounds::from_values(values) {
            Some(hull) if hull.span() > 0.0 => hull,
            _ => {
                // Widen by at least a few ulps so huge magnitudes still move.
                let magnitude = self.bounds.min.abs().max(self.bounds.max.abs());
                let half = (self.step.max(1.0) / 2.0).max(magnitude * 4.0 * f64::EPSILON);
                AxisBounds::new(
                    (self.bounds.min - half).clamp(f64::MIN, f64::MAX),
                    (self.bounds.max + half).clamp(f64::MIN, f64::MAX),
                )
            }
        }
    }

    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        self.ticks.iter().map(|tick| tick.value).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Declarative, backend-agnostic description of one rendered graph.
///
/// Produced by [`super::GraphRenderer::render`] and owned by the caller; a
/// display backend turns it into pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawingInstructions {
    pub title: String,
    pub nodes: Vec<NodeInstruction>,
    pub edges: Vec<EdgeInstruction>,
    pub x_axis: AxisInstructions,
    pub y_axis: AxisInstructions,
    pub legend: Vec<LegendEntry>,
}

impl DrawingInstructions {
    pub fn title_lines(&self) -> impl Iterator<Item = &str> {
        self.title.lines()
    }

    #[must_use]
    pub fn node(&self, index: usize) -> Option<&NodeInstruction> {
        self.nodes.get(index)
    }

    /// Looks up the drawn edge between `a` and `b` in either direction.
    #[must_use]
    pub fn edge_between(&self, a: usize, b: usize) -> Option<&EdgeInstruction> {
        self.edges
            .iter()
            .find(|edge| (edge.u == a && edge.v == b) || (edge.u == b && edge.v == a))
    }
}
