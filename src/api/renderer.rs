use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::{debug, trace};

use crate::core::{AxisBounds, Graph, GraphEdge, GraphExtent, NodePosition};
use crate::error::PlotResult;
use crate::render::Color;

use super::axis_ticks::{AxisLabelFormat, nice_tick_step, nice_ticks};
use super::drawing::{
    AxisInstructions, AxisTick, DrawingInstructions, EdgeInstruction, LegendEntry,
    NodeInstruction, NodeRole,
};
use super::{GraphRenderConfig, GraphStyle};

pub const X_AXIS_TITLE: &str = "X Coordinate";
pub const Y_AXIS_TITLE: &str = "Y Coordinate";

/// Turns parsed graphs into drawing instructions.
///
/// Holds only validated configuration; every `render` call is independent and
/// deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphRenderer {
    config: GraphRenderConfig,
}

impl GraphRenderer {
    pub fn new(config: GraphRenderConfig) -> PlotResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &GraphRenderConfig {
        &self.config
    }

    /// Builds the drawing instructions for `graph`; `label` names its source
    /// (typically the file name) in the title.
    #[must_use]
    pub fn render(&self, graph: &Graph, label: &str) -> DrawingInstructions {
        let style = &self.config.style;
        let nodes = node_instructions(graph, style);
        let edges = edge_instructions(graph);

        // `Graph` guarantees at least one node.
        let extent = GraphExtent::from_positions(graph.coordinates()).unwrap_or(GraphExtent {
            x: AxisBounds::new(0.0, 0.0),
            y: AxisBounds::new(0.0, 0.0),
        });
        let x_axis = self.axis_instructions(X_AXIS_TITLE, extent.x);
        let y_axis = self.axis_instructions(Y_AXIS_TITLE, extent.y);

        debug!(
            graph = graph.name(),
            nodes = nodes.len(),
            declared_edges = graph.edges().len(),
            drawn_edges = edges.len(),
            x_step = x_axis.step,
            y_step = y_axis.step,
            "rendered graph instructions"
        );

        DrawingInstructions {
            title: format!(
                "Graph: {}\nFile: {}\nStart: {}, Goal: {}",
                graph.name(),
                label,
                graph.start_node(),
                graph.goal_node()
            ),
            nodes,
            edges,
            x_axis,
            y_axis,
            legend: legend_entries(style),
        }
    }

    /// Ticks are derived from the raw data range; the padding only widens the
    /// visible bounds.
    fn axis_instructions(&self, title: &str, data: AxisBounds) -> AxisInstructions {
        let target = self.config.target_tick_count;
        let values = nice_ticks(data.min, data.max, target);
        let label_format = AxisLabelFormat::for_ticks(&values);
        let ticks = values
            .into_iter()
            .map(|value| AxisTick {
                value,
                label: label_format.format(value),
            })
            .collect();

        AxisInstructions {
            title: title.to_owned(),
            bounds: data.padded(self.config.padding_ratio),
            step: nice_tick_step(data.min, data.max, target),
            label_format,
            ticks,
        }
    }
}

/// Renders with the default configuration.
#[must_use]
pub fn render(graph: &Graph, label: &str) -> DrawingInstructions {
    GraphRenderer::default().render(graph, label)
}

/// Regular color first, then start, then goal; a node that is both start and
/// goal ends up with the goal color.
fn node_roles(graph: &Graph) -> Vec<NodeRole> {
    let mut roles = vec![NodeRole::Regular; graph.num_nodes()];
    roles[graph.start_node()] = NodeRole::Start;
    roles[graph.goal_node()] = NodeRole::Goal;
    roles
}

fn role_color(role: NodeRole, style: &GraphStyle) -> Color {
    match role {
        NodeRole::Start => style.start_node_color,
        NodeRole::Goal => style.goal_node_color,
        NodeRole::Regular => style.regular_node_color,
    }
}

fn node_instructions(graph: &Graph, style: &GraphStyle) -> Vec<NodeInstruction> {
    graph
        .coordinates()
        .iter()
        .zip(node_roles(graph))
        .enumerate()
        .map(|(index, (position, role))| NodeInstruction {
            index,
            position: *position,
            role,
            color: role_color(role, style),
            label: index.to_string(),
        })
        .collect()
}

/// Collapses `(u, v)` / `(v, u)` duplicates into one segment.
///
/// The first occurrence fixes the drawing order and orientation; a repeated
/// pair overwrites the weight, so the last declared weight is labeled.
fn edge_instructions(graph: &Graph) -> Vec<EdgeInstruction> {
    let mut unique: IndexMap<(usize, usize), GraphEdge> =
        IndexMap::with_capacity(graph.edges().len());
    for edge in graph.edges() {
        match unique.entry(edge.unordered_key()) {
            Entry::Occupied(mut slot) => {
                trace!(u = edge.u, v = edge.v, "collapsing duplicate edge");
                slot.get_mut().weight = edge.weight;
            }
            Entry::Vacant(slot) => {
                slot.insert(*edge);
            }
        }
    }

    unique
        .into_values()
        .filter_map(|edge| {
            let from = graph.position(edge.u)?;
            let to = graph.position(edge.v)?;
            Some(EdgeInstruction {
                u: edge.u,
                v: edge.v,
                from,
                to,
                weight: edge.weight,
                label: format!("{:.1}", edge.weight),
                label_position: NodePosition::new(from.x.midpoint(to.x), from.y.midpoint(to.y)),
            })
        })
        .collect()
}

fn legend_entries(style: &GraphStyle) -> Vec<LegendEntry> {
    [
        ("Start Node", style.start_node_color),
        ("Goal Node", style.goal_node_color),
        ("Regular Node", style.regular_node_color),
    ]
    .into_iter()
    .map(|(label, color)| LegendEntry {
        label: label.to_owned(),
        color,
    })
    .collect()
}
