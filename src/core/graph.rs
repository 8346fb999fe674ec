use serde::{Deserialize, Serialize};

use crate::core::bounds::GraphExtent;
use crate::error::{PlotError, PlotResult};

/// Position of one node in problem space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
}

impl NodePosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Undirected weighted edge between two node indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

impl GraphEdge {
    #[must_use]
    pub const fn new(u: usize, v: usize, weight: f64) -> Self {
        Self { u, v, weight }
    }

    /// Endpoints ordered so `(u, v)` and `(v, u)` produce the same key.
    #[must_use]
    pub fn unordered_key(self) -> (usize, usize) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }
}

/// Parsed routing problem instance.
///
/// Invariants, checked once by [`Graph::new`]:
/// - `name` is non-empty
/// - there is at least one node, and `coordinates.len() == num_nodes`
/// - every coordinate and edge weight is finite
/// - the coordinate span on each axis is finite
/// - `start_node`, `goal_node` and every edge endpoint are in `[0, num_nodes)`
///
/// Start and goal are opaque markers; reachability is not checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    name: String,
    coordinates: Vec<NodePosition>,
    start_node: usize,
    goal_node: usize,
    edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn new(
        name: impl Into<String>,
        coordinates: Vec<NodePosition>,
        start_node: usize,
        goal_node: usize,
        edges: Vec<GraphEdge>,
    ) -> PlotResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlotError::InvalidData(
                "graph name must not be empty".to_owned(),
            ));
        }

        let num_nodes = coordinates.len();
        if num_nodes == 0 {
            return Err(PlotError::InvalidData(
                "graph must contain at least one node".to_owned(),
            ));
        }

        if let Some(index) = coordinates
            .iter()
            .position(|point| !point.x.is_finite() || !point.y.is_finite())
        {
            return Err(PlotError::InvalidData(format!(
                "coordinates of node {index} must be finite"
            )));
        }

        if let Some(extent) = GraphExtent::from_positions(&coordinates) {
            for (axis, bounds) in [("x", extent.x), ("y", extent.y)] {
                if !bounds.span().is_finite() {
                    return Err(PlotError::InvalidData(format!(
                        "{axis} coordinate span [{}, {}] exceeds the f64 range",
                        bounds.min, bounds.max
                    )));
                }
            }
        }

        check_node_index("start_node", start_node, num_nodes)?;
        check_node_index("goal_node", goal_node, num_nodes)?;

        for (edge_index, edge) in edges.iter().enumerate() {
            check_node_index(&format!("edge {edge_index} source"), edge.u, num_nodes)?;
            check_node_index(&format!("edge {edge_index} target"), edge.v, num_nodes)?;
            if !edge.weight.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "weight of edge {edge_index} must be finite"
                )));
            }
        }

        Ok(Self {
            name,
            coordinates,
            start_node,
            goal_node,
            edges,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn num_nodes(&self) -> usize {
        self.coordinates.len()
    }

    #[must_use]
    pub fn coordinates(&self) -> &[NodePosition] {
        &self.coordinates
    }

    #[must_use]
    pub fn start_node(&self) -> usize {
        self.start_node
    }

    #[must_use]
    pub fn goal_node(&self) -> usize {
        self.goal_node
    }

    /// Edges in declaration order, duplicates included.
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Returns the coordinate of `node`.
    ///
    /// Indices come from the validated edge list, so out-of-range lookups only
    /// happen through caller-supplied values.
    #[must_use]
    pub fn position(&self, node: usize) -> Option<NodePosition> {
        self.coordinates.get(node).copied()
    }
}

fn check_node_index(field: &str, index: usize, num_nodes: usize) -> PlotResult<()> {
    if index >= num_nodes {
        return Err(PlotError::NodeIndexOutOfRange {
            field: field.to_owned(),
            index: i64::try_from(index).unwrap_or(i64::MAX),
            num_nodes,
        });
    }
    Ok(())
}
