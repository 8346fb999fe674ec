//! graph-plot: turn coordinate-graph problem files into diagrams.
//!
//! The pipeline is two pure steps: [`core::parse`] reads the line-based graph
//! format into a validated [`core::Graph`], and [`api::GraphRenderer`] turns
//! that graph into backend-agnostic [`api::DrawingInstructions`]. Projection
//! to pixel primitives and the optional Cairo backend live in [`render`].

pub mod api;
pub mod batch;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{DrawingInstructions, GraphRenderConfig, GraphRenderer};
pub use crate::core::{Graph, parse};
pub use error::{PlotError, PlotResult};
