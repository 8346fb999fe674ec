pub mod bounds;
pub mod graph;
pub mod parser;
pub mod scale;
pub mod types;

pub use bounds::{AxisBounds, GraphExtent};
pub use graph::{Graph, GraphEdge, NodePosition};
pub use parser::{parse, parse_lines};
pub use scale::LinearScale;
pub use types::Viewport;
