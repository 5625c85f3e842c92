//! Word co-occurrence graphs: structure, construction, layout and visual encoding

mod builder;
mod edge;
mod layout;
mod node;
mod visual;
mod word_graph;

pub use builder::{GraphBuilder, GraphView};
pub use edge::{EdgeKey, WordEdge};
pub use layout::{LayoutStrategy, SpringLayout};
pub use node::{Position, WordNode};
pub use visual::{EdgeVisual, GraphVisual, NodeVisual};
pub use word_graph::{GraphError, GraphResult, WordGraph};
