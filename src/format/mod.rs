//! Text serialization shared by all graph variants.

pub mod reader;
pub mod writer;

pub use reader::{read_graph, read_graph_file, read_graph_from};
pub use writer::{write_graph, write_graph_file, write_graph_to};
