//! In-memory graph variants sharing one capability contract.

pub mod contract;
pub mod directed;
pub mod kind;
pub mod reverse;
pub mod undirected;

pub use contract::{GraphMut, GraphView};
pub use directed::DirectedGraph;
pub use kind::GraphKind;
pub use reverse::ReverseGraph;
pub use undirected::UndirectedGraph;
