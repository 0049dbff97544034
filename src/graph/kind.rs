//! Names for the graph variants, used where the variant is chosen at runtime.

use serde::Serialize;

/// The graph variants shipped with the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// [`DirectedGraph`](super::DirectedGraph).
    #[default]
    Directed,
    /// [`UndirectedGraph`](super::UndirectedGraph).
    Undirected,
    /// [`ReverseGraph`](super::ReverseGraph).
    Reverse,
}

impl GraphKind {
    /// Return a human-readable name for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
            Self::Reverse => "reverse",
        }
    }

    /// Parse a variant from its name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "directed" | "digraph" => Some(Self::Directed),
            "undirected" => Some(Self::Undirected),
            "reverse" | "reversible" => Some(Self::Reverse),
            _ => None,
        }
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for kind in [GraphKind::Directed, GraphKind::Undirected, GraphKind::Reverse] {
            assert_eq!(GraphKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(GraphKind::from_name("Undirected"), Some(GraphKind::Undirected));
        assert_eq!(GraphKind::from_name("tree"), None);
    }
}
