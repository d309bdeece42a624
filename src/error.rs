use crate::Vertex;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong when building or querying a digraph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A query named a vertex outside `0..order`.
    #[error("vertex {vertex} is out of range for a digraph of order {order}")]
    VertexOutOfRange { vertex: Vertex, order: Vertex },

    /// The adjacency array does not hold exactly one entry per vertex.
    #[error("expected {order} adjacency lists, got {len}")]
    AdjacencyLengthMismatch { order: Vertex, len: usize },

    /// A vertex has no adjacency list at all, as opposed to an empty one.
    #[error("vertex {vertex} has no adjacency list")]
    MissingAdjacency { vertex: Vertex },

    /// The matrix is not `order × order`.  `row` is `None` when the number of
    /// rows is wrong and `Some(i)` when row `i` has the wrong length.
    #[error("expected a {order}x{order} matrix, got length {len} at row {row:?}")]
    MatrixShapeMismatch {
        order: Vertex,
        row: Option<Vertex>,
        len: usize,
    },

    /// An edge endpoint lies outside `0..order`.
    #[error("edge ({from}, {to}) is out of range for a digraph of order {order}")]
    EdgeOutOfRange { from: Vertex, to: Vertex, order: Vertex },

    /// The graph family needs at least one vertex.
    #[error("a {family} digraph needs at least one vertex")]
    EmptyVertexSet { family: &'static str },
}
