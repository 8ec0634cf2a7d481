use std::{error, fmt};

use crate::graph::EdgeIx;
use crate::vertex::VertexIx;

pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised when an operation would break the pairing between
/// edges and their twins. None of these are recoverable in the sense
/// of retrying; they mean the graph or the caller is wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The edge is not on the adjacency list of the vertex it was
    /// deleted from.
    EdgeNotFound { vertex: VertexIx, edge: EdgeIx },
    /// An edge was asked to be deleted together with its twin, but
    /// it is its own twin.
    SelfTwin(EdgeIx),
    /// The handle refers to an edge that was already destroyed, or to
    /// a slot that never held one.
    StaleEdge(EdgeIx),
    /// The vertex handle doesn't refer to a vertex in this graph.
    UnknownVertex(VertexIx),
    /// No vertex with this ID exists. Includes the ID as text.
    UnknownVertexId(String),
    /// A vertex with this ID already exists. Includes the ID as text.
    DuplicateVertex(String),
    /// The twin of the edge is missing, doesn't point back, or isn't
    /// owned by the edge's end vertex.
    BrokenTwin(EdgeIx),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use GraphError as GE;
        match self {
            GE::EdgeNotFound { vertex, edge } => write!(
                f,
                "Edge {} is not owned by vertex {}",
                edge,
                vertex.index()
            ),
            GE::SelfTwin(edge) => {
                write!(f, "Edge {} is its own twin", edge)
            }
            GE::StaleEdge(edge) => {
                write!(f, "Edge {} was already destroyed", edge)
            }
            GE::UnknownVertex(vertex) => {
                write!(f, "Vertex {} is not in the graph", vertex.index())
            }
            GE::UnknownVertexId(id) => {
                write!(f, "No vertex with ID `{}`", id)
            }
            GE::DuplicateVertex(id) => {
                write!(f, "Vertex ID `{}` was inserted twice", id)
            }
            GE::BrokenTwin(edge) => {
                write!(f, "Twin of edge {} does not point back to it", edge)
            }
        }
    }
}

impl error::Error for GraphError {}

impl GraphError {
    #[inline]
    pub(crate) fn unknown_id<N: fmt::Display>(id: &N) -> Self {
        Self::UnknownVertexId(id.to_string())
    }

    #[inline]
    pub(crate) fn duplicate_id<N: fmt::Display>(id: &N) -> Self {
        Self::DuplicateVertex(id.to_string())
    }
}
