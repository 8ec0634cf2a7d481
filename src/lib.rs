//! In-memory scaffold graph: contigs as vertices, inferred adjacencies
//! as pairs of twin edges, one on each endpoint.
//!
//! Edges are owned by an arena inside [`graph::ScaffoldGraph`] and
//! referred to by [`graph::EdgeIx`] handles, so an edge and its twin
//! can point at each other without either owning the other.

pub mod edge;
pub mod graph;
pub mod vertex;
pub mod writer;
