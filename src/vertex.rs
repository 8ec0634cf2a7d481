pub mod id;

pub use self::id::*;

use crate::edge::{EdgeComp, EdgeDir, ScaffoldLinkType};
use crate::graph::{EdgeArena, EdgeIx};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Stable handle to a vertex inside a `ScaffoldGraph`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexIx(pub(crate) usize);

impl VertexIx {
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Whether a contig is believed to occur once in the genome or to be
/// a collapsed repeat. Set by an external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum VertexClassification {
    Unknown,
    Unique,
    Repeat,
}

impl VertexClassification {
    /// Map a raw classification code, as used by callers that store
    /// classifications outside the graph, to a classification.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Unknown),
            1 => Some(Self::Unique),
            2 => Some(Self::Repeat),
            _ => None,
        }
    }

    #[inline]
    pub fn code(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Unique => 1,
            Self::Repeat => 2,
        }
    }

    /// Fill color used for the vertex in DOT output
    pub fn color_str(&self) -> &'static str {
        match self {
            Self::Unknown => "gray",
            Self::Unique => "white",
            Self::Repeat => "red",
        }
    }
}

impl Default for VertexClassification {
    fn default() -> Self {
        Self::Unknown
    }
}

/// DOT fill color for a raw classification code; codes that don't
/// name a classification are drawn white.
pub fn classification_color(code: u8) -> &'static str {
    VertexClassification::from_code(code)
        .map(|c| c.color_str())
        .unwrap_or("white")
}

/// Visit marker for graph traversals. The vertex never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum GraphColor {
    White,
    Gray,
    Black,
}

impl Default for GraphColor {
    fn default() -> Self {
        Self::White
    }
}

/// A contig in the scaffold graph, along with the handles of every
/// edge that starts at it.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldVertex<N> {
    id: N,
    seq_len: usize,
    classification: VertexClassification,
    color: GraphColor,
    a_statistic: Option<f64>,
    pub(crate) edges: Vec<EdgeIx>,
}

impl<N> ScaffoldVertex<N> {
    pub fn new(id: N, seq_len: usize) -> Self {
        ScaffoldVertex {
            id,
            seq_len,
            classification: Default::default(),
            color: Default::default(),
            a_statistic: None,
            edges: Vec::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> &N {
        &self.id
    }

    #[inline]
    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    #[inline]
    pub fn classification(&self) -> VertexClassification {
        self.classification
    }

    pub fn set_classification(&mut self, classification: VertexClassification) {
        self.classification = classification;
    }

    #[inline]
    pub fn color(&self) -> GraphColor {
        self.color
    }

    pub fn set_color(&mut self, color: GraphColor) {
        self.color = color;
    }

    /// The A-statistic, or NaN if it hasn't been set
    #[inline]
    pub fn a_statistic(&self) -> f64 {
        self.a_statistic.unwrap_or(f64::NAN)
    }

    #[inline]
    pub fn try_a_statistic(&self) -> Option<f64> {
        self.a_statistic
    }

    pub fn set_a_statistic(&mut self, value: f64) {
        self.a_statistic = Some(value);
    }

    #[inline]
    pub fn is_repeat(&self) -> bool {
        self.classification == VertexClassification::Repeat
    }

    pub fn color_string(&self) -> &'static str {
        self.classification.color_str()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Append an edge handle. The edge must start at this vertex and
    /// its twin must end up on the end vertex; neither is checked.
    pub fn add_edge(&mut self, edge: EdgeIx) {
        self.edges.push(edge);
    }

    /// Copy of the adjacency list in insertion order
    pub fn edges(&self) -> Vec<EdgeIx> {
        self.edges.clone()
    }

    pub fn edges_iter(&self) -> impl Iterator<Item = EdgeIx> + '_ {
        self.edges.iter().copied()
    }

    /// Copy of the edges leaving this vertex in direction `dir`
    pub fn edges_in_dir(&self, arena: &EdgeArena<N>, dir: EdgeDir) -> Vec<EdgeIx> {
        self.edges_iter()
            .filter(|&e| arena.get(e).map(|edge| edge.dir()) == Some(dir))
            .collect()
    }

    pub(crate) fn position(&self, edge: EdgeIx) -> Option<usize> {
        self.edges.iter().position(|&e| e == edge)
    }
}

impl<N: PartialEq> ScaffoldVertex<N> {
    /// First edge, in insertion order, ending at `target` with the
    /// given link type
    pub fn find_edge_to(
        &self,
        arena: &EdgeArena<N>,
        target: &N,
        link_type: ScaffoldLinkType,
    ) -> Option<EdgeIx> {
        self.edges_iter().find(|&e| {
            arena.get(e).map_or(false, |edge| {
                edge.end_id() == target && edge.link_type() == link_type
            })
        })
    }

    /// First edge, in insertion order, ending at `target` with the
    /// given direction and complement
    pub fn find_edge_to_oriented(
        &self,
        arena: &EdgeArena<N>,
        target: &N,
        dir: EdgeDir,
        comp: EdgeComp,
    ) -> Option<EdgeIx> {
        self.edges_iter().find(|&e| {
            arena.get(e).map_or(false, |edge| {
                edge.end_id() == target && edge.dir() == dir && edge.comp() == comp
            })
        })
    }
}
