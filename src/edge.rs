//! The scaffold edge, the link evidence it is built from, and the
//! enumerations describing its kind and orientation.

pub mod direction;

pub use self::direction::*;

use crate::graph::EdgeIx;
use crate::vertex::VertexIx;

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// The kind of evidence an edge was built from. Used to match edges
/// independently of their direction and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub enum ScaffoldLinkType {
    DistanceEstimate,
    Overlap,
    Unknown,
}

impl Default for ScaffoldLinkType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl std::fmt::Display for ScaffoldLinkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sym = match self {
            Self::DistanceEstimate => 'D',
            Self::Overlap => 'O',
            Self::Unknown => 'U',
        };
        write!(f, "{}", sym)
    }
}

/// One physical adjacency as seen from a start fragment that is not
/// part of the link itself: the far endpoint, how the two fragments
/// are arranged, and how well the gap is supported.
#[derive(Default, Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct ScaffoldLink<N> {
    pub end_id: N,
    pub dir: EdgeDir,
    pub comp: EdgeComp,
    pub distance: i64,
    pub std_dev: f64,
    pub num_pairs: usize,
    pub link_type: ScaffoldLinkType,
}

impl<N> ScaffoldLink<N> {
    pub fn new(
        end_id: N,
        dir: EdgeDir,
        comp: EdgeComp,
        distance: i64,
        link_type: ScaffoldLinkType,
    ) -> Self {
        ScaffoldLink {
            end_id,
            dir,
            comp,
            distance,
            std_dev: 0.0,
            num_pairs: 0,
            link_type,
        }
    }

    pub fn with_support(mut self, std_dev: f64, num_pairs: usize) -> Self {
        self.std_dev = std_dev;
        self.num_pairs = num_pairs;
        self
    }

    /// The direction of the same adjacency seen from the end
    /// fragment. If both fragments share an orientation the link
    /// leaves the end fragment from its opposite side.
    #[inline]
    pub fn twin_dir(&self) -> EdgeDir {
        match self.comp {
            EdgeComp::Same => self.dir.flip(),
            EdgeComp::Reverse => self.dir,
        }
    }

    /// Produce the link pointing back at `start_id` from this link's
    /// end fragment.
    pub fn twin_link(&self, start_id: N) -> ScaffoldLink<N> {
        ScaffoldLink {
            end_id: start_id,
            dir: self.twin_dir(),
            comp: self.comp,
            distance: self.distance,
            std_dev: self.std_dev,
            num_pairs: self.num_pairs,
            link_type: self.link_type,
        }
    }
}

/// Formats as `<end>,<distance>,<std_dev>,<num_pairs>,<dir>,<comp>,<type>`
impl<N: std::fmt::Display> std::fmt::Display for ScaffoldLink<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{:.1},{},{},{},{}",
            self.end_id,
            self.distance,
            self.std_dev,
            self.num_pairs,
            self.dir,
            self.comp,
            self.link_type
        )
    }
}

/// A directed edge of the scaffold graph. Each edge is owned by the
/// adjacency list of its start vertex; `twin` is a non-owning handle
/// to the edge describing the same adjacency from the end vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaffoldEdge<N> {
    pub(crate) start_id: N,
    pub(crate) start: VertexIx,
    pub(crate) end: VertexIx,
    pub(crate) link: ScaffoldLink<N>,
    pub(crate) twin: EdgeIx,
}

impl<N> ScaffoldEdge<N> {
    pub fn new(
        start_id: N,
        start: VertexIx,
        end: VertexIx,
        link: ScaffoldLink<N>,
        twin: EdgeIx,
    ) -> Self {
        ScaffoldEdge {
            start_id,
            start,
            end,
            link,
            twin,
        }
    }

    #[inline]
    pub fn start_id(&self) -> &N {
        &self.start_id
    }

    #[inline]
    pub fn end_id(&self) -> &N {
        &self.link.end_id
    }

    #[inline]
    pub fn start(&self) -> VertexIx {
        self.start
    }

    /// Handle of the vertex owning the twin
    #[inline]
    pub fn end(&self) -> VertexIx {
        self.end
    }

    #[inline]
    pub fn twin(&self) -> EdgeIx {
        self.twin
    }

    #[inline]
    pub fn link(&self) -> &ScaffoldLink<N> {
        &self.link
    }

    #[inline]
    pub fn link_type(&self) -> ScaffoldLinkType {
        self.link.link_type
    }

    #[inline]
    pub fn dir(&self) -> EdgeDir {
        self.link.dir
    }

    #[inline]
    pub fn comp(&self) -> EdgeComp {
        self.link.comp
    }

    #[inline]
    pub fn distance(&self) -> i64 {
        self.link.distance
    }

    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.link.std_dev
    }

    #[inline]
    pub fn num_pairs(&self) -> usize {
        self.link.num_pairs
    }

    #[inline]
    pub fn is_self_edge(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twin_dir_follows_complement() {
        use EdgeComp::*;
        use EdgeDir::*;

        let kind = ScaffoldLinkType::DistanceEstimate;

        let same = ScaffoldLink::new("B", Sense, Same, 200, kind);
        assert_eq!(same.twin_dir(), Antisense);

        let rev = ScaffoldLink::new("B", Antisense, Reverse, 200, kind);
        assert_eq!(rev.twin_dir(), Antisense);
    }

    #[test]
    fn twin_link_points_back() {
        let link = ScaffoldLink::new(
            "B",
            EdgeDir::Sense,
            EdgeComp::Same,
            -35,
            ScaffoldLinkType::Overlap,
        )
        .with_support(4.5, 12);

        let twin = link.twin_link("A");
        assert_eq!(twin.end_id, "A");
        assert_eq!(twin.dir, EdgeDir::Antisense);
        assert_eq!(twin.comp, EdgeComp::Same);
        assert_eq!(twin.distance, -35);
        assert_eq!(twin.num_pairs, 12);
        assert_eq!(twin.link_type, ScaffoldLinkType::Overlap);
        assert_eq!(twin.twin_link("B"), link);
    }

    #[test]
    fn print_link() {
        let link = ScaffoldLink::new(
            "ctg7",
            EdgeDir::Antisense,
            EdgeComp::Reverse,
            150,
            ScaffoldLinkType::DistanceEstimate,
        )
        .with_support(20.5, 8);
        assert_eq!(link.to_string(), "ctg7,150,20.5,8,A,-,D");
    }
}
