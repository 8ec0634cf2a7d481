pub mod arena;
pub mod error;

pub use self::arena::*;
pub use self::error::*;

use crate::edge::{EdgeComp, EdgeDir, ScaffoldEdge, ScaffoldLink, ScaffoldLinkType};
use crate::vertex::{GraphColor, ScaffoldVertex, VertexClassification, VertexId, VertexIx};

use fnv::FnvHashMap;
use log::{debug, trace};

/// A scaffold graph: contigs keyed by ID, and the arena owning every
/// edge between them.
///
/// Every edge on a vertex's adjacency list has a twin on the list of
/// its end vertex. Operations that can reach into a neighbor's list
/// (all the twin deletions) live here rather than on the vertex, so
/// they can borrow both ends at once.
#[derive(Debug, Clone)]
pub struct ScaffoldGraph<N> {
    vertices: Vec<Option<ScaffoldVertex<N>>>,
    name_map: FnvHashMap<N, VertexIx>,
    edges: EdgeArena<N>,
}

impl<N> Default for ScaffoldGraph<N> {
    fn default() -> Self {
        ScaffoldGraph {
            vertices: Vec::new(),
            name_map: FnvHashMap::default(),
            edges: EdgeArena::new(),
        }
    }
}

impl<N> ScaffoldGraph<N> {
    pub fn vertex(&self, v: VertexIx) -> Option<&ScaffoldVertex<N>> {
        self.vertices.get(v.0).and_then(|slot| slot.as_ref())
    }

    pub fn vertex_mut(&mut self, v: VertexIx) -> Option<&mut ScaffoldVertex<N>> {
        self.vertices.get_mut(v.0).and_then(|slot| slot.as_mut())
    }

    fn vertex_ref(&self, v: VertexIx) -> GraphResult<&ScaffoldVertex<N>> {
        self.vertex(v).ok_or(GraphError::UnknownVertex(v))
    }

    fn vertex_mut_ref(&mut self, v: VertexIx) -> GraphResult<&mut ScaffoldVertex<N>> {
        self.vertex_mut(v).ok_or(GraphError::UnknownVertex(v))
    }

    /// Iterate over the live vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = (VertexIx, &ScaffoldVertex<N>)> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (VertexIx(i), v)))
    }

    pub fn vertex_indices(&self) -> Vec<VertexIx> {
        self.vertices().map(|(ix, _)| ix).collect()
    }

    pub fn num_vertices(&self) -> usize {
        self.name_map.len()
    }

    /// Number of live edges, counting each twin separately
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, e: EdgeIx) -> Option<&ScaffoldEdge<N>> {
        self.edges.get(e)
    }

    pub fn edge_arena(&self) -> &EdgeArena<N> {
        &self.edges
    }

    /// Hand out the handle the next edge will be stored under, so an
    /// edge and its twin can refer to each other before either is
    /// added.
    pub fn reserve_edge(&mut self) -> EdgeIx {
        self.edges.reserve()
    }

    /// Store `edge` under the reserved handle `ix` and append it to the
    /// adjacency list of `v`. The twin is neither created nor checked;
    /// the caller must add it to the end vertex as well.
    pub fn add_edge(
        &mut self,
        v: VertexIx,
        ix: EdgeIx,
        edge: ScaffoldEdge<N>,
    ) -> GraphResult<()> {
        debug_assert_eq!(edge.start(), v);
        self.vertex_ref(v)?;
        self.edges.fill(ix, edge)?;
        self.vertex_mut_ref(v)?.add_edge(ix);
        Ok(())
    }

    /// Copy of the edges of `v` leaving in direction `dir`
    pub fn edges_in_dir(&self, v: VertexIx, dir: EdgeDir) -> GraphResult<Vec<EdgeIx>> {
        Ok(self.vertex_ref(v)?.edges_in_dir(&self.edges, dir))
    }

    /// Destroy every edge owned by `v` without touching their twins.
    ///
    /// Only valid while tearing down the graph: any twin left on a
    /// neighbor now refers to a destroyed edge.
    pub fn delete_edges(&mut self, v: VertexIx) -> GraphResult<()> {
        let owned = std::mem::take(&mut self.vertex_mut_ref(v)?.edges);
        debug!("Dropping {} edges of vertex {}", owned.len(), v.index());
        for e in owned {
            self.edges.remove(e)?;
        }
        Ok(())
    }

    /// Destroy every edge owned by `v` along with its twin.
    pub fn delete_edges_and_twins(&mut self, v: VertexIx) -> GraphResult<()> {
        let owned = std::mem::take(&mut self.vertex_mut_ref(v)?.edges);
        debug!(
            "Deleting {} edges and twins of vertex {}",
            owned.len(),
            v.index()
        );

        for e in owned.iter().copied() {
            let edge = self.edges.get(e).ok_or(GraphError::StaleEdge(e))?;
            let (end, twin) = (edge.end(), edge.twin());
            // The twin of a self-edge is on the list we just took, and
            // gets destroyed on its own turn
            if end != v {
                self.delete_edge(end, twin)?;
            } else {
                debug_assert!(owned.contains(&twin));
            }
            self.edges.remove(e)?;
            trace!("Destroyed edge {}", e);
        }
        Ok(())
    }

    /// Destroy the edges of `v` leaving in direction `dir`, along with
    /// their twins. Returns the number of entries removed from the
    /// adjacency list of `v`.
    ///
    /// A self-edge has both of its ends on `v`, so it is removed if
    /// either it or its twin leaves in `dir`. Self-edge twins are never
    /// cleaned up through the twin path: they are on the removed list
    /// themselves and are destroyed on their own turn.
    pub fn delete_edges_and_twins_in_dir(
        &mut self,
        v: VertexIx,
        dir: EdgeDir,
    ) -> GraphResult<usize> {
        let mut removed = Vec::new();
        let mut kept = Vec::new();

        for e in self.vertex_ref(v)?.edges_iter() {
            let edge = self.edges.get(e).ok_or(GraphError::StaleEdge(e))?;
            let twin_matches = edge.end() == v
                && self
                    .edges
                    .get(edge.twin())
                    .map_or(false, |twin| twin.dir() == dir);

            if edge.dir() == dir || twin_matches {
                removed.push(e);
            } else {
                kept.push(e);
            }
        }

        debug!(
            "Deleting {} of {} edges of vertex {} in direction {}",
            removed.len(),
            removed.len() + kept.len(),
            v.index(),
            dir
        );

        self.vertex_mut_ref(v)?.edges = kept;

        for e in removed.iter().copied() {
            let edge = self.edges.get(e).ok_or(GraphError::StaleEdge(e))?;
            let (end, twin) = (edge.end(), edge.twin());
            if end != v {
                self.delete_edge(end, twin)?;
            }
            self.edges.remove(e)?;
            trace!("Destroyed edge {}", e);
        }

        Ok(removed.len())
    }

    /// Remove the exact edge `e` from the list of `v` and destroy it.
    /// The twin is left alone.
    pub fn delete_edge(&mut self, v: VertexIx, e: EdgeIx) -> GraphResult<()> {
        let vertex = self.vertex_mut_ref(v)?;
        let pos = vertex
            .position(e)
            .ok_or(GraphError::EdgeNotFound { vertex: v, edge: e })?;
        vertex.edges.remove(pos);
        self.edges.remove(e)?;
        trace!("Destroyed edge {}", e);
        Ok(())
    }

    /// Destroy `e`, owned by `v`, and its twin.
    pub fn delete_edge_and_twin(&mut self, v: VertexIx, e: EdgeIx) -> GraphResult<()> {
        let edge = self.edges.get(e).ok_or(GraphError::StaleEdge(e))?;
        let (end, twin) = (edge.end(), edge.twin());
        if twin == e {
            return Err(GraphError::SelfTwin(e));
        }
        if self.vertex_ref(v)?.position(e).is_none() {
            return Err(GraphError::EdgeNotFound { vertex: v, edge: e });
        }

        self.delete_edge(end, twin)?;
        self.delete_edge(v, e)
    }

    /// Reset the traversal marker of every vertex
    pub fn set_colors(&mut self, color: GraphColor) {
        self.vertices
            .iter_mut()
            .flatten()
            .for_each(|v| v.set_color(color));
    }

    /// Destroy the edges of every vertex without pairing up twins.
    /// Leaves every vertex with an empty adjacency list.
    pub fn clear_edges(&mut self) -> GraphResult<()> {
        for v in self.vertex_indices() {
            self.delete_edges(v)?;
        }
        debug_assert!(self.edges.is_empty());
        Ok(())
    }

    /// Check that every edge is live, starts at the vertex owning it,
    /// and has a twin on its end vertex that points back at it.
    pub fn verify_twins(&self) -> GraphResult<()> {
        for (v, vertex) in self.vertices() {
            for e in vertex.edges_iter() {
                let edge = self.edges.get(e).ok_or(GraphError::StaleEdge(e))?;
                if edge.start() != v {
                    return Err(GraphError::BrokenTwin(e));
                }

                let twin = self
                    .edges
                    .get(edge.twin())
                    .ok_or(GraphError::BrokenTwin(e))?;
                let twin_owned = self
                    .vertex(edge.end())
                    .map_or(false, |end| end.position(edge.twin()).is_some());

                if twin.twin() != e || twin.start() != edge.end() || !twin_owned {
                    return Err(GraphError::BrokenTwin(e));
                }
            }
        }
        Ok(())
    }
}

impl<N: VertexId> ScaffoldGraph<N> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_vertex(&mut self, id: N, seq_len: usize) -> GraphResult<VertexIx> {
        if self.name_map.contains_key(&id) {
            return Err(GraphError::duplicate_id(&id));
        }
        let ix = VertexIx(self.vertices.len());
        self.name_map.insert(id.clone(), ix);
        self.vertices.push(Some(ScaffoldVertex::new(id, seq_len)));
        Ok(ix)
    }

    pub fn vertex_ix(&self, id: &N) -> Option<VertexIx> {
        self.name_map.get(id).copied()
    }

    /// Look up a vertex by the textual form of its ID
    pub fn lookup_name(&self, name: &[u8]) -> Option<VertexIx> {
        let id = N::parse_id(name)?;
        self.vertex_ix(&id)
    }

    /// Add the adjacency described by `link` as an edge from `start_id`
    /// plus its twin from the link's end vertex. For a self-edge both
    /// end up on the same vertex, edge first.
    pub fn add_link(
        &mut self,
        start_id: &N,
        link: ScaffoldLink<N>,
    ) -> GraphResult<(EdgeIx, EdgeIx)> {
        let start = self
            .vertex_ix(start_id)
            .ok_or_else(|| GraphError::unknown_id(start_id))?;
        let end = self
            .vertex_ix(&link.end_id)
            .ok_or_else(|| GraphError::unknown_id(&link.end_id))?;

        let e = self.reserve_edge();
        let t = self.reserve_edge();

        let twin_link = link.twin_link(start_id.clone());
        let end_id = link.end_id.clone();

        trace!("Adding link {} -> {}", start_id, link);
        self.add_edge(start, e, ScaffoldEdge::new(start_id.clone(), start, end, link, t))?;
        self.add_edge(end, t, ScaffoldEdge::new(end_id, end, start, twin_link, e))?;
        Ok((e, t))
    }

    /// First edge of `v` ending at `target` with the given link type
    pub fn find_edge_to(
        &self,
        v: VertexIx,
        target: &N,
        link_type: ScaffoldLinkType,
    ) -> Option<EdgeIx> {
        self.vertex(v)?.find_edge_to(&self.edges, target, link_type)
    }

    /// First edge of `v` ending at `target` with the given direction
    /// and complement
    pub fn find_edge_to_oriented(
        &self,
        v: VertexIx,
        target: &N,
        dir: EdgeDir,
        comp: EdgeComp,
    ) -> Option<EdgeIx> {
        self.vertex(v)?
            .find_edge_to_oriented(&self.edges, target, dir, comp)
    }

    /// Remove `v` from the graph, deleting its edges and their twins
    /// first.
    pub fn remove_vertex(&mut self, v: VertexIx) -> GraphResult<ScaffoldVertex<N>> {
        self.delete_edges_and_twins(v)?;
        let vertex = self
            .vertices
            .get_mut(v.0)
            .and_then(|slot| slot.take())
            .ok_or(GraphError::UnknownVertex(v))?;
        self.name_map.remove(vertex.id());
        Ok(vertex)
    }

    /// Remove every vertex with the given classification. Returns the
    /// number of vertices removed.
    pub fn delete_vertices_by_classification(
        &mut self,
        classification: VertexClassification,
    ) -> GraphResult<usize> {
        let doomed: Vec<VertexIx> = self
            .vertices()
            .filter(|(_, v)| v.classification() == classification)
            .map(|(ix, _)| ix)
            .collect();

        debug!(
            "Removing {} vertices classified {:?}",
            doomed.len(),
            classification
        );

        for &v in doomed.iter() {
            self.remove_vertex(v)?;
        }
        Ok(doomed.len())
    }
}
