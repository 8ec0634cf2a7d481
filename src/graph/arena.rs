use crate::edge::ScaffoldEdge;
use crate::graph::error::{GraphError, GraphResult};

/// Handle to an edge stored in an `EdgeArena`. The generation is
/// bumped every time a slot is freed, so a handle to a destroyed
/// edge never resolves to whatever later reuses the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIx {
    index: u32,
    generation: u32,
}

impl EdgeIx {
    #[inline]
    pub fn index(&self) -> usize {
        self.index as usize
    }
}

impl std::fmt::Display for EdgeIx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[derive(Debug, Clone)]
struct Slot<N> {
    generation: u32,
    edge: Option<ScaffoldEdge<N>>,
}

/// Owns every edge in a scaffold graph. Vertices only hold handles.
///
/// A slot is either free (on the free list), reserved (handed out by
/// `reserve` but not yet filled) or live.
#[derive(Debug, Clone)]
pub struct EdgeArena<N> {
    slots: Vec<Slot<N>>,
    free: Vec<u32>,
    live: usize,
}

impl<N> Default for EdgeArena<N> {
    fn default() -> Self {
        EdgeArena {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }
}

impl<N> EdgeArena<N> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Hand out a handle without storing an edge yet. Used to learn
    /// the handle of a twin before either edge of the pair is built.
    pub fn reserve(&mut self) -> EdgeIx {
        if let Some(index) = self.free.pop() {
            let generation = self.slots[index as usize].generation;
            EdgeIx { index, generation }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                edge: None,
            });
            EdgeIx {
                index,
                generation: 0,
            }
        }
    }

    /// Store an edge in a slot handed out by `reserve`
    pub fn fill(&mut self, ix: EdgeIx, edge: ScaffoldEdge<N>) -> GraphResult<()> {
        match self.slots.get_mut(ix.index()) {
            Some(slot) if slot.generation == ix.generation && slot.edge.is_none() => {
                slot.edge = Some(edge);
                self.live += 1;
                Ok(())
            }
            _ => Err(GraphError::StaleEdge(ix)),
        }
    }

    pub fn insert(&mut self, edge: ScaffoldEdge<N>) -> EdgeIx {
        let ix = self.reserve();
        let slot = &mut self.slots[ix.index()];
        slot.edge = Some(edge);
        self.live += 1;
        ix
    }

    /// Destroy the edge behind `ix`. Destroying the same edge twice is
    /// reported as `StaleEdge` rather than touching the slot again.
    pub fn remove(&mut self, ix: EdgeIx) -> GraphResult<ScaffoldEdge<N>> {
        let slot = self
            .slots
            .get_mut(ix.index())
            .filter(|slot| slot.generation == ix.generation)
            .ok_or(GraphError::StaleEdge(ix))?;
        let edge = slot.edge.take().ok_or(GraphError::StaleEdge(ix))?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(ix.index);
        self.live -= 1;
        Ok(edge)
    }

    pub fn get(&self, ix: EdgeIx) -> Option<&ScaffoldEdge<N>> {
        self.slots
            .get(ix.index())
            .filter(|slot| slot.generation == ix.generation)
            .and_then(|slot| slot.edge.as_ref())
    }

    pub fn get_mut(&mut self, ix: EdgeIx) -> Option<&mut ScaffoldEdge<N>> {
        self.slots
            .get_mut(ix.index())
            .filter(|slot| slot.generation == ix.generation)
            .and_then(|slot| slot.edge.as_mut())
    }

    #[inline]
    pub fn contains(&self, ix: EdgeIx) -> bool {
        self.get(ix).is_some()
    }

    /// Number of live edges
    #[inline]
    pub fn len(&self) -> usize {
        self.live
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (EdgeIx, &ScaffoldEdge<N>)> {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            let ix = EdgeIx {
                index: i as u32,
                generation: slot.generation,
            };
            slot.edge.as_ref().map(|edge| (ix, edge))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::*;
    use crate::vertex::VertexIx;

    fn edge_to(end: &'static str, twin: EdgeIx) -> ScaffoldEdge<&'static str> {
        let link = ScaffoldLink::new(
            end,
            EdgeDir::Sense,
            EdgeComp::Same,
            0,
            ScaffoldLinkType::Unknown,
        );
        ScaffoldEdge::new("A", VertexIx(0), VertexIx(1), link, twin)
    }

    #[test]
    fn double_remove_is_stale() {
        let mut arena = EdgeArena::new();
        let twin = arena.reserve();
        let e = arena.insert(edge_to("B", twin));
        assert_eq!(arena.len(), 1);

        assert!(arena.remove(e).is_ok());
        assert!(arena.is_empty());
        assert_eq!(arena.remove(e), Err(GraphError::StaleEdge(e)));
    }

    #[test]
    fn reused_slot_does_not_resolve_old_handle() {
        let mut arena = EdgeArena::new();
        let twin = arena.reserve();
        let old = arena.insert(edge_to("B", twin));
        arena.remove(old).unwrap();

        let new = arena.insert(edge_to("C", twin));
        assert_eq!(old.index(), new.index());
        assert_ne!(old, new);
        assert!(arena.get(old).is_none());
        assert_eq!(arena.get(new).map(|e| *e.end_id()), Some("C"));
    }

    #[test]
    fn fill_reserved_slot_once() {
        let mut arena = EdgeArena::new();
        let ix = arena.reserve();
        assert!(!arena.contains(ix));
        let other = arena.reserve();

        arena.fill(ix, edge_to("B", other)).unwrap();
        assert!(arena.contains(ix));
        assert_eq!(
            arena.fill(ix, edge_to("B", other)),
            Err(GraphError::StaleEdge(ix))
        );
        assert_eq!(arena.iter().count(), 1);
    }
}
