//! Rotation cursors for a single vertex.
//!
//! Both iterators are pull-based and take one rotation step per element. They
//! hold no state on the graph itself, so dropping one halfway through a
//! rotation is always fine, and any number of them may walk the same graph at
//! once.

use std::iter::FusedIterator;

use crate::topology::edges::RotationSystem;
use crate::topology::ids::{EdgeId, VertexId};

/// Edges around `vertex` in embedding order, starting at its rotation entry.
///
/// Terminates when the rotation returns to the entry edge. If the rotation is
/// not a closed cycle through the entry this iterator never ends.
pub struct IncidentEdges<'a, E: ?Sized> {
    edges: &'a E,
    vertex: VertexId,
    start: Option<EdgeId>,
    current: Option<EdgeId>,
    exhausted: bool,
}

impl<'a, E> IncidentEdges<'a, E>
where
    E: RotationSystem + ?Sized,
{
    /// Start a walk around `vertex` from `entry`; `None` yields nothing.
    #[inline]
    pub fn new(edges: &'a E, vertex: VertexId, entry: Option<EdgeId>) -> Self {
        Self {
            edges,
            vertex,
            start: entry,
            current: None,
            exhausted: entry.is_none(),
        }
    }

    /// The vertex being walked around.
    #[inline]
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }
}

impl<E> Iterator for IncidentEdges<'_, E>
where
    E: RotationSystem + ?Sized,
{
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        if self.exhausted {
            return None;
        }
        let start = self.start?;
        let edge = match self.current {
            None => start,
            Some(prev) => {
                let following = self.edges.next_in_rotation(prev, self.vertex);
                if following == start {
                    self.exhausted = true;
                    return None;
                }
                following
            }
        };
        self.current = Some(edge);
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            (0, Some(0))
        } else if self.current.is_none() {
            (1, None)
        } else {
            (0, None)
        }
    }
}

impl<E> FusedIterator for IncidentEdges<'_, E> where E: RotationSystem + ?Sized {}

/// Far endpoints of the edges around `vertex`, in the same order as
/// [`IncidentEdges`].
///
/// A self-loop yields `vertex` itself.
pub struct AdjacentVertices<'a, E: ?Sized> {
    inner: IncidentEdges<'a, E>,
}

impl<'a, E> AdjacentVertices<'a, E>
where
    E: RotationSystem + ?Sized,
{
    #[inline]
    pub fn new(edges: &'a E, vertex: VertexId, entry: Option<EdgeId>) -> Self {
        Self {
            inner: IncidentEdges::new(edges, vertex, entry),
        }
    }

    #[inline]
    pub fn vertex(&self) -> VertexId {
        self.inner.vertex
    }
}

impl<E> Iterator for AdjacentVertices<'_, E>
where
    E: RotationSystem + ?Sized,
{
    type Item = VertexId;

    #[inline]
    fn next(&mut self) -> Option<VertexId> {
        let edge = self.inner.next()?;
        Some(self.inner.edges.opposite_vertex(edge, self.inner.vertex))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<E> FusedIterator for AdjacentVertices<'_, E> where E: RotationSystem + ?Sized {}
