//! Edge storage for a rotation system.
//!
//! The embedding is kept implicitly: every edge owns a fixed pair of
//! [`RotationLink`]s, one per endpoint, each naming the next edge around that
//! endpoint. Walking `next` links around a vertex enumerates its incident edges
//! in embedding order without any per-vertex adjacency list.
//!
//! [`RotationSystem`] is the two-query contract [`PlanarGraph`] needs;
//! [`PlanarGraphEdges`] is the flat arena that implements it.
//!
//! # Self-loops
//! Both queries pick the *first* link whose endpoint matches the vertex. A
//! self-loop at `v` therefore takes part in `v`'s rotation exactly once, through
//! its first link; the builder mirrors that link into the second slot.
//!
//! [`PlanarGraph`]: crate::topology::planar_graph::PlanarGraph

use std::sync::Arc;

use itertools::Itertools;

use crate::graph_error::PlanarGraphError;
use crate::topology::ids::{EdgeId, VertexId};

/// Connectivity queries a [`PlanarGraph`](crate::topology::planar_graph::PlanarGraph)
/// delegates to its edge store.
///
/// All methods are read-only and expected to be O(1). Passing an edge that is
/// not incident to `vertex` is a caller error: the result is unspecified but
/// must not be undefined behavior.
pub trait RotationSystem {
    /// Total number of stored edges.
    fn edge_count(&self) -> usize;

    /// The endpoint of `edge` on the far side of `vertex`.
    fn opposite_vertex(&self, edge: EdgeId, vertex: VertexId) -> VertexId;

    /// The edge following `edge` in the rotation around `vertex`.
    ///
    /// For a vertex with a single incident edge this returns `edge` itself.
    fn next_in_rotation(&self, edge: EdgeId, vertex: VertexId) -> EdgeId;

    /// Both endpoints of `edge`, in storage order.
    fn endpoints(&self, edge: EdgeId) -> (VertexId, VertexId);

    /// Returns `true` if `vertex` is one of the endpoints of `edge`.
    #[inline]
    fn is_incident(&self, edge: EdgeId, vertex: VertexId) -> bool {
        let (a, b) = self.endpoints(edge);
        a == vertex || b == vertex
    }
}

impl<T: RotationSystem + ?Sized> RotationSystem for &T {
    #[inline]
    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }
    #[inline]
    fn opposite_vertex(&self, edge: EdgeId, vertex: VertexId) -> VertexId {
        (**self).opposite_vertex(edge, vertex)
    }
    #[inline]
    fn next_in_rotation(&self, edge: EdgeId, vertex: VertexId) -> EdgeId {
        (**self).next_in_rotation(edge, vertex)
    }
    #[inline]
    fn endpoints(&self, edge: EdgeId) -> (VertexId, VertexId) {
        (**self).endpoints(edge)
    }
}

impl<T: RotationSystem + ?Sized> RotationSystem for Arc<T> {
    #[inline]
    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }
    #[inline]
    fn opposite_vertex(&self, edge: EdgeId, vertex: VertexId) -> VertexId {
        (**self).opposite_vertex(edge, vertex)
    }
    #[inline]
    fn next_in_rotation(&self, edge: EdgeId, vertex: VertexId) -> EdgeId {
        (**self).next_in_rotation(edge, vertex)
    }
    #[inline]
    fn endpoints(&self, edge: EdgeId) -> (VertexId, VertexId) {
        (**self).endpoints(edge)
    }
}

/// One half of an edge: an endpoint and the next edge around it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RotationLink {
    pub vertex: VertexId,
    pub next: EdgeId,
}

impl RotationLink {
    #[inline]
    pub const fn new(vertex: VertexId, next: EdgeId) -> Self {
        Self { vertex, next }
    }
}

/// Flat edge arena: `links[e]` holds the two half-edges of edge `e`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlanarGraphEdges {
    links: Vec<[RotationLink; 2]>,
}

impl PlanarGraphEdges {
    /// Wrap precomputed links without any checking.
    ///
    /// Producers that already hold a rotation-consistent embedding use this;
    /// everyone else should go through [`from_rotations`](Self::from_rotations).
    pub fn from_links(links: Vec<[RotationLink; 2]>) -> Self {
        Self { links }
    }

    /// Build the arena from edge endpoints and per-vertex cyclic edge orders.
    ///
    /// `rotations[v]` lists the edges around `v` in embedding order. Returns
    /// the arena together with one rotation entry per vertex (the first edge of
    /// its list, or `None` when the list is empty).
    ///
    /// # Errors
    /// - [`RotationCountMismatch`](PlanarGraphError::RotationCountMismatch) if
    ///   `rotations.len() != vertex_count`
    /// - [`EndpointOutOfRange`](PlanarGraphError::EndpointOutOfRange),
    ///   [`EdgeOutOfRange`](PlanarGraphError::EdgeOutOfRange) for bad indices
    /// - [`RotationEdgeNotIncident`](PlanarGraphError::RotationEdgeNotIncident)
    ///   if a list names an edge that does not touch its vertex
    /// - [`DuplicateRotationEdge`](PlanarGraphError::DuplicateRotationEdge) if an
    ///   edge appears twice around the same vertex (self-loops included)
    /// - [`MissingRotationEdge`](PlanarGraphError::MissingRotationEdge) if an
    ///   edge is absent from the rotation of one of its endpoints
    pub fn from_rotations<R>(
        vertex_count: usize,
        endpoints: &[(VertexId, VertexId)],
        rotations: &[R],
    ) -> Result<(Self, Vec<Option<EdgeId>>), PlanarGraphError>
    where
        R: AsRef<[EdgeId]>,
    {
        if rotations.len() != vertex_count {
            return Err(PlanarGraphError::RotationCountMismatch {
                expected: vertex_count,
                found: rotations.len(),
            });
        }
        let edge_count = endpoints.len();

        // 1) endpoints; `next` points at the edge itself until a rotation claims it
        let mut links = Vec::with_capacity(edge_count);
        for (i, &(a, b)) in endpoints.iter().enumerate() {
            let edge = EdgeId::new(i);
            for vertex in [a, b] {
                if vertex.index() >= vertex_count {
                    return Err(PlanarGraphError::EndpointOutOfRange {
                        edge,
                        vertex,
                        vertex_count,
                    });
                }
            }
            links.push([RotationLink::new(a, edge), RotationLink::new(b, edge)]);
        }

        // 2) thread each rotation through the slot belonging to its vertex
        let mut claimed = vec![[false; 2]; edge_count];
        for (v, rotation) in rotations.iter().enumerate() {
            let vertex = VertexId::new(v);
            let rotation = rotation.as_ref();
            if let Some(&edge) = rotation.iter().duplicates().next() {
                return Err(PlanarGraphError::DuplicateRotationEdge { vertex, edge });
            }
            for (i, &edge) in rotation.iter().enumerate() {
                if edge.index() >= edge_count {
                    return Err(PlanarGraphError::EdgeOutOfRange { edge, edge_count });
                }
                let [a, b] = links[edge.index()];
                let slot = if a.vertex == vertex {
                    0
                } else if b.vertex == vertex {
                    1
                } else {
                    return Err(PlanarGraphError::RotationEdgeNotIncident { vertex, edge });
                };
                claimed[edge.index()][slot] = true;
                links[edge.index()][slot].next = rotation[(i + 1) % rotation.len()];
            }
        }

        // 3) every half-edge must have been threaded; self-loops only use slot 0
        for (i, pair) in links.iter_mut().enumerate() {
            let edge = EdgeId::new(i);
            let [a, b] = *pair;
            if !claimed[i][0] {
                return Err(PlanarGraphError::MissingRotationEdge {
                    vertex: a.vertex,
                    edge,
                });
            }
            if a.vertex == b.vertex {
                pair[1].next = a.next;
            } else if !claimed[i][1] {
                return Err(PlanarGraphError::MissingRotationEdge {
                    vertex: b.vertex,
                    edge,
                });
            }
        }

        let entries = rotations
            .iter()
            .map(|r| r.as_ref().first().copied())
            .collect();
        log::debug!(
            "built rotation system: {} vertices, {} edges",
            vertex_count,
            edge_count
        );
        Ok((Self { links }, entries))
    }

    /// Half-edge `slot` (0 or 1) of `edge`.
    ///
    /// # Panics
    /// Panics if `edge` is out of range or `slot > 1`.
    #[inline]
    pub fn link(&self, edge: EdgeId, slot: usize) -> RotationLink {
        self.links[edge.index()][slot]
    }

    /// All half-edge pairs, indexed by edge.
    #[inline]
    pub fn links(&self) -> &[[RotationLink; 2]] {
        &self.links
    }

    /// Iterator over every edge handle.
    pub fn edge_ids(&self) -> impl ExactSizeIterator<Item = EdgeId> {
        (0..self.links.len()).map(EdgeId::new)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl RotationSystem for PlanarGraphEdges {
    #[inline]
    fn edge_count(&self) -> usize {
        self.links.len()
    }

    #[inline]
    fn opposite_vertex(&self, edge: EdgeId, vertex: VertexId) -> VertexId {
        let [a, b] = &self.links[edge.index()];
        if a.vertex == vertex { b.vertex } else { a.vertex }
    }

    #[inline]
    fn next_in_rotation(&self, edge: EdgeId, vertex: VertexId) -> EdgeId {
        let [a, b] = &self.links[edge.index()];
        if a.vertex == vertex { a.next } else { b.next }
    }

    #[inline]
    fn endpoints(&self, edge: EdgeId) -> (VertexId, VertexId) {
        let [a, b] = &self.links[edge.index()];
        (a.vertex, b.vertex)
    }
}
