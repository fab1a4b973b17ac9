//! CSR export of a rotation system.
//!
//! Partitioners and BFS layering want flat arrays rather than rotation walks.
//! [`rotation_csr`] walks every rotation once and records neighbours in
//! embedding order, keeping the edge handle alongside each neighbour so the
//! cyclic order survives the conversion.

use crate::topology::edges::RotationSystem;
use crate::topology::ids::{EdgeId, VertexId};
use crate::topology::planar_graph::PlanarGraph;
use crate::topology::traversal::IncidentEdges;

/// CSR-style adjacency in rotation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationCsr {
    /// CSR offsets into `adjncy` for each vertex.
    pub xadj: Vec<usize>,
    /// Neighbour indices, rotation order within each vertex.
    pub adjncy: Vec<usize>,
    /// Edge handle for each entry of `adjncy`.
    pub edge_ids: Vec<EdgeId>,
}

impl RotationCsr {
    /// Return the neighbor index slice for vertex `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjncy[self.xadj[i]..self.xadj[i + 1]]
    }

    /// Return the incident edge slice for vertex `i`.
    #[inline]
    pub fn incident(&self, i: usize) -> &[EdgeId] {
        &self.edge_ids[self.xadj[i]..self.xadj[i + 1]]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.xadj.len().saturating_sub(1)
    }
}

/// Flatten every rotation of `graph` into CSR arrays.
///
/// Requires a rotation-consistent graph; like traversal, it does not terminate
/// otherwise.
pub fn rotation_csr<E>(graph: &PlanarGraph<E>) -> RotationCsr
where
    E: RotationSystem,
{
    let edges = graph.edges();
    let mut xadj = Vec::with_capacity(graph.size() + 1);
    let mut adjncy = Vec::with_capacity(2 * graph.edges_count());
    let mut edge_ids = Vec::with_capacity(2 * graph.edges_count());
    xadj.push(0);
    for (i, entry) in graph.rotation_entries().iter().enumerate() {
        let vertex = VertexId::new(i);
        for edge in IncidentEdges::new(edges, vertex, *entry) {
            adjncy.push(edges.opposite_vertex(edge, vertex).index());
            edge_ids.push(edge);
        }
        xadj.push(adjncy.len());
    }
    RotationCsr {
        xadj,
        adjncy,
        edge_ids,
    }
}
