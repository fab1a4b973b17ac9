//! `PlanarGraph`: vertex costs plus a rotation system.
//!
//! Each vertex stores its cost and a single *rotation entry*, one of its
//! incident edges. Everything else about connectivity is answered by the edge
//! store through the [`RotationSystem`] contract: the graph never looks inside
//! the store's layout.
//!
//! The graph is read-only after construction. Lookups with an out-of-range
//! vertex fail with [`PlanarGraphError::VertexOutOfRange`]; rotation
//! consistency is *not* checked on the traversal path (see
//! [`validate_rotation_system`](crate::topology::validation::validate_rotation_system)).

use serde::{Deserialize, Deserializer};

use crate::graph_error::PlanarGraphError;
use crate::topology::edges::{PlanarGraphEdges, RotationSystem};
use crate::topology::ids::{EdgeId, VertexId};
use crate::topology::traversal::{AdjacentVertices, IncidentEdges};

/// Embedded planar graph with per-vertex costs.
///
/// `E` is the edge store. It may be owned (`PlanarGraphEdges`), borrowed
/// (`&PlanarGraphEdges`) or shared (`Arc<PlanarGraphEdges>`).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlanarGraph<E = PlanarGraphEdges> {
    vertex_costs: Vec<f32>,
    rotation_entries: Vec<Option<EdgeId>>,
    edges: E,
    #[serde(skip)]
    size: usize,
}

impl<E> PlanarGraph<E> {
    /// Assemble a graph from per-vertex costs, per-vertex rotation entries and
    /// an edge store.
    ///
    /// Every `Some` entry must name an edge incident to its vertex; this is not
    /// checked here.
    ///
    /// # Errors
    /// [`PlanarGraphError::LengthMismatch`] if the two vectors differ in length.
    pub fn new(
        vertex_costs: Vec<f32>,
        rotation_entries: Vec<Option<EdgeId>>,
        edges: E,
    ) -> Result<Self, PlanarGraphError> {
        if vertex_costs.len() != rotation_entries.len() {
            return Err(PlanarGraphError::LengthMismatch {
                costs: vertex_costs.len(),
                entries: rotation_entries.len(),
            });
        }
        let size = vertex_costs.len();
        Ok(Self {
            vertex_costs,
            rotation_entries,
            edges,
            size,
        })
    }

    #[inline]
    pub fn vertex_costs(&self) -> &[f32] {
        &self.vertex_costs
    }

    /// One incident edge per vertex, `None` for isolated vertices.
    #[inline]
    pub fn rotation_entries(&self) -> &[Option<EdgeId>] {
        &self.rotation_entries
    }

    #[inline]
    pub fn edges(&self) -> &E {
        &self.edges
    }

    /// Number of vertices, fixed at construction.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn check_vertex(&self, vertex: VertexId) -> Result<usize, PlanarGraphError> {
        let i = vertex.index();
        if i < self.size {
            Ok(i)
        } else {
            Err(PlanarGraphError::VertexOutOfRange {
                vertex,
                size: self.size,
            })
        }
    }

    pub fn vertex_cost(&self, vertex: VertexId) -> Result<f32, PlanarGraphError> {
        let i = self.check_vertex(vertex)?;
        Ok(self.vertex_costs[i])
    }

    pub fn rotation_entry(&self, vertex: VertexId) -> Result<Option<EdgeId>, PlanarGraphError> {
        let i = self.check_vertex(vertex)?;
        Ok(self.rotation_entries[i])
    }

    /// All vertex handles in index order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> {
        (0..self.size).map(VertexId::new)
    }

    /// Sum of all vertex costs, accumulated in `f64`.
    pub fn total_cost(&self) -> f64 {
        self.vertex_costs.iter().map(|&c| f64::from(c)).sum()
    }

    /// Give back the parts the graph was built from.
    pub fn into_parts(self) -> (Vec<f32>, Vec<Option<EdgeId>>, E) {
        (self.vertex_costs, self.rotation_entries, self.edges)
    }
}

impl<E> PlanarGraph<E>
where
    E: RotationSystem,
{
    /// Current number of edges in the store.
    #[inline]
    pub fn edges_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Lazily walk the edges around `vertex` in embedding order, starting at
    /// its rotation entry. Isolated vertices yield nothing.
    pub fn incident_edges(
        &self,
        vertex: VertexId,
    ) -> Result<IncidentEdges<'_, E>, PlanarGraphError> {
        let i = self.check_vertex(vertex)?;
        Ok(IncidentEdges::new(
            &self.edges,
            vertex,
            self.rotation_entries[i],
        ))
    }

    /// Lazily walk the neighbours of `vertex`, one per incident edge, in the
    /// same order as [`incident_edges`](Self::incident_edges).
    ///
    /// Neighbours are not deduplicated: parallel edges repeat a neighbour and a
    /// self-loop yields `vertex` itself.
    pub fn adjacent_vertices(
        &self,
        vertex: VertexId,
    ) -> Result<AdjacentVertices<'_, E>, PlanarGraphError> {
        let i = self.check_vertex(vertex)?;
        Ok(AdjacentVertices::new(
            &self.edges,
            vertex,
            self.rotation_entries[i],
        ))
    }

    /// Number of edges in the rotation of `vertex`. Walks the whole rotation.
    pub fn rotation_len(&self, vertex: VertexId) -> Result<usize, PlanarGraphError> {
        Ok(self.incident_edges(vertex)?.count())
    }
}

impl PlanarGraph<PlanarGraphEdges> {
    /// Build a graph from edge endpoints and per-vertex cyclic edge orders.
    ///
    /// See [`PlanarGraphEdges::from_rotations`] for the accepted input and the
    /// errors it reports. The rotation entry of each vertex is the first edge
    /// of its list.
    pub fn from_rotations<R>(
        vertex_costs: Vec<f32>,
        endpoints: &[(VertexId, VertexId)],
        rotations: &[R],
    ) -> Result<Self, PlanarGraphError>
    where
        R: AsRef<[EdgeId]>,
    {
        let (edges, entries) =
            PlanarGraphEdges::from_rotations(vertex_costs.len(), endpoints, rotations)?;
        let graph = Self::new(vertex_costs, entries, edges)?;
        crate::debug_invariants!(
            crate::topology::validation::validate_rotation_system(&graph, Default::default()),
            "PlanarGraph::from_rotations"
        );
        Ok(graph)
    }
}

#[derive(Deserialize)]
struct RawPlanarGraph<E> {
    vertex_costs: Vec<f32>,
    rotation_entries: Vec<Option<EdgeId>>,
    edges: E,
}

impl<'de, E> Deserialize<'de> for PlanarGraph<E>
where
    E: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawPlanarGraph::<E>::deserialize(deserializer)?;
        PlanarGraph::new(raw.vertex_costs, raw.rotation_entries, raw.edges)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn v(i: usize) -> VertexId {
        VertexId::new(i)
    }
    fn e(i: usize) -> EdgeId {
        EdgeId::new(i)
    }

    fn square() -> PlanarGraph {
        // 0-1-2-3-0
        let endpoints = [(v(0), v(1)), (v(1), v(2)), (v(2), v(3)), (v(3), v(0))];
        let rotations = [
            vec![e(0), e(3)],
            vec![e(1), e(0)],
            vec![e(2), e(1)],
            vec![e(3), e(2)],
        ];
        PlanarGraph::from_rotations(vec![1.0, 2.0, 3.0, 4.0], &endpoints, &rotations).unwrap()
    }

    #[test]
    fn accessors() {
        let g = square();
        assert_eq!(g.size(), 4);
        assert_eq!(g.edges_count(), 4);
        assert_eq!(g.vertex_costs(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(g.rotation_entries()[1], Some(e(1)));
        assert_eq!(g.vertex_cost(v(2)).unwrap(), 3.0);
        assert_eq!(g.rotation_entry(v(3)).unwrap(), Some(e(3)));
        assert_eq!(g.vertices().collect::<Vec<_>>(), vec![v(0), v(1), v(2), v(3)]);
        assert_eq!(g.total_cost(), 10.0);
        assert_eq!(g.edges().edge_count(), 4);
    }

    #[test]
    fn out_of_range_vertex_is_an_error() {
        let g = square();
        let expected = PlanarGraphError::VertexOutOfRange {
            vertex: v(4),
            size: 4,
        };
        assert_eq!(g.vertex_cost(v(4)).unwrap_err(), expected);
        assert_eq!(g.rotation_entry(v(4)).unwrap_err(), expected);
        assert!(matches!(g.incident_edges(v(4)), Err(ref err) if *err == expected));
        assert!(matches!(g.adjacent_vertices(v(9)), Err(PlanarGraphError::VertexOutOfRange { .. })));
        assert!(g.rotation_len(v(100)).is_err());
    }

    #[test]
    fn traversal_in_rotation_order() {
        let g = square();
        let inc: Vec<_> = g.incident_edges(v(0)).unwrap().collect();
        assert_eq!(inc, vec![e(0), e(3)]);
        let adj: Vec<_> = g.adjacent_vertices(v(0)).unwrap().collect();
        assert_eq!(adj, vec![v(1), v(3)]);
        assert_eq!(g.rotation_len(v(2)).unwrap(), 2);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = PlanarGraph::new(vec![1.0; 3], vec![None; 2], PlanarGraphEdges::default())
            .unwrap_err();
        assert_eq!(err, PlanarGraphError::LengthMismatch { costs: 3, entries: 2 });
    }

    #[test]
    fn shared_and_borrowed_stores() {
        let g = square();
        let (costs, entries, edges) = g.into_parts();
        let shared = Arc::new(edges);
        let a = PlanarGraph::new(costs.clone(), entries.clone(), Arc::clone(&shared)).unwrap();
        let b = PlanarGraph::new(costs, entries, &*shared).unwrap();
        for vertex in a.vertices() {
            let x: Vec<_> = a.incident_edges(vertex).unwrap().collect();
            let y: Vec<_> = b.incident_edges(vertex).unwrap().collect();
            assert_eq!(x, y);
        }
        assert_eq!(a.edges_count(), b.edges_count());
    }

    #[test]
    fn json_roundtrip_revalidates_shape() {
        let g = square();
        let s = serde_json::to_string(&g).unwrap();
        let back: PlanarGraph = serde_json::from_str(&s).unwrap();
        assert_eq!(back, g);
        assert_eq!(back.size(), 4);

        let bad = r#"{"vertex_costs":[1.0],"rotation_entries":[],"edges":{"links":[]}}"#;
        assert!(serde_json::from_str::<PlanarGraph>(bad).is_err());
    }
}
