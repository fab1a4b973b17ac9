//! PlanarGraphError: Unified error type for planar-rotation public APIs
//!
//! Shape and range problems are reported through this type. Rotation
//! inconsistencies are only reported by the explicit validation pass; the
//! traversal hot path never checks them.

use thiserror::Error;

use crate::topology::ids::{EdgeId, VertexId};

/// Unified error type for planar graph construction, lookup and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlanarGraphError {
    /// `vertex_costs` and `rotation_entries` have different lengths.
    #[error("Shape error: {costs} vertex costs but {entries} rotation entries")]
    LengthMismatch { costs: usize, entries: usize },
    /// A vertex index is not in `0..size`.
    #[error("Vertex {vertex} out of range (graph has {size} vertices)")]
    VertexOutOfRange { vertex: VertexId, size: usize },
    /// An edge index is not in `0..edge_count`.
    #[error("Edge {edge} out of range (store has {edge_count} edges)")]
    EdgeOutOfRange { edge: EdgeId, edge_count: usize },
    /// An edge endpoint is not in `0..vertex_count`.
    #[error("Edge {edge} has endpoint {vertex} outside 0..{vertex_count}")]
    EndpointOutOfRange {
        edge: EdgeId,
        vertex: VertexId,
        vertex_count: usize,
    },
    /// The builder received a rotation list count different from the vertex count.
    #[error("Expected {expected} rotation lists, found {found}")]
    RotationCountMismatch { expected: usize, found: usize },
    /// A rotation lists an edge that does not touch its vertex.
    #[error("Rotation of vertex {vertex} contains edge {edge}, which is not incident to it")]
    RotationEdgeNotIncident { vertex: VertexId, edge: EdgeId },
    /// A rotation lists the same edge more than once.
    #[error("Rotation of vertex {vertex} lists edge {edge} more than once")]
    DuplicateRotationEdge { vertex: VertexId, edge: EdgeId },
    /// An edge is missing from the rotation of one of its endpoints.
    #[error("Edge {edge} is missing from the rotation of its endpoint {vertex}")]
    MissingRotationEdge { vertex: VertexId, edge: EdgeId },
    /// The rotation entry of a vertex is not incident to it.
    #[error("Rotation entry {edge} of vertex {vertex} is not incident to it")]
    EntryNotIncident { vertex: VertexId, edge: EdgeId },
    /// The rotation walk revisited an edge without returning to the entry.
    #[error("Rotation of vertex {vertex} does not close: edge {edge} repeats before the entry")]
    RotationNotClosed { vertex: VertexId, edge: EdgeId },
    /// The rotation closed, but after the wrong number of steps.
    #[error("Rotation of vertex {vertex} closes after {found} edges, expected {expected}")]
    RotationLengthMismatch {
        vertex: VertexId,
        expected: usize,
        found: usize,
    },
    /// A vertex with no rotation entry still has incident edges.
    #[error("Vertex {vertex} has no rotation entry but {incidence} incident edges")]
    UnreachableIncidentEdges { vertex: VertexId, incidence: usize },
    /// A self-loop was found while self-loops are rejected.
    #[error("Self-loop edge {edge} at vertex {vertex}")]
    SelfLoop { vertex: VertexId, edge: EdgeId },
}
