//! Top-level module for planar graph topology.
//!
//! This module provides:
//! - `VertexId` / `EdgeId` handles
//! - The `RotationSystem` edge-store contract and the `PlanarGraphEdges` arena
//! - `PlanarGraph` and its lazy rotation cursors
//! - Opt-in rotation validation and CSR export
//!
//! Most users build a `PlanarGraph` with `PlanarGraph::from_rotations` and walk
//! it with `incident_edges` / `adjacent_vertices`.

pub mod adjacency;
pub mod edges;
pub mod ids;
pub mod planar_graph;
pub mod traversal;
pub mod validation;

pub use edges::{PlanarGraphEdges, RotationLink, RotationSystem};
pub use ids::{EdgeId, VertexId};
pub use planar_graph::PlanarGraph;
pub use traversal::{AdjacentVertices, IncidentEdges};
