#![cfg_attr(docsrs, feature(doc_cfg))]
//! # planar-rotation
//!
//! planar-rotation is the graph core for planar separator algorithms
//! (Lipton–Tarjan and relatives). It stores an embedded planar graph as a
//! *rotation system*: every edge carries, for each of its two endpoints, the
//! next edge around that endpoint in embedding order. Walking those links
//! enumerates the edges around a vertex in O(1) per step, with no per-vertex
//! adjacency lists.
//!
//! ## Features
//! - `PlanarGraph` with per-vertex costs and lazy `incident_edges` /
//!   `adjacent_vertices` cursors
//! - `PlanarGraphEdges`, a flat edge arena, plus the `RotationSystem` trait for
//!   custom stores (owned, borrowed or `Arc`-shared)
//! - A checked builder from per-vertex cyclic edge orders
//! - Opt-in O(V + E) rotation validation, serial or parallel (`rayon` feature)
//! - CSR export in rotation order for downstream partitioners
//!
//! ## Invariant checks
//! Traversal never checks rotation consistency. Call
//! [`topology::validation::validate_rotation_system`] or
//! [`DebugInvariants::validate_invariants`] when the producer is not trusted.
//! Debug builds, and builds with the `strict-invariants` or `check-invariants`
//! feature, additionally validate graphs built through
//! `PlanarGraph::from_rotations`.
//!
//! ## Usage
//!
//! ```rust
//! use planar_rotation::prelude::*;
//!
//! let v = VertexId::new;
//! let e = EdgeId::new;
//! // triangle 0-1-2
//! let endpoints = [(v(0), v(1)), (v(1), v(2)), (v(2), v(0))];
//! let rotations = [vec![e(0), e(2)], vec![e(1), e(0)], vec![e(2), e(1)]];
//! let g = PlanarGraph::from_rotations(vec![1.0; 3], &endpoints, &rotations)?;
//!
//! let nbrs: Vec<_> = g.adjacent_vertices(v(0))?.collect();
//! assert_eq!(nbrs, vec![v(1), v(2)]);
//! # Ok::<(), planar_rotation::graph_error::PlanarGraphError>(())
//! ```

pub mod debug_invariants;
pub mod graph_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph_error::PlanarGraphError;
    pub use crate::topology::adjacency::{RotationCsr, rotation_csr};
    pub use crate::topology::edges::{PlanarGraphEdges, RotationLink, RotationSystem};
    pub use crate::topology::ids::{EdgeId, VertexId};
    pub use crate::topology::planar_graph::PlanarGraph;
    pub use crate::topology::traversal::{AdjacentVertices, IncidentEdges};
    #[cfg(feature = "rayon")]
    pub use crate::topology::validation::par_validate_rotation_system;
    pub use crate::topology::validation::{
        RotationReport, RotationValidationOptions, SelfLoopHandling, validate_rotation_system,
    };
}
