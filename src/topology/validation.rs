//! Rotation-system validation.
//!
//! Traversal trusts the rotation blindly; this module is the opt-in O(V + E)
//! pass that checks it. Every walk here is bounded by the true incidence of
//! the vertex, so validation terminates even on a corrupt rotation that would
//! make [`PlanarGraph::incident_edges`] loop forever.

use std::collections::HashSet;

use crate::debug_invariants::DebugInvariants;
use crate::graph_error::PlanarGraphError;
use crate::topology::edges::RotationSystem;
use crate::topology::ids::{EdgeId, VertexId};
use crate::topology::planar_graph::PlanarGraph;

/// Behavior for self-loop edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelfLoopHandling {
    /// Accept self-loops silently.
    #[default]
    Ignore,
    /// Log a warning per self-loop.
    Warn,
    /// Return an error on the first self-loop.
    Error,
}

/// Optional validation toggles.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationValidationOptions {
    /// How to handle edges whose two endpoints coincide.
    pub self_loops: SelfLoopHandling,
}

impl RotationValidationOptions {
    /// Reject everything the validator can detect, self-loops included.
    pub fn strict() -> Self {
        Self {
            self_loops: SelfLoopHandling::Error,
        }
    }
}

/// Summary of a successful validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotationReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Distinct incident edges per vertex; equals the rotation length.
    pub incidence: Vec<usize>,
    /// Self-loops per vertex.
    pub self_loops: Vec<usize>,
}

impl RotationReport {
    /// Vertices without incident edges.
    pub fn isolated_vertices(&self) -> usize {
        self.incidence.iter().filter(|&&d| d == 0).count()
    }

    /// Largest rotation length.
    pub fn max_incidence(&self) -> usize {
        self.incidence.iter().copied().max().unwrap_or(0)
    }

    /// Total number of self-loops.
    pub fn self_loop_count(&self) -> usize {
        self.self_loops.iter().sum()
    }

    /// Graph-theoretic degree of `vertex`, counting a self-loop twice.
    ///
    /// # Panics
    /// Panics if `vertex` is out of range for the validated graph.
    pub fn graph_degree(&self, vertex: VertexId) -> usize {
        self.incidence[vertex.index()] + self.self_loops[vertex.index()]
    }
}

/// Check that every rotation is a closed simple cycle covering exactly the
/// edges incident to its vertex.
///
/// Returns the first violation found, in vertex order after an initial pass
/// over the edges.
pub fn validate_rotation_system<E>(
    graph: &PlanarGraph<E>,
    options: RotationValidationOptions,
) -> Result<RotationReport, PlanarGraphError>
where
    E: RotationSystem,
{
    let report = tally_incidence(graph, options)?;
    for vertex in graph.vertices() {
        check_rotation(graph, vertex, report.incidence[vertex.index()])?;
    }
    log::debug!(
        "validated rotation system: {} vertices, {} edges, {} isolated, {} self-loops",
        report.vertex_count,
        report.edge_count,
        report.isolated_vertices(),
        report.self_loop_count()
    );
    Ok(report)
}

/// Parallel variant of [`validate_rotation_system`]; rotations are checked
/// concurrently, so the reported violation is *a* violation, not necessarily
/// the first in vertex order.
#[cfg(feature = "rayon")]
pub fn par_validate_rotation_system<E>(
    graph: &PlanarGraph<E>,
    options: RotationValidationOptions,
) -> Result<RotationReport, PlanarGraphError>
where
    E: RotationSystem + Sync,
{
    use rayon::prelude::*;

    let report = tally_incidence(graph, options)?;
    (0..graph.size())
        .into_par_iter()
        .try_for_each(|i| check_rotation(graph, VertexId::new(i), report.incidence[i]))?;
    Ok(report)
}

/// One pass over the edges: endpoint ranges, incidence and self-loops.
fn tally_incidence<E>(
    graph: &PlanarGraph<E>,
    options: RotationValidationOptions,
) -> Result<RotationReport, PlanarGraphError>
where
    E: RotationSystem,
{
    let n = graph.size();
    let edges = graph.edges();
    let m = edges.edge_count();
    let mut incidence = vec![0usize; n];
    let mut self_loops = vec![0usize; n];

    for i in 0..m {
        let edge = EdgeId::new(i);
        let (a, b) = edges.endpoints(edge);
        for vertex in [a, b] {
            if vertex.index() >= n {
                return Err(PlanarGraphError::EndpointOutOfRange {
                    edge,
                    vertex,
                    vertex_count: n,
                });
            }
        }
        if a == b {
            match options.self_loops {
                SelfLoopHandling::Ignore => {}
                SelfLoopHandling::Warn => {
                    log::warn!("self-loop edge {edge} at vertex {a}");
                }
                SelfLoopHandling::Error => {
                    return Err(PlanarGraphError::SelfLoop { vertex: a, edge });
                }
            }
            incidence[a.index()] += 1;
            self_loops[a.index()] += 1;
        } else {
            incidence[a.index()] += 1;
            incidence[b.index()] += 1;
        }
    }

    Ok(RotationReport {
        vertex_count: n,
        edge_count: m,
        incidence,
        self_loops,
    })
}

/// Bounded walk around `vertex`: at most `incidence + 1` rotation steps.
fn check_rotation<E>(
    graph: &PlanarGraph<E>,
    vertex: VertexId,
    incidence: usize,
) -> Result<(), PlanarGraphError>
where
    E: RotationSystem,
{
    let edges = graph.edges();
    let edge_count = edges.edge_count();

    let Some(start) = graph.rotation_entries()[vertex.index()] else {
        if incidence > 0 {
            return Err(PlanarGraphError::UnreachableIncidentEdges { vertex, incidence });
        }
        return Ok(());
    };
    if start.index() >= edge_count {
        return Err(PlanarGraphError::EdgeOutOfRange {
            edge: start,
            edge_count,
        });
    }
    if !edges.is_incident(start, vertex) {
        return Err(PlanarGraphError::EntryNotIncident {
            vertex,
            edge: start,
        });
    }

    let mut seen = HashSet::with_capacity(incidence);
    seen.insert(start);
    let mut current = start;
    loop {
        let next = edges.next_in_rotation(current, vertex);
        if next == start {
            break;
        }
        if next.index() >= edge_count {
            return Err(PlanarGraphError::EdgeOutOfRange {
                edge: next,
                edge_count,
            });
        }
        if !edges.is_incident(next, vertex) {
            return Err(PlanarGraphError::RotationEdgeNotIncident { vertex, edge: next });
        }
        // distinct incident edges are bounded by `incidence`, so this ends the walk
        if !seen.insert(next) {
            return Err(PlanarGraphError::RotationNotClosed { vertex, edge: next });
        }
        current = next;
    }

    if seen.len() != incidence {
        return Err(PlanarGraphError::RotationLengthMismatch {
            vertex,
            expected: incidence,
            found: seen.len(),
        });
    }
    Ok(())
}

impl<E> DebugInvariants for PlanarGraph<E>
where
    E: RotationSystem,
{
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "PlanarGraph");
    }

    fn validate_invariants(&self) -> Result<(), PlanarGraphError> {
        validate_rotation_system(self, RotationValidationOptions::default()).map(|_| ())
    }
}
