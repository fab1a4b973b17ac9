mod common;

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use common::{triangulated_grid, v};
use planar_rotation::DebugInvariants;
use planar_rotation::topology::validation::{RotationValidationOptions, validate_rotation_system};
use planar_rotation::topology::{EdgeId, PlanarGraph, RotationSystem, VertexId};

fn grid_edge_count(w: usize, h: usize) -> usize {
    (w - 1) * h + w * (h - 1) + (w - 1) * (h - 1)
}

/// Count faces by following darts: from dart (u, e) with far end w, the next
/// dart of the same face is (w, next edge after e around w).
fn count_faces(g: &PlanarGraph) -> usize {
    let edges = g.edges();
    let mut seen: HashSet<(EdgeId, VertexId)> = HashSet::new();
    let mut faces = 0;
    for vertex in g.vertices() {
        for edge in g.incident_edges(vertex).unwrap() {
            if seen.contains(&(edge, vertex)) {
                continue;
            }
            faces += 1;
            let (mut e, mut u) = (edge, vertex);
            while seen.insert((e, u)) {
                let w = edges.opposite_vertex(e, u);
                e = edges.next_in_rotation(e, w);
                u = w;
            }
        }
    }
    faces
}

#[test]
fn grid_is_rotation_consistent() {
    let g = triangulated_grid(5, 4);
    assert_eq!(g.size(), 20);
    assert_eq!(g.edges_count(), grid_edge_count(5, 4));
    let report = validate_rotation_system(&g, RotationValidationOptions::strict()).unwrap();
    assert_eq!(report.max_incidence(), 6);
    assert!(g.validate_invariants().is_ok());

    // interior point (2, 1) is id 7
    assert_eq!(g.rotation_len(v(7)).unwrap(), 6);
    // corners (0,0) and (4,3) touch the diagonals, the other two do not
    assert_eq!(g.rotation_len(v(0)).unwrap(), 3);
    assert_eq!(g.rotation_len(v(4)).unwrap(), 2);
    assert_eq!(g.rotation_len(v(19)).unwrap(), 3);
}

#[test]
fn grid_rotation_is_counter_clockwise() {
    let g = triangulated_grid(3, 3);
    // center (1,1) = 4: E, NE, N, W, SW, S
    let adj: Vec<_> = g.adjacent_vertices(v(4)).unwrap().collect();
    assert_eq!(adj, vec![v(5), v(8), v(7), v(3), v(0), v(1)]);
}

#[test]
fn grid_embedding_satisfies_euler_formula() {
    for (w, h) in [(2, 2), (3, 5), (6, 6)] {
        let g = triangulated_grid(w, h);
        let faces = count_faces(&g);
        let (vs, es) = (g.size() as isize, g.edges_count() as isize);
        assert_eq!(vs - es + faces as isize, 2, "{w}x{h}");
    }
}

#[test]
fn bfs_layers_follow_grid_distance() {
    let (w, h) = (6, 5);
    let g = triangulated_grid(w, h);
    let mut dist = vec![usize::MAX; g.size()];
    let mut queue = VecDeque::from([v(0)]);
    dist[0] = 0;
    while let Some(u) = queue.pop_front() {
        for nbr in g.adjacent_vertices(u).unwrap() {
            if dist[nbr.index()] == usize::MAX {
                dist[nbr.index()] = dist[u.index()] + 1;
                queue.push_back(nbr);
            }
        }
    }
    for y in 0..h {
        for x in 0..w {
            assert_eq!(dist[y * w + x], x.max(y), "({x}, {y})");
        }
    }
}

#[test]
fn concurrent_readers_see_the_same_rotations() {
    let g = Arc::new(triangulated_grid(8, 8));
    let expected = 2 * g.edges_count();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let g = Arc::clone(&g);
                s.spawn(move || {
                    g.vertices()
                        .map(|vertex| g.incident_edges(vertex).unwrap().count())
                        .sum::<usize>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn total_cost_counts_every_vertex() {
    let g = triangulated_grid(4, 3);
    assert_eq!(g.total_cost(), 12.0);
}
