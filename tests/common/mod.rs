#![allow(dead_code)]

use std::collections::HashMap;

use planar_rotation::topology::{EdgeId, PlanarGraph, VertexId};

pub fn v(i: usize) -> VertexId {
    VertexId::new(i)
}

pub fn e(i: usize) -> EdgeId {
    EdgeId::new(i)
}

/// `w x h` grid triangulated by the `(x, y) - (x+1, y+1)` diagonals, with
/// counter-clockwise rotations taken from the straight-line drawing.
pub fn triangulated_grid(w: usize, h: usize) -> PlanarGraph {
    let id = |x: usize, y: usize| y * w + x;
    let mut endpoints = Vec::new();
    let mut index = HashMap::new();
    let mut add = |a: usize, b: usize| {
        index.insert((a.min(b), a.max(b)), e(endpoints.len()));
        endpoints.push((v(a), v(b)));
    };
    for y in 0..h {
        for x in 0..w {
            if x + 1 < w {
                add(id(x, y), id(x + 1, y));
            }
            if y + 1 < h {
                add(id(x, y), id(x, y + 1));
            }
            if x + 1 < w && y + 1 < h {
                add(id(x, y), id(x + 1, y + 1));
            }
        }
    }

    // E, NE, N, W, SW, S is counter-clockwise order around a grid point
    let dirs: [(isize, isize); 6] = [(1, 0), (1, 1), (0, 1), (-1, 0), (-1, -1), (0, -1)];
    let mut rotations = vec![Vec::new(); w * h];
    for y in 0..h {
        for x in 0..w {
            let here = id(x, y);
            for (dx, dy) in dirs {
                let (nx, ny) = (x as isize + dx, y as isize + dy);
                if nx < 0 || ny < 0 || nx >= w as isize || ny >= h as isize {
                    continue;
                }
                let there = id(nx as usize, ny as usize);
                rotations[here].push(index[&(here.min(there), here.max(there))]);
            }
        }
    }

    PlanarGraph::from_rotations(vec![1.0; w * h], &endpoints, &rotations)
        .expect("grid rotations are consistent")
}
