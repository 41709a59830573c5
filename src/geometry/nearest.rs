// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Nearest-point queries
//!
//! Two distinct primitives live here:
//! - [`nearest_point_on`] projects onto continuous geometry, so the result
//!   may lie anywhere along a fragment's edges.
//! - [`nearest_vertex`] only considers a discrete vertex set.
//!
//! Pairwise connection search deliberately combines both: the anchor on
//! one fragment is a vertex, the landing point on the other is a
//! projection.

use crate::error::KernelError;
use crate::utils::math::distance;
use geo::{Closest, ClosestPoint, Coord, LineString, Point};

/// Closest point on `fragment` to `point`.
///
/// A fragment whose segments all have zero length collapses to its first
/// vertex.
pub fn nearest_point_on(fragment: &LineString<f64>, point: Coord<f64>) -> Result<Coord<f64>, KernelError> {
    match fragment.closest_point(&Point::from(point)) {
        Closest::Intersection(p) | Closest::SinglePoint(p) => Ok(p.0),
        Closest::Indeterminate => fragment
            .0
            .first()
            .copied()
            .ok_or(KernelError::DegenerateFragment { vertices: 0 }),
    }
}

/// Euclidean distance from `point` to the closest point on `fragment`
pub fn distance_to(fragment: &LineString<f64>, point: Coord<f64>) -> Result<f64, KernelError> {
    let nearest = nearest_point_on(fragment, point)?;
    Ok(distance(nearest, point))
}

/// Vertex in `vertices` closest to `target` as a whole.
///
/// Returns the vertex index, the vertex and its distance. The first of
/// several equally close vertices wins.
pub fn nearest_vertex(
    vertices: &[Coord<f64>],
    target: &LineString<f64>,
) -> Result<(usize, Coord<f64>, f64), KernelError> {
    let mut best: Option<(usize, Coord<f64>, f64)> = None;
    for (index, vertex) in vertices.iter().enumerate() {
        let d = distance_to(target, *vertex)?;
        if best.map_or(true, |(_, _, best_d)| d < best_d) {
            best = Some((index, *vertex, d));
        }
    }
    best.ok_or(KernelError::DegenerateFragment { vertices: 0 })
}
