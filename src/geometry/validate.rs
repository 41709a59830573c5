// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Well-formedness checks for scene geometry

use super::position::planar;
use crate::error::KernelError;
use geo::{Coord, LineString, MultiPolygon};

/// A path fragment needs two or more finite vertices.
pub fn check_fragment(fragment: &LineString<f64>) -> Result<(), KernelError> {
    let vertices = fragment.0.len();
    if vertices < 2 {
        return Err(KernelError::DegenerateFragment { vertices });
    }
    check_coords(&fragment.0)
}

/// Every ring of every polygon needs three or more distinct finite vertices.
///
/// A region with no polygons at all is valid: it is what remains after an
/// obstacle has been carved away completely.
pub fn check_region(region: &MultiPolygon<f64>) -> Result<(), KernelError> {
    for polygon in region.iter() {
        check_ring(polygon.exterior())?;
        for interior in polygon.interiors() {
            check_ring(interior)?;
        }
    }
    Ok(())
}

fn check_ring(ring: &LineString<f64>) -> Result<(), KernelError> {
    check_coords(&ring.0)?;

    let mut distinct: Vec<Coord<f64>> = Vec::with_capacity(ring.0.len());
    for coord in &ring.0 {
        if !distinct.contains(coord) {
            distinct.push(*coord);
        }
        if distinct.len() >= 3 {
            return Ok(());
        }
    }
    Err(KernelError::DegenerateRing {
        vertices: distinct.len(),
    })
}

fn check_coords(coords: &[Coord<f64>]) -> Result<(), KernelError> {
    for coord in coords {
        planar(coord.x, coord.y)?;
    }
    Ok(())
}
