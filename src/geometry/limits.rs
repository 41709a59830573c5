// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Coordinate limits of a planning environment

use super::AsPosition;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Axis-aligned valid coordinate range.
///
/// Informational: the environment stores it but never rejects geometry
/// outside it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Limits {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Planar limits with a flat z range
    pub fn planar(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: Point3::new(min_x, min_y, 0.0),
            max: Point3::new(max_x, max_y, 0.0),
        }
    }

    /// Unbounded in every direction
    pub fn unbounded() -> Self {
        Self {
            min: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
            max: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
        }
    }

    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Whether a position lies within the planar x/y range. Malformed
    /// positions are never inside.
    pub fn contains(&self, position: impl AsPosition) -> bool {
        position.to_coord().map_or(false, |c| {
            c.x >= self.min.x && c.x <= self.max.x && c.y >= self.min.y && c.y <= self.max.y
        })
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::unbounded()
    }
}
