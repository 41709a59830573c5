// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Obstacle editing
//!
//! Bridge points and edges mark where a corridor has to pass through the
//! primary obstacle (typically the outer wall). Each one cuts a disk or a
//! flat-capped capsule of `bridge_radius` out of it. Cuts accumulate in
//! order, and other obstacles are never touched.

use super::Environment;
use crate::error::{EnvironmentError, GeometryKind, KernelError, Result};
use crate::geometry::{validate, AsPosition, Primitive};
use geo::{BooleanOps, Coord, MultiPolygon};
use log::debug;

impl<N> Environment<N> {
    /// Carve a disk around every bridge point out of the primary obstacle.
    ///
    /// Returns the number of cuts applied. On error the primary obstacle is
    /// left unchanged.
    pub fn clear_bridge_nodes<P: AsPosition>(&mut self, points: &[P]) -> Result<usize> {
        const OPERATION: &str = "clear_bridge_nodes";
        let radius = self.config.bridge_radius;
        let arc_segments = self.config.arc_segments;

        let cutters = points
            .iter()
            .enumerate()
            .map(|(index, point)| {
                point
                    .to_coord()
                    .map(|center| Primitive::disk(center, radius, arc_segments))
                    .map_err(|source| EnvironmentError::geometry(OPERATION, GeometryKind::BridgePoint, index, source))
            })
            .collect::<Result<Vec<_>>>()?;

        self.carve_primary(OPERATION, &cutters)
    }

    /// Carve a flat-capped capsule along every bridge edge out of the
    /// primary obstacle.
    ///
    /// Each edge is a sequence of at least two points. Returns the number of
    /// cuts applied; edges without length cut nothing. On error the primary
    /// obstacle is left unchanged.
    pub fn clear_bridge_edges<E, P>(&mut self, edges: &[E]) -> Result<usize>
    where
        E: AsRef<[P]>,
        P: AsPosition,
    {
        const OPERATION: &str = "clear_bridge_edges";
        let radius = self.config.bridge_radius;
        let arc_segments = self.config.arc_segments;

        let cutters = edges
            .iter()
            .enumerate()
            .map(|(index, edge)| {
                spine(edge.as_ref())
                    .map(|spine| Primitive::capsule(spine, radius, arc_segments))
                    .map_err(|source| EnvironmentError::geometry(OPERATION, GeometryKind::BridgeEdge, index, source))
            })
            .collect::<Result<Vec<_>>>()?;

        self.carve_primary(OPERATION, &cutters)
    }

    fn carve_primary(&mut self, operation: &'static str, cutters: &[Primitive]) -> Result<usize> {
        let id = self
            .primary
            .ok_or(EnvironmentError::NoPrimaryObstacle { operation })?;
        let index = id.index();
        let region = self
            .obstacles
            .get(index)
            .ok_or(EnvironmentError::UnknownObstacle { id })?;
        validate::check_region(region)
            .map_err(|source| EnvironmentError::geometry(operation, GeometryKind::Obstacle, index, source))?;

        let mut carved: MultiPolygon<f64> = region.clone();
        let mut applied = 0;
        for cutter in cutters {
            let shape = cutter.to_multi_polygon();
            if shape.0.is_empty() {
                continue;
            }
            carved = carved.difference(&shape);
            applied += 1;
        }

        debug!(
            "[Environment] {}: {} of {} cuts applied to obstacle {}, {} pieces remain",
            operation,
            applied,
            cutters.len(),
            id,
            carved.0.len()
        );
        self.obstacles[index] = carved;
        Ok(applied)
    }
}

fn spine<P: AsPosition>(edge: &[P]) -> std::result::Result<Vec<Coord<f64>>, KernelError> {
    if edge.len() < 2 {
        return Err(KernelError::DegenerateEdge { vertices: edge.len() });
    }
    edge.iter().map(|p| p.to_coord()).collect()
}
