// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Collision predicates
//!
//! Touching an obstacle (boundary-only contact) is not a collision; only
//! interior overlap is. How several obstacles combine is governed by
//! [`CollisionPolicy`].

use super::{Environment, ObstacleId};
use crate::config::CollisionPolicy;
use crate::error::{EnvironmentError, GeometryKind, Result};
use crate::geometry::contact::{self, Contact};
use crate::geometry::{validate, AsPosition};
use geo::{Coord, MultiPolygon};

impl<N> Environment<N> {
    /// Whether the point at `position` is in collision
    pub fn point_in_collision(&self, position: impl AsPosition) -> Result<bool> {
        Ok(self
            .classify_point(position)?
            .map_or(false, |(_, contact)| contact.is_collision()))
    }

    /// Whether the straight segment from `start` to `end` is in collision
    pub fn line_in_collision(&self, start: impl AsPosition, end: impl AsPosition) -> Result<bool> {
        Ok(self
            .classify_segment(start, end)?
            .map_or(false, |(_, contact)| contact.is_collision()))
    }

    /// The deciding obstacle contact of a point, or `None` when the point
    /// meets no obstacle
    pub fn classify_point(&self, position: impl AsPosition) -> Result<Option<(ObstacleId, Contact)>> {
        const OPERATION: &str = "point_in_collision";
        let point = position
            .to_coord()
            .map_err(|source| EnvironmentError::input(OPERATION, source))?;
        self.resolve_contact(OPERATION, |region| contact::classify_point(region, point))
    }

    /// The deciding obstacle contact of a segment, or `None` when the
    /// segment meets no obstacle
    pub fn classify_segment(
        &self,
        start: impl AsPosition,
        end: impl AsPosition,
    ) -> Result<Option<(ObstacleId, Contact)>> {
        const OPERATION: &str = "line_in_collision";
        let start = start
            .to_coord()
            .map_err(|source| EnvironmentError::input(OPERATION, source))?;
        let end = end
            .to_coord()
            .map_err(|source| EnvironmentError::input(OPERATION, source))?;
        self.resolve_contact(OPERATION, |region| contact::classify_segment(region, start, end))
    }

    pub(crate) fn segment_collides(
        &self,
        operation: &'static str,
        start: Coord<f64>,
        end: Coord<f64>,
    ) -> Result<bool> {
        Ok(self
            .resolve_contact(operation, |region| contact::classify_segment(region, start, end))?
            .map_or(false, |(_, contact)| contact.is_collision()))
    }

    /// Walk the obstacles in insertion order and pick the contact that
    /// decides the query under the configured policy.
    fn resolve_contact<F>(&self, operation: &'static str, classify: F) -> Result<Option<(ObstacleId, Contact)>>
    where
        F: Fn(&MultiPolygon<f64>) -> Contact,
    {
        let mut strongest: Option<(ObstacleId, Contact)> = None;

        for (index, region) in self.obstacles.iter().enumerate() {
            validate::check_region(region)
                .map_err(|source| EnvironmentError::geometry(operation, GeometryKind::Obstacle, index, source))?;

            let contact = classify(region);
            if contact == Contact::Disjoint {
                continue;
            }

            let id = ObstacleId(index);
            match self.config.collision_policy {
                CollisionPolicy::FirstMatch => return Ok(Some((id, contact))),
                CollisionPolicy::AnyInterior => {
                    if contact == Contact::Overlapping {
                        return Ok(Some((id, contact)));
                    }
                    if strongest.is_none() {
                        strongest = Some((id, contact));
                    }
                }
            }
        }

        Ok(strongest)
    }
}
