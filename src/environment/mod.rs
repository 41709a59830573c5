// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Planning environment
//!
//! An [`Environment`] holds obstacle regions and known-free path fragments
//! and answers the spatial queries a hierarchical planner needs to wire up
//! its graphs:
//! - collision predicates for points and segments (`collision`)
//! - nearest admissible connections to and between fragments (`connection`)
//! - carving corridors through the primary obstacle (`editor`)
//! - parallel read-only batches of the above (`batch`)

mod batch;
mod collision;
mod connection;
mod editor;

pub use connection::Connector;

use crate::config::EnvironmentConfig;
use crate::error::{EnvironmentError, Result};
use crate::geometry::Limits;
use geo::{LineString, MultiPolygon};
use std::fmt;

/// Handle of an obstacle, stable for the lifetime of the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObstacleId(usize);

impl ObstacleId {
    /// Insertion index of the obstacle
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ObstacleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Obstacle regions and path fragments of one planning level.
///
/// Obstacles and fragments are append-only. The only mutation of existing
/// geometry is carving the primary obstacle, which replaces its region in
/// place and keeps its handle.
#[derive(Debug, Clone)]
pub struct Environment<N = String> {
    name: N,
    limits: Limits,
    config: EnvironmentConfig,
    obstacles: Vec<MultiPolygon<f64>>,
    paths: Vec<LineString<f64>>,
    primary: Option<ObstacleId>,
}

impl<N> Environment<N> {
    /// Create an empty environment with the default configuration
    pub fn new(name: N, limits: Limits) -> Self {
        Self::from_parts(name, limits, EnvironmentConfig::default())
    }

    /// Create an empty environment with `config`, which must pass
    /// [`EnvironmentConfig::validate`].
    pub fn with_config(name: N, limits: Limits, config: EnvironmentConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|err| EnvironmentError::InvalidConfig { reason: err.to_string() })?;
        Ok(Self::from_parts(name, limits, config))
    }

    fn from_parts(name: N, limits: Limits, config: EnvironmentConfig) -> Self {
        Self {
            name,
            limits,
            config,
            obstacles: Vec::new(),
            paths: Vec::new(),
            primary: None,
        }
    }

    pub fn name(&self) -> &N {
        &self.name
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn config(&self) -> &EnvironmentConfig {
        &self.config
    }

    /// Append an obstacle region. The first obstacle added becomes the
    /// primary obstacle.
    pub fn add_obstacle(&mut self, region: impl Into<MultiPolygon<f64>>) -> ObstacleId {
        let id = ObstacleId(self.obstacles.len());
        self.obstacles.push(region.into());
        if self.primary.is_none() {
            self.primary = Some(id);
        }
        id
    }

    /// Append a path fragment and return its index
    pub fn add_path(&mut self, fragment: impl Into<LineString<f64>>) -> usize {
        self.paths.push(fragment.into());
        self.paths.len() - 1
    }

    /// Obstacle regions in insertion order
    pub fn obstacles(&self) -> &[MultiPolygon<f64>] {
        &self.obstacles
    }

    pub fn obstacle(&self, id: ObstacleId) -> Option<&MultiPolygon<f64>> {
        self.obstacles.get(id.0)
    }

    pub fn obstacle_ids(&self) -> impl Iterator<Item = ObstacleId> + '_ {
        (0..self.obstacles.len()).map(ObstacleId)
    }

    /// Path fragments in insertion order
    pub fn paths(&self) -> &[LineString<f64>] {
        &self.paths
    }

    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// The obstacle carved by the bridge editor
    pub fn primary_obstacle(&self) -> Option<ObstacleId> {
        self.primary
    }

    pub fn primary_region(&self) -> Option<&MultiPolygon<f64>> {
        self.primary.and_then(|id| self.obstacle(id))
    }

    /// Designate another stored obstacle as the primary one
    pub fn set_primary_obstacle(&mut self, id: ObstacleId) -> Result<()> {
        if id.0 >= self.obstacles.len() {
            return Err(EnvironmentError::UnknownObstacle { id });
        }
        self.primary = Some(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    #[test]
    fn test_scene_store_appends_in_order() {
        let mut env = Environment::new("level_0".to_string(), Limits::planar(0.0, 0.0, 10.0, 10.0));
        assert_eq!(env.name(), "level_0");
        assert!(env.primary_obstacle().is_none());

        let wall = env.add_obstacle(polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)]);
        let block = env.add_obstacle(polygon![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0), (x: 6.0, y: 6.0)]);
        assert_eq!(wall.index(), 0);
        assert_eq!(block.index(), 1);
        assert_eq!(env.primary_obstacle(), Some(wall));
        assert_eq!(env.obstacle_ids().collect::<Vec<_>>(), vec![wall, block]);

        assert_eq!(env.add_path(vec![[0.0, 2.0], [3.0, 2.0]]), 0);
        assert_eq!(env.add_path(vec![[0.0, 4.0], [3.0, 4.0]]), 1);
        assert_eq!(env.path_count(), 2);
        assert_eq!(env.obstacle_count(), 2);
    }

    #[test]
    fn test_primary_can_be_redesignated() {
        let mut env: Environment<u32> = Environment::new(7, Limits::default());
        env.add_obstacle(polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)]);
        let second = env.add_obstacle(polygon![(x: 5.0, y: 5.0), (x: 6.0, y: 5.0), (x: 6.0, y: 6.0)]);

        env.set_primary_obstacle(second).unwrap();
        assert_eq!(env.primary_obstacle(), Some(second));
        assert_eq!(env.primary_region(), env.obstacle(second));

        let missing = ObstacleId(9);
        assert_eq!(
            env.set_primary_obstacle(missing),
            Err(EnvironmentError::UnknownObstacle { id: missing })
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        for radius in [f64::NAN, f64::INFINITY, -2.0, 0.0] {
            let config = EnvironmentConfig {
                bridge_radius: radius,
                ..EnvironmentConfig::default()
            };
            let err = Environment::with_config("bad", Limits::default(), config).unwrap_err();
            assert_eq!(err.code(), "INVALID_CONFIG");
            assert!(err.to_string().contains("bridge_radius"));
        }

        let config = EnvironmentConfig {
            arc_segments: 0,
            ..EnvironmentConfig::default()
        };
        assert!(Environment::with_config("bad", Limits::default(), config).is_err());
    }
}
