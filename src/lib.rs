// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Planning environment for hierarchical path planning
//!
//! Holds obstacle regions and candidate path fragments and answers the
//! spatial queries used to build a connectivity graph: point and segment
//! collision (touching is not colliding), nearest collision-free links to
//! and between fragments, and carving corridors through the primary
//! obstacle around bridge points and edges.

pub mod config;
pub mod environment;
pub mod error;
pub mod geometry;
pub mod utils;

pub use config::{CollisionPolicy, EnvironmentConfig};
pub use environment::{Connector, Environment, ObstacleId};
pub use error::{EnvironmentError, GeometryKind, KernelError, Result};
pub use geometry::{AsPosition, Contact, Limits, Primitive};

/// Kernel geometry types used throughout the public API
pub use geo::{Coord, LineString, MultiPolygon, Point, Polygon};

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    #[test]
    fn test_basic_scene() {
        let mut env = Environment::new("basic", Limits::planar(0.0, 0.0, 10.0, 10.0));
        env.add_obstacle(geo::polygon![
            (x: 4.0, y: 4.0),
            (x: 6.0, y: 4.0),
            (x: 6.0, y: 6.0),
            (x: 4.0, y: 6.0)
        ]);
        env.add_path(vec![[0.0, 0.0], [0.0, 10.0]]);

        assert!(env.point_in_collision([5.0, 5.0]).unwrap());
        assert!(env.find_shortest_connection([2.0, 5.0]).unwrap().is_some());
        assert!(env.find_shortest_connection([8.0, 5.0]).unwrap().is_none());
    }
}
