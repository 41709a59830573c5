// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Parallel batch queries using rayon
//!
//! Batches only borrow the environment immutably, so no carving can run
//! while they do. Results keep input order and the first error in input
//! order is reported.

use super::{Connector, Environment};
use crate::error::{EnvironmentError, Result};
use crate::geometry::AsPosition;
use rayon::prelude::*;

impl<N: Sync> Environment<N> {
    /// [`point_in_collision`](Self::point_in_collision) for many positions
    pub fn points_in_collision<P>(&self, positions: &[P]) -> Result<Vec<bool>>
    where
        P: AsPosition + Sync,
    {
        let results: Vec<Result<bool>> = positions
            .par_iter()
            .map(|position| self.point_in_collision(position))
            .collect();
        results.into_iter().collect()
    }

    /// [`line_in_collision`](Self::line_in_collision) for many segments
    pub fn lines_in_collision<P>(&self, segments: &[(P, P)]) -> Result<Vec<bool>>
    where
        P: AsPosition + Sync,
    {
        let results: Vec<Result<bool>> = segments
            .par_iter()
            .map(|(start, end)| self.line_in_collision(start, end))
            .collect();
        results.into_iter().collect()
    }

    /// [`find_shortest_connection`](Self::find_shortest_connection) for many
    /// positions
    pub fn find_shortest_connections<P>(&self, positions: &[P]) -> Result<Vec<Option<Connector>>>
    where
        P: AsPosition + Sync,
    {
        const OPERATION: &str = "find_shortest_connections";
        if self.paths.is_empty() {
            return Err(EnvironmentError::NoPaths { operation: OPERATION });
        }

        let results: Vec<Result<Option<Connector>>> = positions
            .par_iter()
            .map(|position| {
                let point = position
                    .to_coord()
                    .map_err(|source| EnvironmentError::input(OPERATION, source))?;
                self.shortest_connection_from(OPERATION, point)
            })
            .collect();
        results.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Limits;
    use geo::polygon;

    fn scene() -> Environment<String> {
        let mut env = Environment::new("batch".to_string(), Limits::default());
        env.add_obstacle(polygon![(x: 2.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 2.0), (x: 2.0, y: 2.0)]);
        env.add_path(vec![[0.0, 5.0], [10.0, 5.0]]);
        env
    }

    #[test]
    fn test_batch_matches_single_queries() {
        let env = scene();
        let positions = vec![[3.0, 1.0], [2.0, 1.0], [0.0, 0.0], [3.5, 0.5]];

        let batch = env.points_in_collision(&positions).unwrap();
        let single: Vec<bool> = positions
            .iter()
            .map(|p| env.point_in_collision(p).unwrap())
            .collect();
        assert_eq!(batch, single);
        assert_eq!(batch, vec![true, false, false, true]);
    }

    #[test]
    fn test_batch_segments() {
        let env = scene();
        let segments = vec![([0.0, 1.0], [6.0, 1.0]), ([0.0, 3.0], [6.0, 3.0])];
        assert_eq!(env.lines_in_collision(&segments).unwrap(), vec![true, false]);
    }

    #[test]
    fn test_batch_connections() {
        let env = scene();
        let connections = env.find_shortest_connections(&[[3.0, 1.0], [3.0, 3.0]]).unwrap();
        assert!(connections[0].is_none());
        assert!(connections[1].is_some());
    }

    #[test]
    fn test_batch_reports_first_error() {
        let env = scene();
        let positions = vec![vec![0.0, 0.0], vec![1.0], vec![f64::NAN, 0.0]];
        let err = env.points_in_collision(&positions).unwrap_err();
        assert_eq!(
            err,
            EnvironmentError::input(
                "point_in_collision",
                crate::error::KernelError::ShortPosition { len: 1 }
            )
        );
    }

    #[test]
    fn test_batch_connections_need_paths() {
        let env: Environment<String> = Environment::new("empty".to_string(), Limits::default());
        assert_eq!(
            env.find_shortest_connections(&[[0.0, 0.0]]).unwrap_err().code(),
            "NO_PATHS"
        );
    }
}
