// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Connection synthesis
//!
//! Produces the straight, collision-free connectors a graph builder turns
//! into edges: between two points, from a point to its nearest path
//! fragment, and between every ordered pair of fragments.

use super::Environment;
use crate::error::{EnvironmentError, GeometryKind, KernelError, Result};
use crate::geometry::{nearest, validate, AsPosition};
use crate::utils::math::distance;
use geo::{Coord, Line, LineString};
use log::{debug, trace};

/// Straight segment validated as collision-free when it was produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    pub start: Coord<f64>,
    pub end: Coord<f64>,
}

impl Connector {
    pub fn new(start: Coord<f64>, end: Coord<f64>) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        distance(self.start, self.end)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Equal as an undirected segment
    pub fn same_segment(&self, other: &Connector) -> bool {
        self == other || *self == other.reversed()
    }

    pub fn to_line(&self) -> Line<f64> {
        Line::new(self.start, self.end)
    }

    pub fn to_line_string(&self) -> LineString<f64> {
        LineString::new(vec![self.start, self.end])
    }
}

impl From<Connector> for LineString<f64> {
    fn from(connector: Connector) -> Self {
        connector.to_line_string()
    }
}

impl<N> Environment<N> {
    /// Connector from `a` to `b`, or `None` when the straight line between
    /// them is in collision
    pub fn get_connection(&self, a: impl AsPosition, b: impl AsPosition) -> Result<Option<Connector>> {
        const OPERATION: &str = "get_connection";
        let a = a
            .to_coord()
            .map_err(|source| EnvironmentError::input(OPERATION, source))?;
        let b = b
            .to_coord()
            .map_err(|source| EnvironmentError::input(OPERATION, source))?;
        self.connect(OPERATION, a, b)
    }

    /// Connector from the nearest point of the nearest path fragment to
    /// `position`, or `None` when that link is in collision.
    ///
    /// Of several equally near fragments the first one added wins.
    pub fn find_shortest_connection(&self, position: impl AsPosition) -> Result<Option<Connector>> {
        const OPERATION: &str = "find_shortest_connection";
        let point = position
            .to_coord()
            .map_err(|source| EnvironmentError::input(OPERATION, source))?;
        self.shortest_connection_from(OPERATION, point)
    }

    /// Connectors between every ordered pair of distinct path fragments.
    ///
    /// For a pair (P, Q) the connector starts at the vertex of P nearest
    /// to Q as a whole and ends at the point of Q nearest to that vertex.
    /// Both (P, Q) and (Q, P) are tried, so an unordered pair may yield two
    /// connectors. Blocked pairs are skipped.
    pub fn find_all_shortest_connections(&self) -> Result<Vec<Connector>> {
        const OPERATION: &str = "find_all_shortest_connections";
        self.require_paths(OPERATION)?;
        self.check_paths(OPERATION)?;

        let mut connections = Vec::new();
        if self.paths.len() < 2 {
            return Ok(connections);
        }

        for i in 0..self.paths.len() {
            for j in 0..self.paths.len() {
                if i == j {
                    continue;
                }
                match self.fragment_link(OPERATION, i, j)? {
                    Some(connector) => connections.push(connector),
                    None => trace!("[Environment] fragments {} -> {} blocked", i, j),
                }
            }
        }

        debug!(
            "[Environment] {} connectors among {} fragments",
            connections.len(),
            self.paths.len()
        );
        Ok(connections)
    }

    /// Connector from the vertex of fragment `from` nearest to fragment
    /// `to`, landing on the closest point of `to`
    fn fragment_link(&self, operation: &'static str, from: usize, to: usize) -> Result<Option<Connector>> {
        let fragment = |index: usize| {
            let fragment = self.paths.get(index).ok_or(KernelError::DegenerateFragment { vertices: 0 });
            fragment
                .and_then(|fragment| validate::check_fragment(fragment).map(|_| fragment))
                .map_err(|err| EnvironmentError::geometry(operation, GeometryKind::PathFragment, index, err))
        };
        let (source, target) = (fragment(from)?, fragment(to)?);

        let (_, anchor, _) = nearest::nearest_vertex(&source.0, target)
            .map_err(|err| EnvironmentError::geometry(operation, GeometryKind::PathFragment, from, err))?;
        let landing = nearest::nearest_point_on(target, anchor)
            .map_err(|err| EnvironmentError::geometry(operation, GeometryKind::PathFragment, to, err))?;

        self.connect(operation, anchor, landing)
    }

    pub(crate) fn shortest_connection_from(
        &self,
        operation: &'static str,
        point: Coord<f64>,
    ) -> Result<Option<Connector>> {
        self.require_paths(operation)?;

        let mut closest: Option<(usize, Coord<f64>, f64)> = None;
        for (index, fragment) in self.paths.iter().enumerate() {
            let nearest = validate::check_fragment(fragment)
                .and_then(|_| nearest::nearest_point_on(fragment, point))
                .map_err(|source| EnvironmentError::geometry(operation, GeometryKind::PathFragment, index, source))?;
            let d = distance(nearest, point);
            if closest.map_or(true, |(_, _, best)| d < best) {
                closest = Some((index, nearest, d));
            }
        }

        let Some((index, nearest, d)) = closest else {
            return Err(EnvironmentError::NoPaths { operation });
        };
        trace!(
            "[Environment] nearest fragment {} at ({:.3}, {:.3}), distance {:.3}",
            index,
            nearest.x,
            nearest.y,
            d
        );
        self.connect(operation, nearest, point)
    }

    pub(crate) fn connect(
        &self,
        operation: &'static str,
        a: Coord<f64>,
        b: Coord<f64>,
    ) -> Result<Option<Connector>> {
        if self.segment_collides(operation, a, b)? {
            trace!(
                "[Environment] connection ({:.3}, {:.3}) -> ({:.3}, {:.3}) in collision",
                a.x,
                a.y,
                b.x,
                b.y
            );
            return Ok(None);
        }
        Ok(Some(Connector::new(a, b)))
    }

    fn require_paths(&self, operation: &'static str) -> Result<()> {
        if self.paths.is_empty() {
            debug!("[Environment] {}: no path fragments", operation);
            return Err(EnvironmentError::NoPaths { operation });
        }
        Ok(())
    }

    fn check_paths(&self, operation: &'static str) -> Result<()> {
        for (index, fragment) in self.paths.iter().enumerate() {
            validate::check_fragment(fragment)
                .map_err(|source| EnvironmentError::geometry(operation, GeometryKind::PathFragment, index, source))?;
        }
        Ok(())
    }
}
