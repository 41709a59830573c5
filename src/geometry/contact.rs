// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Contact classification of query geometry against obstacle regions
//!
//! Built on the DE-9IM relation. Boundary-only contact is kept apart from
//! interior overlap so that geometry resting on a wall stays passable.

use geo::{Coord, LineString, MultiPolygon, Point, Relate};

/// How a query geometry meets a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Contact {
    /// No shared point
    Disjoint,
    /// Shared points lie only on boundaries
    Touching,
    /// At least one shared interior point
    Overlapping,
}

impl Contact {
    fn from_relation(intersects: bool, touches: bool) -> Self {
        if !intersects {
            Contact::Disjoint
        } else if touches {
            Contact::Touching
        } else {
            Contact::Overlapping
        }
    }

    /// Only interior overlap counts as a collision.
    pub fn is_collision(self) -> bool {
        self == Contact::Overlapping
    }
}

/// Classify a point against a region
pub fn classify_point(region: &MultiPolygon<f64>, point: Coord<f64>) -> Contact {
    let matrix = Point::from(point).relate(region);
    Contact::from_relation(matrix.is_intersects(), matrix.is_touches())
}

/// Classify the straight segment `start`-`end` against a region.
///
/// A zero-length segment is classified as the point it collapses to.
pub fn classify_segment(region: &MultiPolygon<f64>, start: Coord<f64>, end: Coord<f64>) -> Contact {
    if start == end {
        return classify_point(region, start);
    }
    let matrix = LineString::new(vec![start, end]).relate(region);
    Contact::from_relation(matrix.is_intersects(), matrix.is_touches())
}
