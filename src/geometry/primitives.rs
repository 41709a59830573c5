// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Cutter shapes for carving obstacles
//!
//! `Disk` is the buffer of a point, `Capsule` the flat-capped buffer of a
//! polyline with round joins. Both are produced by the geometry kernel.

use geo::algorithm::buffer::{Buffer, BufferStyle, LineCap, LineJoin};
use geo::{Coord, LineString, MultiPolygon, Point};
use std::f64::consts::FRAC_PI_2;

/// Geometric primitives
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Disk {
        center: Coord<f64>,
        radius: f64,
        arc_segments: u32,
    },
    Capsule {
        spine: Vec<Coord<f64>>,
        radius: f64,
        arc_segments: u32,
    },
}

impl Primitive {
    /// `arc_segments` is the number of segments per quarter circle.
    pub fn disk(center: Coord<f64>, radius: f64, arc_segments: u32) -> Self {
        Self::Disk {
            center,
            radius,
            arc_segments: arc_segments.max(1),
        }
    }

    pub fn capsule(spine: Vec<Coord<f64>>, radius: f64, arc_segments: u32) -> Self {
        Self::Capsule {
            spine,
            radius,
            arc_segments: arc_segments.max(1),
        }
    }

    /// Tessellate the primitive. An empty result means there is nothing to
    /// cut, e.g. a capsule whose spine has no length.
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        match self {
            Self::Disk {
                center,
                radius,
                arc_segments,
            } => {
                let style = BufferStyle::new(*radius).line_cap(LineCap::Round(arc_step(*arc_segments)));
                Point::from(*center).buffer_with_style(style)
            }
            Self::Capsule {
                spine,
                radius,
                arc_segments,
            } => generate_capsule(spine, *radius, *arc_segments),
        }
    }
}

/// Angle subtended by one arc segment
fn arc_step(arc_segments: u32) -> f64 {
    FRAC_PI_2 / f64::from(arc_segments)
}

fn generate_capsule(spine: &[Coord<f64>], radius: f64, arc_segments: u32) -> MultiPolygon<f64> {
    let mut vertices: Vec<Coord<f64>> = Vec::with_capacity(spine.len());
    for coord in spine {
        if vertices.last() != Some(coord) {
            vertices.push(*coord);
        }
    }

    if vertices.len() < 2 {
        return MultiPolygon::new(vec![]);
    }

    let style = BufferStyle::new(radius)
        .line_join(LineJoin::Round(arc_step(arc_segments)))
        .line_cap(LineCap::Butt);
    LineString::new(vertices).buffer_with_style(style)
}
