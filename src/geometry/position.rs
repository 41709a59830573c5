// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Raw numeric positions
//!
//! Queries are planar. Positions may carry a third coordinate, which is
//! ignored; only x and y reach the kernel.

use crate::error::KernelError;
use geo::{Coord, Point};
use nalgebra::{Point2, Point3};

/// Anything that can be read as a planar query position
pub trait AsPosition {
    fn to_coord(&self) -> Result<Coord<f64>, KernelError>;
}

/// Build a planar coordinate, rejecting NaN and infinities
pub fn planar(x: f64, y: f64) -> Result<Coord<f64>, KernelError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(KernelError::NonFinite { x, y });
    }
    Ok(Coord { x, y })
}

impl AsPosition for [f64] {
    fn to_coord(&self) -> Result<Coord<f64>, KernelError> {
        match self {
            [x, y, ..] => planar(*x, *y),
            _ => Err(KernelError::ShortPosition { len: self.len() }),
        }
    }
}

impl AsPosition for Vec<f64> {
    fn to_coord(&self) -> Result<Coord<f64>, KernelError> {
        self.as_slice().to_coord()
    }
}

impl AsPosition for [f64; 2] {
    fn to_coord(&self) -> Result<Coord<f64>, KernelError> {
        planar(self[0], self[1])
    }
}

impl AsPosition for [f64; 3] {
    fn to_coord(&self) -> Result<Coord<f64>, KernelError> {
        planar(self[0], self[1])
    }
}

impl AsPosition for (f64, f64) {
    fn to_coord(&self) -> Result<Coord<f64>, KernelError> {
        planar(self.0, self.1)
    }
}

impl AsPosition for Coord<f64> {
    fn to_coord(&self) -> Result<Coord<f64>, KernelError> {
        planar(self.x, self.y)
    }
}

impl AsPosition for Point<f64> {
    fn to_coord(&self) -> Result<Coord<f64>, KernelError> {
        planar(self.x(), self.y())
    }
}

impl AsPosition for Point2<f64> {
    fn to_coord(&self) -> Result<Coord<f64>, KernelError> {
        planar(self.x, self.y)
    }
}

impl AsPosition for Point3<f64> {
    fn to_coord(&self) -> Result<Coord<f64>, KernelError> {
        planar(self.x, self.y)
    }
}

impl<T: AsPosition + ?Sized> AsPosition for &T {
    fn to_coord(&self) -> Result<Coord<f64>, KernelError> {
        (**self).to_coord()
    }
}
