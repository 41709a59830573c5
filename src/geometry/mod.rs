// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - kernel adapter over `geo`
//!
//! Everything the environment needs from computational geometry goes
//! through here: position parsing, contact classification, nearest-point
//! search, cutter shapes and well-formedness checks.

pub mod contact;
pub mod nearest;
pub mod validate;
mod limits;
mod position;
mod primitives;

pub use contact::Contact;
pub use limits::Limits;
pub use position::{planar, AsPosition};
pub use primitives::Primitive;
