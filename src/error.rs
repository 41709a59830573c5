// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for scene queries and obstacle editing
//!
//! Two layers: [`KernelError`] describes what is wrong with a single piece
//! of geometry, [`EnvironmentError`] adds which operation saw it and where
//! the offending geometry lives in the scene.

use std::fmt;
use thiserror::Error;

use crate::environment::ObstacleId;

/// Malformed geometry detected by the geometry kernel adapter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    #[error("position needs at least 2 coordinates, got {len}")]
    ShortPosition { len: usize },

    #[error("non-finite coordinate ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    #[error("path fragment needs at least 2 vertices, got {vertices}")]
    DegenerateFragment { vertices: usize },

    #[error("polygon ring needs at least 3 distinct vertices, got {vertices}")]
    DegenerateRing { vertices: usize },

    #[error("bridge edge needs at least 2 points, got {vertices}")]
    DegenerateEdge { vertices: usize },
}

/// Which scene collection (or editor argument) a malformed geometry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Obstacle,
    PathFragment,
    BridgePoint,
    BridgeEdge,
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Obstacle => "obstacle",
            Self::PathFragment => "path fragment",
            Self::BridgePoint => "bridge point",
            Self::BridgeEdge => "bridge edge",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`Environment`](crate::Environment) operations.
///
/// A blocked line of sight is not an error: connection queries report it
/// as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnvironmentError {
    /// A connection query ran against a scene without path fragments.
    #[error("{operation}: the environment has no path fragments")]
    NoPaths { operation: &'static str },

    /// Carving was requested before any obstacle was added.
    #[error("{operation}: the environment has no primary obstacle")]
    NoPrimaryObstacle { operation: &'static str },

    /// An obstacle handle that does not name a stored obstacle.
    #[error("unknown obstacle {id}")]
    UnknownObstacle { id: ObstacleId },

    /// The configuration handed to the environment failed validation.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The query argument itself is malformed.
    #[error("{operation}: malformed input: {source}")]
    MalformedInput {
        operation: &'static str,
        #[source]
        source: KernelError,
    },

    /// Stored scene geometry, or an indexed editor argument, is malformed.
    #[error("{operation}: malformed {kind} at index {index}: {source}")]
    MalformedGeometry {
        operation: &'static str,
        kind: GeometryKind,
        index: usize,
        #[source]
        source: KernelError,
    },
}

impl EnvironmentError {
    pub(crate) fn input(operation: &'static str, source: KernelError) -> Self {
        Self::MalformedInput { operation, source }
    }

    pub(crate) fn geometry(
        operation: &'static str,
        kind: GeometryKind,
        index: usize,
        source: KernelError,
    ) -> Self {
        Self::MalformedGeometry {
            operation,
            kind,
            index,
            source,
        }
    }

    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NoPaths { .. } => "NO_PATHS",
            Self::NoPrimaryObstacle { .. } => "NO_PRIMARY_OBSTACLE",
            Self::UnknownObstacle { .. } => "UNKNOWN_OBSTACLE",
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
            Self::MalformedInput { .. } => "MALFORMED_INPUT",
            Self::MalformedGeometry { .. } => "MALFORMED_GEOMETRY",
        }
    }

    /// Name of the operation that failed, when known.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::NoPaths { operation }
            | Self::NoPrimaryObstacle { operation }
            | Self::MalformedInput { operation, .. }
            | Self::MalformedGeometry { operation, .. } => Some(*operation),
            Self::UnknownObstacle { .. } | Self::InvalidConfig { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, EnvironmentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_context() {
        let err = EnvironmentError::geometry(
            "find_shortest_connection",
            GeometryKind::PathFragment,
            3,
            KernelError::DegenerateFragment { vertices: 1 },
        );

        let message = err.to_string();
        assert!(message.contains("find_shortest_connection"));
        assert!(message.contains("path fragment at index 3"));
        assert!(message.contains("got 1"));
        assert_eq!(err.code(), "MALFORMED_GEOMETRY");
        assert_eq!(err.operation(), Some("find_shortest_connection"));
    }

    #[test]
    fn test_error_source_is_kernel_error() {
        use std::error::Error as _;

        let err = EnvironmentError::input("point_in_collision", KernelError::ShortPosition { len: 1 });
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("position needs at least 2 coordinates, got 1"));
    }
}
