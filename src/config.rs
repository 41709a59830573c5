// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Environment configuration

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Default configuration file looked up by [`EnvironmentConfig::load`]
pub const CONFIG_FILE: &str = "environment.toml";

/// How a query is resolved against an ordered obstacle list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The first obstacle the query meets decides. A touch with an early
    /// obstacle hides an overlap with a later one.
    #[default]
    FirstMatch,
    /// Every obstacle is examined; any interior overlap is a collision.
    AnyInterior,
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstMatch => f.write_str("first_match"),
            Self::AnyInterior => f.write_str("any_interior"),
        }
    }
}

impl FromStr for CollisionPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first_match" => Ok(Self::FirstMatch),
            "any_interior" => Ok(Self::AnyInterior),
            other => bail!("unknown collision policy '{}'", other),
        }
    }
}

/// Tunables of an [`Environment`](crate::Environment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// Radius of the disk / capsule carved around bridge points and edges
    pub bridge_radius: f64,
    /// Segments per quarter circle when tessellating carved disks
    pub arc_segments: u32,
    /// Resolution of touches and overlaps across several obstacles
    pub collision_policy: CollisionPolicy,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            bridge_radius: 2.0,
            arc_segments: 16,
            collision_policy: CollisionPolicy::FirstMatch,
        }
    }
}

impl EnvironmentConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: EnvironmentConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `environment.toml` if present, then apply environment variable
    /// overrides
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `PLAN_ENV_*` overrides read through `lookup`. Nothing is
    /// changed unless every override parses and the result validates.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut updated = self.clone();

        if let Some(radius) = lookup("PLAN_ENV_BRIDGE_RADIUS") {
            updated.bridge_radius = radius
                .trim()
                .parse()
                .with_context(|| format!("Invalid PLAN_ENV_BRIDGE_RADIUS: {}", radius))?;
        }

        if let Some(segments) = lookup("PLAN_ENV_ARC_SEGMENTS") {
            updated.arc_segments = segments
                .trim()
                .parse()
                .with_context(|| format!("Invalid PLAN_ENV_ARC_SEGMENTS: {}", segments))?;
        }

        if let Some(policy) = lookup("PLAN_ENV_COLLISION_POLICY") {
            updated.collision_policy = policy.parse()?;
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.bridge_radius.is_finite() || self.bridge_radius <= 0.0 {
            bail!("bridge_radius must be positive and finite, got {}", self.bridge_radius);
        }
        if self.arc_segments == 0 {
            bail!("arc_segments must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.bridge_radius, 2.0);
        assert_eq!(config.arc_segments, 16);
        assert_eq!(config.collision_policy, CollisionPolicy::FirstMatch);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EnvironmentConfig::from_toml("collision_policy = \"any_interior\"\n").unwrap();
        assert_eq!(config.collision_policy, CollisionPolicy::AnyInterior);
        assert_eq!(config.bridge_radius, 2.0);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(EnvironmentConfig::from_toml("bridge_radius = -1.0\n").is_err());
        assert!(EnvironmentConfig::from_toml("arc_segments = 0\n").is_err());
        assert!(EnvironmentConfig::from_toml("collision_policy = \"sometimes\"\n").is_err());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PLAN_ENV_BRIDGE_RADIUS", "0.75"),
            ("PLAN_ENV_COLLISION_POLICY", "ANY_INTERIOR"),
        ]
        .into_iter()
        .collect();

        let mut config = EnvironmentConfig::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.bridge_radius, 0.75);
        assert_eq!(config.arc_segments, 16);
        assert_eq!(config.collision_policy, CollisionPolicy::AnyInterior);
    }

    #[test]
    fn test_bad_override_is_reported() {
        let mut config = EnvironmentConfig::default();
        let err = config
            .apply_overrides(|key| (key == "PLAN_ENV_ARC_SEGMENTS").then(|| "many".to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("PLAN_ENV_ARC_SEGMENTS"));
    }

    #[test]
    fn test_rejected_overrides_leave_config_unchanged() {
        let vars: HashMap<&str, &str> = [
            ("PLAN_ENV_COLLISION_POLICY", "any_interior"),
            ("PLAN_ENV_BRIDGE_RADIUS", "-3.0"),
        ]
        .into_iter()
        .collect();

        let mut config = EnvironmentConfig::default();
        let err = config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap_err();
        assert!(err.to_string().contains("bridge_radius"));
        assert_eq!(config, EnvironmentConfig::default());
    }

    #[test]
    fn test_policy_round_trips_through_display() {
        for policy in [CollisionPolicy::FirstMatch, CollisionPolicy::AnyInterior] {
            assert_eq!(policy.to_string().parse::<CollisionPolicy>().unwrap(), policy);
        }
    }
}
