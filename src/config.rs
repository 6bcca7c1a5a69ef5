// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Kernel configuration
//!
//! Read from `meshkernel.toml` when present, then overridden from the
//! environment. Every section has defaults, so a partial file is fine.

use crate::geometry::GeomType;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration file name
pub const CONFIG_FILE: &str = "meshkernel.toml";

/// Geometry settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// How 1-D coordinates are interpreted
    pub coordinate_system: GeomType,
}

/// Entity set settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntitySetConfig {
    /// Build the mesh-id -> set-position map for new sets
    pub build_reverse_map: bool,
}

impl Default for EntitySetConfig {
    fn default() -> Self {
        Self {
            build_reverse_map: true,
        }
    }
}

/// Block partitioner settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Refuse approximate partitions instead of returning them
    pub strict: bool,
}

/// Kernel configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    pub geometry: GeometryConfig,
    pub entity_sets: EntitySetConfig,
    pub partition: PartitionConfig,
}

impl KernelConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: KernelConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load() -> Result<Self> {
        let mut config = if PathBuf::from(CONFIG_FILE).exists() {
            Self::from_file(CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup
    ///
    /// Recognized keys: `MESHKERNEL_COORDINATE_SYSTEM`,
    /// `MESHKERNEL_REVERSE_MAP`, `MESHKERNEL_PARTITION_STRICT`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(system) = lookup("MESHKERNEL_COORDINATE_SYSTEM") {
            self.geometry.coordinate_system = GeomType::parse(&system)
                .with_context(|| format!("Unknown coordinate system: {system}"))?;
        }

        if let Some(reverse_map) = lookup("MESHKERNEL_REVERSE_MAP") {
            self.entity_sets.build_reverse_map = reverse_map
                .parse()
                .with_context(|| format!("MESHKERNEL_REVERSE_MAP is not a bool: {reverse_map}"))?;
        }

        if let Some(strict) = lookup("MESHKERNEL_PARTITION_STRICT") {
            self.partition.strict = strict
                .parse()
                .with_context(|| format!("MESHKERNEL_PARTITION_STRICT is not a bool: {strict}"))?;
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
