//! Configuration types
//!
//! Defines:
//! - `Settings` - Everything in `.interfaces/config.toml`
//! - `LoggingSettings` - Log filter and directory
//! - `InterfaceConfig` - One declaratively defined interface

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use interfaces_core::prelude::*;
use interfaces_core::{Interface, LogOptions, Transformation};

/// Application settings (.interfaces/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Interface definitions, in file order
    #[serde(default)]
    pub interfaces: Vec<InterfaceConfig>,
}

/// Logging settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives (e.g., "interfaces_core=debug")
    #[serde(default)]
    pub filter: Option<String>,

    /// Log directory (defaults to the platform data directory)
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

impl LoggingSettings {
    pub fn to_options(&self) -> LogOptions {
        LogOptions {
            filter: self.filter.clone(),
            directory: self.directory.clone(),
        }
    }
}

/// A single interface definition
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct InterfaceConfig {
    /// Registry name
    pub name: String,

    /// Number of chest rows
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Container title
    #[serde(default)]
    pub title: String,

    /// Transformations, applied in the order listed
    #[serde(default)]
    pub transforms: Vec<Transformation>,
}

fn default_rows() -> usize {
    1
}

impl InterfaceConfig {
    /// Build the immutable interface this entry describes
    pub fn build(&self) -> Result<Interface> {
        self.transforms
            .iter()
            .cloned()
            .fold(
                Interface::builder().rows(self.rows).title(&self.title),
                |builder, transform| builder.transform(transform),
            )
            .build()
            .with_context(|| format!("Invalid interface '{}'", self.name))
    }
}
