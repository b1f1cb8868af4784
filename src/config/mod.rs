//! Configuration file parsing
//!
//! Supports:
//! - `.interfaces/config.toml` - Logging settings and interface definitions

pub mod settings;
pub mod types;

pub use settings::{init_config_dir, load_settings, settings_path};
pub use types::*;
