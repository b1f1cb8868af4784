//! Settings parser for .interfaces/config.toml

use super::types::Settings;
use interfaces_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = ".interfaces";

/// Path of the settings file for `project_path`
pub fn settings_path(project_path: &Path) -> PathBuf {
    project_path.join(CONFIG_DIR).join(CONFIG_FILENAME)
}

/// Load settings from .interfaces/config.toml
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = settings_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<Settings>(&content) {
            Ok(settings) => {
                debug!(
                    "Loaded {} interface(s) from {:?}",
                    settings.interfaces.len(),
                    config_path
                );
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create default config files in .interfaces/ directory
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let config_dir = project_path.join(CONFIG_DIR);

    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir)
            .map_err(|e| Error::config(format!("Failed to create .interfaces dir: {}", e)))?;
    }

    let config_path = config_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Interfaces Configuration

[logging]
# filter = "interfaces_core=debug"   # Overridden by INTERFACES_LOG
# directory = "logs"                 # Empty = platform data directory

# Each [[interfaces]] table defines one interface. Transforms run top to
# bottom; a later transform overwrites cells written by an earlier one.
[[interfaces]]
name = "example"
rows = 3
title = "Example"

[[interfaces.transforms]]
kind = "border"
item = { material = "gray_stained_glass_pane", name = " " }

[[interfaces.transforms]]
kind = "set"
x = 4
y = 1
item = { material = "nether_star", name = "Hello" }
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    }

    Ok(())
}
