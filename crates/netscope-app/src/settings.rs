//! Settings parser for ~/.config/netscope/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::table::RowTemplates;
use netscope_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const NETSCOPE_DIR: &str = "netscope";

/// A host-path probe: ask the orchestrator for the dataplane path
/// between two MAC addresses on every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Probe {
    pub eth_src: String,
    pub eth_dst: String,
}

/// User-facing configuration, loaded leniently: a missing or broken file
/// falls back to defaults with a warning in the log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the orchestrator's state API.
    pub base_url: String,

    /// Seconds between dashboard refreshes.
    pub poll_interval_secs: u64,

    /// Row templates for the switch table.
    pub templates: RowTemplates,

    /// Host-path probes issued with every refresh.
    pub probes: Vec<Probe>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:9019/".to_string(),
            poll_interval_secs: 10,
            templates: RowTemplates::default(),
            probes: Vec::new(),
        }
    }
}

/// Load settings from the user config directory.
pub fn load_settings() -> Settings {
    match config_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

/// Load settings from an explicit path.
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
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

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(NETSCOPE_DIR).join(CONFIG_FILENAME))
}

/// Create a commented default config file if none exists yet.
pub fn init_config_dir() -> Result<()> {
    let Some(config_path) = config_path() else {
        return Ok(());
    };
    let Some(parent) = config_path.parent() else {
        return Ok(());
    };

    if !parent.exists() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create config dir: {}", e)))?;
    }

    if !config_path.exists() {
        let default_content = r#"# netscope configuration

base_url = "http://localhost:9019/"
poll_interval_secs = 10

[templates]
distribution = "dist   | ${switch_left} | ${switch_right}"
access = "access | ${switch_name}"

# Host-path probes, one table per probe:
# [[probes]]
# eth_src = "9a:02:57:1e:8f:01"
# eth_dst = "9a:02:57:1e:8f:02"
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
    }

    Ok(())
}
