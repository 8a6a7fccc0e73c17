use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "dashboard_settings.json";

fn default_app_name() -> String {
    crate::dashboard::DASHBOARD_APP.to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DashboardSettings {
    /// Application that must be installed before any collaborator is resolved.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    /// Set of installed application names. If `None`, every application is
    /// considered installed.
    #[serde(default)]
    pub enabled_apps: Option<HashSet<String>>,
    /// When enabled the logger is initialised at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional log file. Logs go to stdout when absent.
    #[serde(default)]
    pub log_file: Option<String>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            enabled_apps: None,
            debug_logging: false,
            log_file: None,
        }
    }
}

impl DashboardSettings {
    /// Load settings from disk. A missing or blank file yields the defaults;
    /// any other read failure is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read settings from {}", path.display()))
            }
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse settings in {}", path.display()))
    }

    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn path_for(base: &str) -> PathBuf {
        let base = Path::new(base);
        if base.is_dir() {
            base.join(SETTINGS_FILE)
        } else {
            PathBuf::from(base)
        }
    }

    /// Start logging according to these settings.
    pub fn init_logging(&self) {
        crate::logging::init(self.debug_logging, self.log_file.as_ref().map(PathBuf::from));
    }
}
