//! Configuration loading for the registry CLI.
//!
//! Settings come from TOML files: user-level (`~/.cadastro/config.toml`)
//! first, then project-level (`./.cadastro/config.toml`) merged over it.
//! Every field has a default, so an absent file means a usable config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A validation problem in the configuration
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {}", self.field, self.message)
    }
}

/// Audit log settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Directory for session logs; defaults to `.cadastro/audit`
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: None,
        }
    }
}

/// Optional report fields
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    #[serde(default = "default_true")]
    pub show_email: bool,
    #[serde(default = "default_true")]
    pub show_age: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            show_email: true,
            show_age: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub audit: AuditConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    /// Load configuration from the default paths.
    /// Priority: project (./.cadastro/config.toml) > user (~/.cadastro/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".cadastro").join("config.toml");
            if user_config.exists() {
                config.merge(Self::load_from(&user_config)?);
            }
        }

        let project_config = Path::new(".cadastro").join("config.toml");
        if project_config.exists() {
            config.merge(Self::load_from(&project_config)?);
        }

        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes priority).
    /// Booleans default to true, so explicit opt-outs win; the audit dir
    /// is overridden when set.
    pub fn merge(&mut self, other: Config) {
        if !other.audit.enabled {
            self.audit.enabled = false;
        }
        if other.audit.dir.is_some() {
            self.audit.dir = other.audit.dir;
        }
        if !other.report.show_email {
            self.report.show_email = false;
        }
        if !other.report.show_age {
            self.report.show_age = false;
        }
    }

    /// Check the configuration for problems worth warning about.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut problems = Vec::new();

        if let Some(dir) = &self.audit.dir {
            if dir.as_os_str().is_empty() {
                problems.push(ValidationError {
                    field: "audit.dir".to_string(),
                    message: "path is empty".to_string(),
                });
            }
            if !self.audit.enabled {
                problems.push(ValidationError {
                    field: "audit.dir".to_string(),
                    message: "set, but the audit log is disabled".to_string(),
                });
            }
        }

        problems
    }
}
