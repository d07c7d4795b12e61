//! Configuration for agent-licensing
//!
//! Settings are layered, later layers winning:
//!
//! 1. Hardcoded defaults
//! 2. A TOML file (`--config`, or `agent-licensing.toml` in the working directory)
//! 3. Environment variables with the `AGENT_LICENSING_` prefix

use crate::error::{common, ErrorCode, ErrorExt, LicensingError, Result};
use crate::licensing::{
    JsonFileLicenseSource, LicenseSource, StaticLicenseSource, DEFAULT_EXPIRING_DAYS,
};
use crate::validation::{UploadPolicy, EXPORT_FILENAME};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "agent-licensing.toml";
pub const ENV_PREFIX: &str = "AGENT_LICENSING_";

/// Valid log levels for configuration validation.
pub const VALID_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicensingConfig {
    /// Logging level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Address the HTTP service listens on.
    pub bind: String,

    /// JSON export of the licenses table. The demonstration dataset is used when unset.
    pub reference_path: Option<PathBuf>,

    /// Upload extensions accepted by the validator, without the leading dot.
    pub accepted_extensions: Vec<String>,

    /// Window of the expiring-licenses report, in days.
    pub expiring_days: u32,

    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,

    /// Suggested filename for exported results.
    pub export_filename: String,
}

impl Default for LicensingConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            bind: "127.0.0.1:3000".to_string(),
            reference_path: None,
            accepted_extensions: vec!["csv".to_string()],
            expiring_days: DEFAULT_EXPIRING_DAYS,
            max_upload_bytes: 10 * 1024 * 1024,
            export_filename: EXPORT_FILENAME.to_string(),
        }
    }
}

impl LicensingConfig {
    /// Load defaults, the config file and the process environment
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) if !path.exists() => return Err(common::config_not_found(path)),
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.merge_env_from(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .to_config_error(format!("failed to read {}", path.display()))?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            LicensingError::config_with_code(
                ErrorCode::CONFIG_INVALID_TOML,
                format!("invalid TOML in {}", path.display()),
            )
            .with_source(e)
        })?;
        debug!(path = %path.display(), "Loaded configuration file");
        Ok(config)
    }

    /// Apply `AGENT_LICENSING_*` overrides read through `lookup`
    pub fn merge_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(log_level) = var("LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(bind) = var("BIND") {
            self.bind = bind;
        }

        if let Some(path) = var("REFERENCE_PATH") {
            self.reference_path = (!path.is_empty()).then(|| PathBuf::from(path));
        }

        if let Some(days) = var("EXPIRING_DAYS") {
            self.expiring_days = days.parse().map_err(|_| {
                common::config_invalid_value("expiring_days", format!("'{}' is not a number", days))
            })?;
        }

        if let Some(bytes) = var("MAX_UPLOAD_BYTES") {
            self.max_upload_bytes = bytes.parse().map_err(|_| {
                common::config_invalid_value("max_upload_bytes", format!("'{}' is not a number", bytes))
            })?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(common::config_invalid_value(
                "log_level",
                format!("must be one of {}", VALID_LOG_LEVELS.join(", ")),
            ));
        }
        if self.expiring_days == 0 {
            return Err(common::config_invalid_value("expiring_days", "must be greater than 0"));
        }
        if self.max_upload_bytes == 0 {
            return Err(common::config_invalid_value("max_upload_bytes", "must be greater than 0"));
        }
        if self.accepted_extensions.is_empty() {
            return Err(common::config_invalid_value(
                "accepted_extensions",
                "at least one extension is required",
            ));
        }
        Ok(())
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy {
            accepted_extensions: self.accepted_extensions.clone(),
        }
    }

    /// Reference source selected by `reference_path`
    pub fn license_source(&self) -> Arc<dyn LicenseSource> {
        match &self.reference_path {
            Some(path) => Arc::new(JsonFileLicenseSource::new(path)),
            None => Arc::new(StaticLicenseSource::demo()),
        }
    }
}
