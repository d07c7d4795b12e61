//! Subcommand implementations

pub mod expiring;
pub mod export;
pub mod serve;
pub mod validate;

pub use expiring::run_expiring_command;
pub use export::run_export_command;
pub use serve::run_serve_command;
pub use validate::run_validate_command;

use crate::config::LicensingConfig;
use crate::licensing::LicenseSource;
use crate::validation::{run_upload, UploadedFile, ValidationOutcome};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Apply a `--reference` override to the loaded configuration
pub(crate) fn with_reference(mut config: LicensingConfig, reference: Option<PathBuf>) -> LicensingConfig {
    if reference.is_some() {
        config.reference_path = reference;
    }
    config
}

/// Read a policy file from disk and run it through the upload pipeline
pub(crate) async fn validate_file(
    file: &Path,
    source: Arc<dyn LicenseSource>,
    config: &LicensingConfig,
) -> Result<ValidationOutcome> {
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;
    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let upload = UploadedFile::new(filename, bytes);
    let outcome = run_upload(Some(&upload), source.as_ref(), &config.upload_policy()).await?;
    Ok(outcome)
}
