use super::{validate_file, with_reference};
use crate::config::LicensingConfig;
use crate::validation::write_results_csv;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

pub async fn run_export_command(
    file: PathBuf,
    reference: Option<PathBuf>,
    output: Option<PathBuf>,
    config: LicensingConfig,
) -> Result<()> {
    let config = with_reference(config, reference);
    let outcome = validate_file(&file, config.license_source(), &config).await?;

    match output {
        Some(path) => {
            let out = std::fs::File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_results_csv(&outcome.results, out)?;
            info!(rows = outcome.results.len(), "Wrote export to {}", path.display());
        }
        None => {
            write_results_csv(&outcome.results, std::io::stdout().lock())?;
        }
    }
    Ok(())
}
