use super::{validate_file, with_reference};
use crate::config::LicensingConfig;
use crate::error::LicensingError;
use crate::validation::pipeline::failure_message;
use crate::validation::{
    incomplete_count, write_results_csv, ResultFilter, ValidationOutcome, ValidationResponse,
    ValidationResult,
};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::PathBuf;

pub struct ValidateParams {
    pub file: PathBuf,
    pub reference: Option<PathBuf>,
    pub export: Option<PathBuf>,
    pub view: ResultFilter,
    pub json: bool,
}

pub async fn run_validate_command(params: ValidateParams, config: LicensingConfig) -> Result<()> {
    let config = with_reference(config, params.reference);
    let source = config.license_source();

    let outcome = match validate_file(&params.file, source, &config).await {
        Ok(outcome) => outcome,
        Err(e) => {
            if params.json {
                if let Some(err) = e.downcast_ref::<LicensingError>() {
                    let response = ValidationResponse::failure(failure_message(err));
                    println!("{}", serde_json::to_string_pretty(&response)?);
                }
            }
            return Err(e);
        }
    };

    if let Some(path) = &params.export {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_results_csv(&outcome.results, file)?;
    }

    if params.json {
        let mut outcome = outcome;
        outcome.results.retain(|r| params.view.matches(r));
        println!(
            "{}",
            serde_json::to_string_pretty(&ValidationResponse::success(outcome))?
        );
    } else {
        print!("{}", render_report(&outcome, params.view));
    }

    if let Some(path) = &params.export {
        eprintln!("Results exported to {}", path.display());
    }
    Ok(())
}

/// Plain-text summary and table for a terminal
pub fn render_report(outcome: &ValidationOutcome, view: ResultFilter) -> String {
    let summary = &outcome.summary;
    let mut output = String::new();

    writeln!(&mut output, "=== Licensing Validation ===").ok();
    writeln!(&mut output, "Total policies:    {}", summary.total).ok();
    writeln!(
        &mut output,
        "Licensed agents:   {} ({}%)",
        summary.licensed,
        summary.licensed_percent()
    )
    .ok();
    writeln!(
        &mut output,
        "Needs appointment: {} ({}%)",
        summary.needs_appointment,
        summary.needs_appointment_percent()
    )
    .ok();
    writeln!(
        &mut output,
        "Incomplete data:   {}",
        incomplete_count(&outcome.results)
    )
    .ok();

    let shown = view.apply(&outcome.results);
    if shown.is_empty() {
        return output;
    }

    writeln!(&mut output).ok();
    if view != ResultFilter::All {
        writeln!(&mut output, "View: {} ({})", view, shown.len()).ok();
    }
    writeln!(
        &mut output,
        "{:<14} {:<22} {:>10} {:<5} {:<16} {:<11} {}",
        "POLICY", "AGENT", "AGENT ID", "STATE", "STATUS", "EXPIRES", "ACTION"
    )
    .ok();
    for result in shown {
        writeln!(&mut output, "{}", render_row(result)).ok();
    }
    output
}

fn render_row(result: &ValidationResult) -> String {
    let status = result
        .license_status
        .map_or_else(|| "Not Found".to_string(), |s| s.to_string());
    let expires = result
        .expiration_date
        .map_or_else(|| "N/A".to_string(), |d| d.to_string());
    let action = if result.is_incomplete() {
        "Fix data"
    } else if result.needs_appointment {
        "Request appointment"
    } else {
        "None"
    };

    format!(
        "{:<14} {:<22} {:>10} {:<5} {:<16} {:<11} {}",
        result.policy_number, result.agent_name, result.agent_id, result.state, status, expires, action
    )
}
