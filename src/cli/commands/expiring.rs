use super::with_reference;
use crate::config::LicensingConfig;
use crate::licensing::{expiring_within, ExpiringLicense};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;

pub async fn run_expiring_command(
    days: Option<u32>,
    as_of: Option<NaiveDate>,
    reference: Option<PathBuf>,
    config: LicensingConfig,
) -> Result<()> {
    let config = with_reference(config, reference);
    let days = days.unwrap_or(config.expiring_days);
    let as_of = as_of.unwrap_or_else(|| Utc::now().date_naive());

    let records = config.license_source().lookup_all().await?;
    let expiring = expiring_within(&records, as_of, days);

    if expiring.is_empty() {
        println!("No licenses expire within {} days of {}.", days, as_of);
        return Ok(());
    }

    println!("Licenses expiring within {} days of {}:", days, as_of);
    for license in &expiring {
        println!("  {}", format_expiring(license));
    }
    Ok(())
}

fn format_expiring(entry: &ExpiringLicense) -> String {
    let license = &entry.license;
    let expires = license
        .expiration_date
        .map(|d| d.to_string())
        .unwrap_or_default();
    format!(
        "{} ({}) {} {} expires {} - {} day(s) remaining",
        license.agent_name, license.agent_id, license.state, license.status, expires, entry.days_remaining
    )
}
