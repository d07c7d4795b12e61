//! Licenses approaching their expiration date

use super::model::LicenseRecord;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

pub const DEFAULT_EXPIRING_DAYS: u32 = 30;

/// A license inside the expiring window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringLicense {
    #[serde(flatten)]
    pub license: LicenseRecord,
    pub days_remaining: i64,
}

/// Records expiring within `days` of `as_of`, both ends inclusive.
///
/// Already expired and undated records are left out. The result is ordered by
/// expiration date, then agent id, then state. A window reaching past the last
/// representable date ends there.
pub fn expiring_within(records: &[LicenseRecord], as_of: NaiveDate, days: u32) -> Vec<ExpiringLicense> {
    let horizon = as_of
        .checked_add_signed(Duration::days(i64::from(days)))
        .unwrap_or(NaiveDate::MAX);

    let mut expiring: Vec<ExpiringLicense> = records
        .iter()
        .filter_map(|record| {
            let expires = record.expiration_date?;
            (expires >= as_of && expires <= horizon).then(|| ExpiringLicense {
                license: record.clone(),
                days_remaining: (expires - as_of).num_days(),
            })
        })
        .collect();

    expiring.sort_by(|a, b| {
        a.license
            .expiration_date
            .cmp(&b.license.expiration_date)
            .then(a.license.agent_id.cmp(&b.license.agent_id))
            .then_with(|| a.license.state.cmp(&b.license.state))
    });
    expiring
}

/// Order a reference listing by expiration date with undated records last
pub fn sort_by_expiration(records: &mut [LicenseRecord]) {
    records.sort_by(|a, b| match (a.expiration_date, b.expiration_date) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
