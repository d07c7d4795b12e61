//! Per-row verdicts and batch totals

use crate::licensing::LicenseStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const INCOMPLETE_DATA: &str = "Incomplete Data";

/// License status reported for a row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReportedStatus {
    License(LicenseStatus),
    /// Agent name, agent id or state was missing from the row
    IncompleteData,
}

impl fmt::Display for ReportedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::License(status) => f.write_str(status.as_str()),
            Self::IncompleteData => f.write_str(INCOMPLETE_DATA),
        }
    }
}

impl From<ReportedStatus> for String {
    fn from(status: ReportedStatus) -> Self {
        status.to_string()
    }
}

impl TryFrom<String> for ReportedStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == INCOMPLETE_DATA {
            return Ok(Self::IncompleteData);
        }
        value.parse().map(Self::License)
    }
}

/// Verdict for one uploaded policy row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub policy_number: String,
    pub agent_name: String,
    pub agent_id: i64,
    pub state: String,
    pub is_licensed: bool,
    pub license_status: Option<ReportedStatus>,
    /// Expiration of the matched license. Always `None` on incomplete-data rows,
    /// even when a record matched, so exports show `N/A` for them.
    pub expiration_date: Option<NaiveDate>,
    pub needs_appointment: bool,
    pub application_date: String,
}

impl ValidationResult {
    pub fn is_incomplete(&self) -> bool {
        self.license_status == Some(ReportedStatus::IncompleteData)
    }
}

/// Totals over a batch of verdicts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    pub total: usize,
    pub licensed: usize,
    pub needs_appointment: usize,
}
