//! Row-level licensing decisions

use super::result::{ReportedStatus, ValidationResult};
use crate::input::RawPolicyRow;
use crate::licensing::LicenseLookup;

/// Read the leading integer of an agent key, `0` when there is none.
///
/// Leading whitespace is skipped and trailing text ignored, so `"123abc"`
/// reads as 123 and `"12.9"` as 12. Values outside `i64` read as `0`, which
/// never matches a real agent.
pub fn coerce_agent_id(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return 0;
    }

    let signed = if negative {
        format!("-{}", digits)
    } else {
        digits.to_string()
    };
    signed.parse().unwrap_or(0)
}

/// Decide one row against the reference licenses.
///
/// A row missing its agent name, agent id or state is reported as incomplete
/// data. That override also clears any expiration date from a matching record.
pub fn validate_row(row: &RawPolicyRow, licenses: &LicenseLookup) -> ValidationResult {
    let agent_id = coerce_agent_id(&row.agent_key);
    let state = row.issue_state.as_str();
    let record = licenses.find(agent_id, state);

    let has_missing_data = row.agent_name.is_empty() || agent_id == 0 || state.is_empty();

    let (is_licensed, license_status, expiration_date) = if has_missing_data {
        // Missing data overrides any record that happened to match
        (false, Some(ReportedStatus::IncompleteData), None)
    } else {
        (
            record.is_some_and(|r| r.is_active()),
            record.map(|r| ReportedStatus::License(r.status)),
            record.and_then(|r| r.expiration_date),
        )
    };

    ValidationResult {
        policy_number: row.policy_number.clone(),
        agent_name: row.agent_name.clone(),
        agent_id,
        state: row.issue_state.clone(),
        is_licensed,
        license_status,
        expiration_date,
        needs_appointment: !is_licensed,
        application_date: row.application_date.clone(),
    }
}

/// Decide every row, preserving input order
pub fn validate_rows(rows: &[RawPolicyRow], licenses: &LicenseLookup) -> Vec<ValidationResult> {
    rows.iter().map(|row| validate_row(row, licenses)).collect()
}
