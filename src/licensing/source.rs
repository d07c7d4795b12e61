//! Reference license data sources
//!
//! Validation never reaches for a global dataset: callers inject a
//! [`LicenseSource`] and each run takes one snapshot via [`LicenseSource::lookup_all`].

use super::model::{LicenseRecord, LicenseStatus};
use crate::error::{common, ErrorCode, LicensingError, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::PathBuf;
use tracing::debug;

/// Supplies the full reference license dataset
#[async_trait]
pub trait LicenseSource: Send + Sync {
    /// Return every known license record
    async fn lookup_all(&self) -> Result<Vec<LicenseRecord>>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Fixed in-memory dataset
#[derive(Debug, Clone, Default)]
pub struct StaticLicenseSource {
    records: Vec<LicenseRecord>,
}

impl StaticLicenseSource {
    pub fn new(records: Vec<LicenseRecord>) -> Self {
        Self { records }
    }

    /// Demonstration dataset used until a licensing store is wired in
    pub fn demo() -> Self {
        use LicenseStatus::*;

        let rows: [(i64, &str, &str, LicenseStatus, Option<NaiveDate>); 10] = [
            (66061310, "GRANT CROUCH", "WA", Active, NaiveDate::from_ymd_opt(2025, 12, 31)),
            (66061310, "GRANT CROUCH", "CA", Active, NaiveDate::from_ymd_opt(2025, 10, 15)),
            (66061310, "GRANT CROUCH", "NY", Pending, None),
            (66061311, "SARAH JOHNSON", "TX", Active, NaiveDate::from_ymd_opt(2025, 8, 22)),
            (66061311, "SARAH JOHNSON", "FL", Active, NaiveDate::from_ymd_opt(2025, 9, 30)),
            (66061312, "MICHAEL BROWN", "IL", Active, NaiveDate::from_ymd_opt(2025, 11, 10)),
            (66061313, "EMILY DAVIS", "GA", Expired, NaiveDate::from_ymd_opt(2024, 3, 15)),
            (66061314, "DAVID WILSON", "OH", Active, NaiveDate::from_ymd_opt(2025, 7, 20)),
            (66061315, "JENNIFER ADAMS", "PA", Active, NaiveDate::from_ymd_opt(2025, 6, 5)),
            (66061316, "ROBERT CHEN", "MI", Inactive, NaiveDate::from_ymd_opt(2024, 1, 10)),
        ];

        Self::new(
            rows.into_iter()
                .map(|(id, name, state, status, expires)| {
                    LicenseRecord::new(id, name, state, status, expires)
                })
                .collect(),
        )
    }
}

#[async_trait]
impl LicenseSource for StaticLicenseSource {
    async fn lookup_all(&self) -> Result<Vec<LicenseRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory ({} records)", self.records.len())
    }
}

/// Reads a JSON export of the licenses table on every call
#[derive(Debug, Clone)]
pub struct JsonFileLicenseSource {
    path: PathBuf,
}

impl JsonFileLicenseSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LicenseSource for JsonFileLicenseSource {
    async fn lookup_all(&self) -> Result<Vec<LicenseRecord>> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(common::reference_not_found(&self.path));
            }
            Err(e) => {
                return Err(LicensingError::reference_with_code(
                    ErrorCode::REFERENCE_IO_ERROR,
                    "failed to read reference dataset",
                    Some(self.path.clone()),
                )
                .with_source(e));
            }
        };

        let records = parse_stored_licenses(&content).map_err(|e| {
            LicensingError::reference_with_code(
                ErrorCode::REFERENCE_MALFORMED,
                "reference dataset is not a list of license records",
                Some(self.path.clone()),
            )
            .with_source(e)
        })?;

        debug!(path = %self.path.display(), count = records.len(), "Loaded reference licenses");
        Ok(records)
    }

    fn describe(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

/// Shapes a stored licenses export may take
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredLicenses {
    List(Vec<LicenseRecord>),
    Rows { rows: Vec<LicenseRecord> },
}

/// Normalize a stored export (bare array or `{ "rows": [...] }`) into records
pub fn parse_stored_licenses(content: &str) -> serde_json::Result<Vec<LicenseRecord>> {
    let stored: StoredLicenses = serde_json::from_str(content)?;
    Ok(match stored {
        StoredLicenses::List(records) | StoredLicenses::Rows { rows: records } => records,
    })
}
