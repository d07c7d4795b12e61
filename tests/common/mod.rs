//! Common test utilities and fixtures

#![allow(dead_code)]

use agent_licensing::licensing::{LicenseRecord, LicenseStatus, StaticLicenseSource};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HEADER: &str =
    "POLICY NUMBER,Issue State,Agent Name,Agent D Distributor Key,APPLICATION DATE";

/// Build an upload body from data lines
pub fn policy_csv(lines: &[&str]) -> String {
    let mut csv = format!("{HEADER}\n");
    for line in lines {
        csv.push_str(line);
        csv.push('\n');
    }
    csv
}

/// Reference set covering the Active, Pending and Expired cases
pub fn reference_records() -> Vec<LicenseRecord> {
    vec![
        LicenseRecord::new(
            66061310,
            "GRANT CROUCH",
            "WA",
            LicenseStatus::Active,
            NaiveDate::from_ymd_opt(2025, 12, 31),
        ),
        LicenseRecord::new(66061310, "GRANT CROUCH", "NY", LicenseStatus::Pending, None),
        LicenseRecord::new(
            66061313,
            "EMILY DAVIS",
            "GA",
            LicenseStatus::Expired,
            NaiveDate::from_ymd_opt(2024, 3, 15),
        ),
    ]
}

pub fn reference_source() -> StaticLicenseSource {
    StaticLicenseSource::new(reference_records())
}

/// Temporary directory holding fixture files
pub struct Fixtures {
    dir: TempDir,
}

impl Fixtures {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    /// Reference records serialized as the JSON the file source reads
    pub fn write_reference(&self) -> PathBuf {
        let json = serde_json::to_string(&reference_records()).expect("serialize records");
        self.write("licenses.json", &json)
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
