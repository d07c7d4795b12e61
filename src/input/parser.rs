use super::row::RawPolicyRow;
use crate::error::{ErrorCode, LicensingError, Result};
use std::collections::HashMap;
use tracing::debug;

/// One data line keyed by the header names of the first line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    fields: HashMap<String, String>,
}

impl CsvRow {
    /// Field value for a header, matched literally
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CsvRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parse CSV text using its first line as header names.
///
/// Blank lines are skipped. Any malformed row rejects the whole document.
pub fn parse_csv_rows(data: &str) -> Result<Vec<CsvRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(data.as_bytes());

    let headers = reader.headers().map_err(parse_error)?.clone();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result.map_err(parse_error)?;
        rows.push(
            headers
                .iter()
                .zip(record.iter())
                .collect::<CsvRow>(),
        );
    }

    debug!(columns = headers.len(), rows = rows.len(), "Parsed CSV upload");
    Ok(rows)
}

/// Parse CSV text straight into typed policy rows
pub fn parse_policy_rows(data: &str) -> Result<Vec<RawPolicyRow>> {
    Ok(parse_csv_rows(data)?
        .iter()
        .map(RawPolicyRow::from_csv_row)
        .collect())
}

fn parse_error(err: csv::Error) -> LicensingError {
    let line = err.position().map(|p| p.line());
    let code = match err.kind() {
        csv::ErrorKind::UnequalLengths { .. } => ErrorCode::PARSE_MALFORMED_ROW,
        csv::ErrorKind::Utf8 { .. } => ErrorCode::PARSE_INVALID_UTF8,
        _ => ErrorCode::PARSE_GENERIC,
    };
    let message = match err.kind() {
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => format!("found {} fields, expected {}", len, expected_len),
        _ => "malformed CSV".to_string(),
    };
    LicensingError::parse_with_code(code, message, line).with_source(err)
}
