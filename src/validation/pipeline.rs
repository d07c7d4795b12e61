//! Upload → parse → validate → summarize

use super::result::{ValidationResult, ValidationSummary};
use super::validator::validate_rows;
use crate::error::{common, ErrorCode, LicensingError, Result};
use crate::input::parse_policy_rows;
use crate::licensing::{LicenseLookup, LicenseSource};
use serde::{Deserialize, Serialize};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

pub const MSG_NO_FILE: &str = "No file uploaded";
pub const MSG_WRONG_TYPE: &str = "Please upload a CSV file";
pub const MSG_PARSE_FAILED: &str = "Error parsing CSV file";
pub const MSG_PROCESSING_FAILED: &str = "Error processing CSV file";

/// A file received from an upload form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }
}

/// Checks applied to an upload before it is parsed
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Extensions without the leading dot, matched literally against the filename
    pub accepted_extensions: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            accepted_extensions: vec!["csv".to_string()],
        }
    }
}

impl UploadPolicy {
    pub fn accepts(&self, filename: &str) -> bool {
        self.accepted_extensions
            .iter()
            .any(|ext| filename.ends_with(&format!(".{}", ext)))
    }

    /// Reject missing or wrongly typed uploads and decode the rest
    pub fn check<'a>(&self, upload: Option<&'a UploadedFile>) -> Result<&'a str> {
        let file = upload.ok_or_else(common::upload_missing)?;
        if !self.accepts(&file.filename) {
            return Err(common::upload_type_invalid(
                &file.filename,
                &self.accepted_extensions,
            ));
        }
        decode_upload(&file.bytes)
    }
}

/// UTF-8 text of an upload with any byte-order mark removed
pub fn decode_upload(bytes: &[u8]) -> Result<&str> {
    let text = std::str::from_utf8(bytes).map_err(|e| {
        LicensingError::parse_with_code(
            ErrorCode::PARSE_INVALID_UTF8,
            "upload is not UTF-8 text",
            None,
        )
        .with_source(e)
    })?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// Verdicts and totals for one upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub results: Vec<ValidationResult>,
    pub summary: ValidationSummary,
}

impl ValidationOutcome {
    pub fn from_results(results: Vec<ValidationResult>) -> Self {
        let summary = ValidationSummary::from_results(&results);
        Self { results, summary }
    }
}

/// Validate CSV text against an already built lookup table
pub fn validate_csv_text(text: &str, licenses: &LicenseLookup) -> Result<ValidationOutcome> {
    let rows = parse_policy_rows(text)?;
    Ok(ValidationOutcome::from_results(validate_rows(&rows, licenses)))
}

/// Response body of the validation action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<ValidationResult>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<ValidationSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResponse {
    pub fn success(outcome: ValidationOutcome) -> Self {
        Self {
            success: true,
            results: Some(outcome.results),
            summary: Some(outcome.summary),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            results: None,
            summary: None,
            error: Some(message.into()),
        }
    }

    pub fn from_result(result: Result<ValidationOutcome>) -> Self {
        match result {
            Ok(outcome) => Self::success(outcome),
            Err(e) => Self::failure(failure_message(&e)),
        }
    }
}

/// Message shown to the uploader for a failed run
pub fn failure_message(err: &LicensingError) -> &'static str {
    match err {
        LicensingError::Input { code, .. } if *code == ErrorCode::INPUT_MISSING => MSG_NO_FILE,
        LicensingError::Input { .. } => MSG_WRONG_TYPE,
        LicensingError::Parse { .. } => MSG_PARSE_FAILED,
        _ => MSG_PROCESSING_FAILED,
    }
}

/// Run the full validation action for one upload.
///
/// The reference snapshot is fetched once, after the upload itself has been
/// accepted and parsed.
pub async fn run_upload(
    upload: Option<&UploadedFile>,
    source: &dyn LicenseSource,
    policy: &UploadPolicy,
) -> Result<ValidationOutcome> {
    let span = info_span!(
        "validate_upload",
        run_id = %Uuid::new_v4(),
        filename = upload.map(|f| f.filename.as_str()).unwrap_or("")
    );

    async move {
        let rows = match policy.check(upload).and_then(parse_policy_rows) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(code = e.code(), "Upload rejected: {}", e);
                return Err(e);
            }
        };

        let records = source.lookup_all().await.map_err(|e| {
            error!(source = %source.describe(), "Failed to load reference licenses: {}", e);
            e
        })?;
        let licenses = LicenseLookup::new(records);

        let outcome = ValidationOutcome::from_results(validate_rows(&rows, &licenses));
        info!(
            total = outcome.summary.total,
            licensed = outcome.summary.licensed,
            needs_appointment = outcome.summary.needs_appointment,
            "Validated upload"
        );
        Ok(outcome)
    }
    .instrument(span)
    .await
}

/// [`run_upload`] shaped into the response body
pub async fn process_upload(
    upload: Option<&UploadedFile>,
    source: &dyn LicenseSource,
    policy: &UploadPolicy,
) -> ValidationResponse {
    ValidationResponse::from_result(run_upload(upload, source, policy).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_accepts_literal_suffix() {
        let policy = UploadPolicy::default();

        assert!(policy.accepts("policies.csv"));
        assert!(!policy.accepts("policies.CSV"));
        assert!(!policy.accepts("policies.csv.txt"));
        assert!(!policy.accepts("csv"));
    }

    #[test]
    fn test_check_order() {
        let policy = UploadPolicy::default();

        let missing = policy.check(None).unwrap_err();
        assert_eq!(failure_message(&missing), MSG_NO_FILE);

        let wrong = UploadedFile::new("data.xlsx", "a,b\n");
        assert_eq!(failure_message(&policy.check(Some(&wrong)).unwrap_err()), MSG_WRONG_TYPE);

        let binary = UploadedFile::new("data.csv", vec![0xff, 0xfe, 0x00]);
        let err = policy.check(Some(&binary)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::PARSE_INVALID_UTF8);
        assert_eq!(failure_message(&err), MSG_PARSE_FAILED);
    }

    #[test]
    fn test_decode_strips_bom() {
        let bytes = "\u{feff}POLICY NUMBER\nP1\n".as_bytes();
        assert_eq!(decode_upload(bytes).unwrap(), "POLICY NUMBER\nP1\n");
    }

    #[test]
    fn test_reference_failures_use_processing_message() {
        let err = LicensingError::reference("down");
        assert_eq!(failure_message(&err), MSG_PROCESSING_FAILED);
    }

    #[test]
    fn test_failure_response_shape() {
        let json = serde_json::to_value(ValidationResponse::failure(MSG_NO_FILE)).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "No file uploaded"}));
    }
}
