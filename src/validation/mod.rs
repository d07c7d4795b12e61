//! CSV licensing validation
//!
//! An upload flows through [`pipeline`]: the file is checked and parsed, each
//! row is decided by [`validator`] against a [`crate::licensing::LicenseLookup`],
//! verdicts are reduced by [`summary`] and can be written back out by [`export`].

pub mod export;
pub mod pipeline;
pub mod result;
pub mod summary;
pub mod validator;
pub mod views;

pub use export::{results_to_csv, write_results_csv, EXPORT_FILENAME, EXPORT_HEADER};
pub use pipeline::{
    process_upload, run_upload, validate_csv_text, UploadPolicy, UploadedFile, ValidationOutcome,
    ValidationResponse,
};
pub use result::{ReportedStatus, ValidationResult, ValidationSummary, INCOMPLETE_DATA};
pub use summary::incomplete_count;
pub use validator::{coerce_agent_id, validate_row, validate_rows};
pub use views::ResultFilter;
