//! Uploaded policy CSV intake
//!
//! Turns raw upload text into header-keyed rows, then into typed
//! [`RawPolicyRow`] values with every field defaulted explicitly.

pub mod parser;
pub mod row;

pub use parser::{parse_csv_rows, parse_policy_rows, CsvRow};
pub use row::{columns, RawPolicyRow};
