//! CSV export of validation verdicts

use super::result::ValidationResult;
use crate::error::{ErrorCode, LicensingError, Result};
use std::io::Write;

pub const EXPORT_FILENAME: &str = "licensing_validation_results.csv";

pub const EXPORT_HEADER: [&str; 9] = [
    "Policy Number",
    "Agent Name",
    "Agent ID",
    "State",
    "Licensed",
    "License Status",
    "Expiration Date",
    "Needs Appointment",
    "Application Date",
];

const NOT_AVAILABLE: &str = "N/A";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn export_row(result: &ValidationResult) -> [String; 9] {
    [
        result.policy_number.clone(),
        result.agent_name.clone(),
        result.agent_id.to_string(),
        result.state.clone(),
        yes_no(result.is_licensed).to_string(),
        result
            .license_status
            .map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.to_string()),
        result
            .expiration_date
            .map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.format("%Y-%m-%d").to_string()),
        yes_no(result.needs_appointment).to_string(),
        result.application_date.clone(),
    ]
}

/// Write the export document for `results` to `out`
pub fn write_results_csv<W: Write>(results: &[ValidationResult], out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    writer.write_record(EXPORT_HEADER).map_err(export_error)?;
    for result in results {
        writer.write_record(export_row(result)).map_err(export_error)?;
    }
    writer
        .flush()
        .map_err(|e| LicensingError::Other {
            code: ErrorCode::OTHER_EXPORT_FAILED,
            message: "failed to flush export".to_string(),
            source: Some(Box::new(e)),
        })
}

/// Render the export document as a string
pub fn results_to_csv(results: &[ValidationResult]) -> Result<String> {
    let mut buffer = Vec::new();
    write_results_csv(results, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| export_error_from(e.into()))
}

fn export_error(err: csv::Error) -> LicensingError {
    export_error_from(Box::new(err))
}

fn export_error_from(source: Box<dyn std::error::Error + Send + Sync>) -> LicensingError {
    LicensingError::Other {
        code: ErrorCode::OTHER_EXPORT_FAILED,
        message: "failed to write export".to_string(),
        source: Some(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::parse_csv_rows;
    use crate::licensing::LicenseStatus;
    use crate::validation::result::ReportedStatus;
    use chrono::NaiveDate;

    fn sample() -> Vec<ValidationResult> {
        vec![
            ValidationResult {
                policy_number: "P1".into(),
                agent_name: "GRANT CROUCH".into(),
                agent_id: 66061310,
                state: "WA".into(),
                is_licensed: true,
                license_status: Some(ReportedStatus::License(LicenseStatus::Active)),
                expiration_date: NaiveDate::from_ymd_opt(2025, 12, 31),
                needs_appointment: false,
                application_date: "03/01/2024".into(),
            },
            ValidationResult {
                policy_number: "P2".into(),
                agent_name: "CROUCH, GRANT".into(),
                agent_id: 0,
                state: "".into(),
                is_licensed: false,
                license_status: Some(ReportedStatus::IncompleteData),
                expiration_date: None,
                needs_appointment: true,
                application_date: "".into(),
            },
            ValidationResult {
                policy_number: "P3".into(),
                agent_name: "SARAH JOHNSON".into(),
                agent_id: 66061311,
                state: "NY".into(),
                is_licensed: false,
                license_status: None,
                expiration_date: None,
                needs_appointment: true,
                application_date: "2024-05-01".into(),
            },
        ]
    }

    #[test]
    fn test_export_document() {
        let csv = results_to_csv(&sample()).unwrap();
        let expected = "\
Policy Number,Agent Name,Agent ID,State,Licensed,License Status,Expiration Date,Needs Appointment,Application Date
P1,GRANT CROUCH,66061310,WA,Yes,Active,2025-12-31,No,03/01/2024
P2,\"CROUCH, GRANT\",0,,No,Incomplete Data,N/A,Yes,
P3,SARAH JOHNSON,66061311,NY,No,N/A,N/A,Yes,2024-05-01
";
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_empty_export_is_header_only() {
        let csv = results_to_csv(&[]).unwrap();
        assert_eq!(csv, format!("{}\n", EXPORT_HEADER.join(",")));
    }

    #[test]
    fn test_export_is_byte_stable() {
        let results = sample();
        assert_eq!(
            results_to_csv(&results).unwrap(),
            results_to_csv(&results).unwrap()
        );
    }

    #[test]
    fn test_export_reparses_in_order() {
        let results = sample();
        let rows = parse_csv_rows(&results_to_csv(&results).unwrap()).unwrap();

        assert_eq!(rows.len(), results.len());
        for (row, result) in rows.iter().zip(&results) {
            assert_eq!(row.get("Policy Number"), Some(result.policy_number.as_str()));
            assert_eq!(row.get("State"), Some(result.state.as_str()));
            assert_eq!(row.get("Licensed"), Some(yes_no(result.is_licensed)));
            assert_eq!(
                row.get("Needs Appointment"),
                Some(yes_no(result.needs_appointment))
            );
        }
    }
}
