use super::parser::CsvRow;
use serde::{Deserialize, Serialize};

/// Column names expected in an uploaded policy file
pub mod columns {
    pub const POLICY_NUMBER: &str = "POLICY NUMBER";
    pub const ISSUE_STATE: &str = "Issue State";
    pub const AGENT_NAME: &str = "Agent Name";
    pub const AGENT_KEY: &str = "Agent D Distributor Key";
    pub const APPLICATION_DATE: &str = "APPLICATION DATE";
}

/// One policy line from an upload. Every field is untrusted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPolicyRow {
    pub policy_number: String,
    pub issue_state: String,
    pub agent_name: String,
    /// Agent distributor key as written; coerced to an id during validation
    pub agent_key: String,
    pub application_date: String,
}

impl RawPolicyRow {
    /// Copy the known columns out of a parsed row, absent columns become `""`
    pub fn from_csv_row(row: &CsvRow) -> Self {
        let field = |column: &str| row.get(column).unwrap_or_default().to_string();

        Self {
            policy_number: field(columns::POLICY_NUMBER),
            issue_state: field(columns::ISSUE_STATE),
            agent_name: field(columns::AGENT_NAME),
            agent_key: field(columns::AGENT_KEY),
            application_date: field(columns::APPLICATION_DATE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_default_to_empty() {
        let row: CsvRow = [(columns::AGENT_NAME, "EMILY DAVIS")].into_iter().collect();
        let raw = RawPolicyRow::from_csv_row(&row);

        assert_eq!(raw.agent_name, "EMILY DAVIS");
        assert_eq!(raw.policy_number, "");
        assert_eq!(raw.agent_key, "");
        assert_eq!(raw.application_date, "");
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let row: CsvRow = [(columns::ISSUE_STATE, " wa ")].into_iter().collect();
        assert_eq!(RawPolicyRow::from_csv_row(&row).issue_state, " wa ");
    }
}
