//! License reference records

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of an agent's license in one state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LicenseStatus {
    Active,
    Pending,
    Expired,
    Inactive,
}

impl LicenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Pending => "Pending",
            Self::Expired => "Expired",
            Self::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for LicenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LicenseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(Self::Active),
            "Pending" => Ok(Self::Pending),
            "Expired" => Ok(Self::Expired),
            "Inactive" => Ok(Self::Inactive),
            other => Err(format!("unknown license status: {}", other)),
        }
    }
}

/// One agent's license in one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    pub agent_id: i64,
    pub agent_name: String,
    pub state: String,
    pub status: LicenseStatus,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
}

impl LicenseRecord {
    pub fn new(
        agent_id: i64,
        agent_name: impl Into<String>,
        state: impl Into<String>,
        status: LicenseStatus,
        expiration_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            agent_id,
            agent_name: agent_name.into(),
            state: state.into(),
            status,
            expiration_date,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == LicenseStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_format() {
        let json = r#"{"agentId":66061310,"agentName":"GRANT CROUCH","state":"NY","status":"Pending","expirationDate":null}"#;
        let record: LicenseRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.agent_id, 66061310);
        assert_eq!(record.status, LicenseStatus::Pending);
        assert!(record.expiration_date.is_none());
        assert!(!record.is_active());
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }

    #[test]
    fn test_expiration_date_parses_iso() {
        let json = r#"{"agentId":1,"agentName":"A","state":"WA","status":"Active","expirationDate":"2025-12-31"}"#;
        let record: LicenseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.expiration_date, NaiveDate::from_ymd_opt(2025, 12, 31));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let json = r#"{"agentId":1,"agentName":"A","state":"WA","status":"Approved"}"#;
        assert!(serde_json::from_str::<LicenseRecord>(json).is_err());
        assert!("Approved".parse::<LicenseStatus>().is_err());
        assert_eq!("Expired".parse::<LicenseStatus>(), Ok(LicenseStatus::Expired));
    }
}
