use super::result::ValidationResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subsets of a batch shown to reviewers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultFilter {
    #[default]
    All,
    Licensed,
    NeedsAppointment,
    #[serde(rename = "incomplete")]
    IncompleteData,
}

impl ResultFilter {
    pub fn matches(&self, result: &ValidationResult) -> bool {
        match self {
            Self::All => true,
            Self::Licensed => result.is_licensed,
            Self::NeedsAppointment => result.needs_appointment,
            Self::IncompleteData => result.is_incomplete(),
        }
    }

    /// Matching results in their original order
    pub fn apply<'a>(&self, results: &'a [ValidationResult]) -> Vec<&'a ValidationResult> {
        results.iter().filter(|r| self.matches(r)).collect()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Licensed => "licensed",
            Self::NeedsAppointment => "needs-appointment",
            Self::IncompleteData => "incomplete",
        }
    }
}

impl fmt::Display for ResultFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "licensed" => Ok(Self::Licensed),
            "needs-appointment" => Ok(Self::NeedsAppointment),
            "incomplete" => Ok(Self::IncompleteData),
            other => Err(format!(
                "unknown view '{}', expected all, licensed, needs-appointment or incomplete",
                other
            )),
        }
    }
}
