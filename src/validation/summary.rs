use super::result::{ValidationResult, ValidationSummary};

impl ValidationSummary {
    /// Reduce a batch of verdicts into totals
    pub fn from_results(results: &[ValidationResult]) -> Self {
        Self {
            total: results.len(),
            licensed: results.iter().filter(|r| r.is_licensed).count(),
            needs_appointment: results.iter().filter(|r| r.needs_appointment).count(),
        }
    }

    /// Share of licensed rows, rounded to a whole percent
    pub fn licensed_percent(&self) -> u32 {
        percent(self.licensed, self.total)
    }

    /// Share of rows needing an appointment, rounded to a whole percent
    pub fn needs_appointment_percent(&self) -> u32 {
        percent(self.needs_appointment, self.total)
    }
}

/// Number of rows flagged as incomplete data
pub fn incomplete_count(results: &[ValidationResult]) -> usize {
    results.iter().filter(|r| r.is_incomplete()).count()
}

fn percent(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 * 100.0 / total as f64).round() as u32
}
