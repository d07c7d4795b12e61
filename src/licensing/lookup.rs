//! Composite-key lookup over a reference license snapshot

use super::model::LicenseRecord;
use std::collections::HashMap;
use tracing::debug;

/// `(agent id, state)` index over one reference snapshot.
///
/// State codes are used verbatim as keys. When the snapshot holds more than one
/// record for a key, the last one supplied wins.
#[derive(Debug, Default, Clone)]
pub struct LicenseLookup {
    by_agent_state: HashMap<(i64, String), LicenseRecord>,
}

impl LicenseLookup {
    pub fn new(records: impl IntoIterator<Item = LicenseRecord>) -> Self {
        let records = records.into_iter();
        let mut by_agent_state = HashMap::with_capacity(records.size_hint().0);

        for record in records {
            let key = (record.agent_id, record.state.clone());
            if let Some(previous) = by_agent_state.insert(key, record) {
                debug!(
                    agent_id = previous.agent_id,
                    state = %previous.state,
                    "Duplicate license record replaced by later entry"
                );
            }
        }

        Self { by_agent_state }
    }

    pub fn find(&self, agent_id: i64, state: &str) -> Option<&LicenseRecord> {
        // Tuple keys cannot be borrowed as (i64, &str), so build the owned key
        self.by_agent_state.get(&(agent_id, state.to_string()))
    }

    pub fn len(&self) -> usize {
        self.by_agent_state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_agent_state.is_empty()
    }
}

impl FromIterator<LicenseRecord> for LicenseLookup {
    fn from_iter<I: IntoIterator<Item = LicenseRecord>>(iter: I) -> Self {
        Self::new(iter)
    }
}
