use serde::{Deserialize, Serialize};

use super::daily_status::SessionLocks;

/// Head counts for one day alongside that day's lock flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    /// Size of the whole roster, not scoped to the day.
    pub total_members: i64,
    pub morning_present: i64,
    pub evening_present: i64,
    pub locks: SessionLocks,
}
