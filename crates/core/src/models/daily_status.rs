use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::attendance::Session;
use crate::date::DateKey;

/// Lock state for one calendar day.
///
/// Exactly one record exists per date key. It is created unlocked the first
/// time anything touches the day and is never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStatus {
    pub date: DateKey,
    pub morning_locked: bool,
    pub morning_locked_at: Option<DateTime<Utc>>,
    pub morning_locked_by: Option<String>,
    pub evening_locked: bool,
    pub evening_locked_at: Option<DateTime<Utc>>,
    pub evening_locked_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Who locked a session and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockStamp {
    pub at: DateTime<Utc>,
    pub by: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLocks {
    pub morning: bool,
    pub evening: bool,
}

impl DailyStatus {
    pub fn unlocked(date: DateKey, now: DateTime<Utc>) -> Self {
        Self {
            date,
            morning_locked: false,
            morning_locked_at: None,
            morning_locked_by: None,
            evening_locked: false,
            evening_locked_at: None,
            evening_locked_by: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_locked(&self, session: Session) -> bool {
        match session {
            Session::Morning => self.morning_locked,
            Session::Evening => self.evening_locked,
        }
    }

    pub fn locks(&self) -> SessionLocks {
        SessionLocks {
            morning: self.morning_locked,
            evening: self.evening_locked,
        }
    }

    /// Locks the session when a stamp is given, unlocks and clears the
    /// metadata otherwise. The other session is left alone.
    pub fn apply_lock(&mut self, session: Session, stamp: Option<LockStamp>, now: DateTime<Utc>) {
        let locked = stamp.is_some();
        let (at, by) = match stamp {
            Some(stamp) => (Some(stamp.at), Some(stamp.by)),
            None => (None, None),
        };

        match session {
            Session::Morning => {
                self.morning_locked = locked;
                self.morning_locked_at = at;
                self.morning_locked_by = by;
            }
            Session::Evening => {
                self.evening_locked = locked;
                self.evening_locked_at = at;
                self.evening_locked_by = by;
            }
        }
        self.updated_at = now;
    }
}
