use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::daily_status::SessionLocks;
use super::member::Member;
use crate::date::DateKey;
use crate::errors::AttendanceError;

/// One of the two daily attendance windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Session {
    Morning,
    Evening,
}

impl Session {
    pub const ALL: [Session; 2] = [Session::Morning, Session::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            Session::Morning => "morning",
            Session::Evening => "evening",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Session::Morning => "Morning",
            Session::Evening => "Evening",
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Session {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Session::Morning),
            "evening" => Ok(Session::Evening),
            _ => Err(AttendanceError::Validation("Invalid session".to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockAction {
    Lock,
    Unlock,
}

impl LockAction {
    pub fn locks(&self) -> bool {
        matches!(self, LockAction::Lock)
    }
}

impl FromStr for LockAction {
    type Err = AttendanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lock" => Ok(LockAction::Lock),
            "unlock" => Ok(LockAction::Unlock),
            _ => Err(AttendanceError::Validation("Invalid action".to_string())),
        }
    }
}

/// A register row: presence of one member on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    pub id: Uuid,
    pub member_id: Uuid,
    pub date: DateKey,
    pub morning: bool,
    pub evening: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AttendanceEntry {
    pub fn session(&self, session: Session) -> bool {
        match session {
            Session::Morning => self.morning,
            Session::Evening => self.evening,
        }
    }

    pub fn with_member(self, member: Member) -> AttendanceRecord {
        AttendanceRecord {
            id: self.id,
            member,
            date: self.date,
            morning: self.morning,
            evening: self.evening,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A register row with its member populated, as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub member: Member,
    pub date: DateKey,
    pub morning: bool,
    pub evening: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of a mark request. Fields stay loose so malformed input reaches
/// validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    #[serde(default)]
    pub member_id: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub present: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CommitRequest {
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitResponse {
    pub message: String,
    pub locks: SessionLocks,
}
