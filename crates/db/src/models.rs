use chrono::{DateTime, NaiveDate, Utc};
use rollcall_core::{
    date::DateKey,
    models::{
        attendance::{AttendanceEntry, AttendanceRecord},
        daily_status::DailyStatus,
        member::Member,
    },
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMember {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDailyStatus {
    pub date: NaiveDate,
    pub morning_locked: bool,
    pub morning_locked_at: Option<DateTime<Utc>>,
    pub morning_locked_by: Option<String>,
    pub evening_locked: bool,
    pub evening_locked_at: Option<DateTime<Utc>>,
    pub evening_locked_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAttendance {
    pub id: Uuid,
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub morning: bool,
    pub evening: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An attendance row joined with its member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAttendanceWithMember {
    pub id: Uuid,
    pub member_id: Uuid,
    pub date: NaiveDate,
    pub morning: bool,
    pub evening: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub member_name: String,
    pub member_created_at: DateTime<Utc>,
    pub member_updated_at: DateTime<Utc>,
}

impl From<DbMember> for Member {
    fn from(row: DbMember) -> Self {
        Member {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<DbDailyStatus> for DailyStatus {
    fn from(row: DbDailyStatus) -> Self {
        DailyStatus {
            date: DateKey::new(row.date),
            morning_locked: row.morning_locked,
            morning_locked_at: row.morning_locked_at,
            morning_locked_by: row.morning_locked_by,
            evening_locked: row.evening_locked,
            evening_locked_at: row.evening_locked_at,
            evening_locked_by: row.evening_locked_by,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<DbAttendance> for AttendanceEntry {
    fn from(row: DbAttendance) -> Self {
        AttendanceEntry {
            id: row.id,
            member_id: row.member_id,
            date: DateKey::new(row.date),
            morning: row.morning,
            evening: row.evening,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<DbAttendanceWithMember> for AttendanceRecord {
    fn from(row: DbAttendanceWithMember) -> Self {
        AttendanceRecord {
            id: row.id,
            member: Member {
                id: row.member_id,
                name: row.member_name,
                created_at: row.member_created_at,
                updated_at: row.member_updated_at,
            },
            date: DateKey::new(row.date),
            morning: row.morning,
            evening: row.evening,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
