//! # Store traits
//!
//! The persistent store the attendance operations run against. The
//! PostgreSQL implementation lives in `rollcall-db`; [`memory::MemoryStore`]
//! keeps everything in process and backs the test suites.

pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::date::DateKey;
use crate::errors::AttendanceResult;
use crate::models::{
    attendance::{AttendanceEntry, AttendanceRecord, Session},
    daily_status::{DailyStatus, LockStamp},
    member::Member,
};

/// Roster persistence.
#[async_trait]
pub trait MemberStore: Send + Sync {
    /// Inserts a member. A name already on the roster fails with `Conflict`.
    async fn create_member(&self, name: &str) -> AttendanceResult<Member>;

    async fn get_member(&self, id: Uuid) -> AttendanceResult<Option<Member>>;

    /// All members ordered by name ascending.
    async fn list_members(&self) -> AttendanceResult<Vec<Member>>;

    async fn count_members(&self) -> AttendanceResult<i64>;

    /// Removes the member together with every register entry referencing it.
    /// Returns `false` when no such member existed.
    async fn delete_member(&self, id: Uuid) -> AttendanceResult<bool>;
}

/// Per-date lock records.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Get-or-create. Concurrent callers for an unseen date must all observe
    /// the same single record.
    async fn ensure_status(&self, date: DateKey) -> AttendanceResult<DailyStatus>;

    /// Locks `session` with the given stamp, or unlocks it when `stamp` is
    /// `None`. Creates the record first if the date has never been touched.
    async fn set_lock(
        &self,
        date: DateKey,
        session: Session,
        stamp: Option<LockStamp>,
    ) -> AttendanceResult<DailyStatus>;
}

/// Per-member, per-date presence.
#[async_trait]
pub trait RegisterStore: Send + Sync {
    /// Sets one session's flag on the (member, date) entry, creating the
    /// entry with both flags false first if needed.
    async fn upsert_session(
        &self,
        member_id: Uuid,
        date: DateKey,
        session: Session,
        present: bool,
    ) -> AttendanceResult<AttendanceEntry>;

    /// Entries for the date with members populated, ordered by member name.
    async fn list_for_date(&self, date: DateKey) -> AttendanceResult<Vec<AttendanceRecord>>;

    /// Entries for the date whose `session` flag is set.
    async fn count_present(&self, date: DateKey, session: Session) -> AttendanceResult<i64>;
}

/// Everything the HTTP layer needs from a backend.
pub trait AttendanceStore: MemberStore + LedgerStore + RegisterStore {}

impl<T> AttendanceStore for T where T: MemberStore + LedgerStore + RegisterStore + ?Sized {}
