use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use eyre::eyre;
use uuid::Uuid;

use super::{LedgerStore, MemberStore, RegisterStore};
use crate::date::DateKey;
use crate::errors::{AttendanceError, AttendanceResult};
use crate::models::{
    attendance::{AttendanceEntry, AttendanceRecord, Session},
    daily_status::{DailyStatus, LockStamp},
    member::Member,
};

/// In-process store with the same uniqueness rules as the database schema:
/// unique member names, one status per date, one entry per (member, date).
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    members: HashMap<Uuid, Member>,
    statuses: HashMap<DateKey, DailyStatus>,
    entries: HashMap<(Uuid, DateKey), AttendanceEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> AttendanceResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| AttendanceError::Database(eyre!("memory store mutex poisoned")))
    }

    /// Number of DailyStatus records held.
    pub fn status_count(&self) -> usize {
        self.state.lock().map(|state| state.statuses.len()).unwrap_or(0)
    }

    /// Number of register entries held, across all dates.
    pub fn entry_count(&self) -> usize {
        self.state.lock().map(|state| state.entries.len()).unwrap_or(0)
    }
}

impl MemoryState {
    fn status_mut(&mut self, date: DateKey) -> &mut DailyStatus {
        self.statuses
            .entry(date)
            .or_insert_with(|| DailyStatus::unlocked(date, Utc::now()))
    }
}

#[async_trait]
impl MemberStore for MemoryStore {
    async fn create_member(&self, name: &str) -> AttendanceResult<Member> {
        let mut state = self.state()?;
        if state.members.values().any(|m| m.name == name) {
            return Err(AttendanceError::Conflict("Member already exists".to_string()));
        }

        let now = Utc::now();
        let member = Member {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        };
        state.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn get_member(&self, id: Uuid) -> AttendanceResult<Option<Member>> {
        Ok(self.state()?.members.get(&id).cloned())
    }

    async fn list_members(&self) -> AttendanceResult<Vec<Member>> {
        let mut members: Vec<Member> = self.state()?.members.values().cloned().collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(members)
    }

    async fn count_members(&self) -> AttendanceResult<i64> {
        Ok(self.state()?.members.len() as i64)
    }

    async fn delete_member(&self, id: Uuid) -> AttendanceResult<bool> {
        let mut state = self.state()?;
        if state.members.remove(&id).is_none() {
            return Ok(false);
        }
        state.entries.retain(|(member_id, _), _| *member_id != id);
        Ok(true)
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn ensure_status(&self, date: DateKey) -> AttendanceResult<DailyStatus> {
        Ok(self.state()?.status_mut(date).clone())
    }

    async fn set_lock(
        &self,
        date: DateKey,
        session: Session,
        stamp: Option<LockStamp>,
    ) -> AttendanceResult<DailyStatus> {
        let mut state = self.state()?;
        let status = state.status_mut(date);
        status.apply_lock(session, stamp, Utc::now());
        Ok(status.clone())
    }
}

#[async_trait]
impl RegisterStore for MemoryStore {
    async fn upsert_session(
        &self,
        member_id: Uuid,
        date: DateKey,
        session: Session,
        present: bool,
    ) -> AttendanceResult<AttendanceEntry> {
        let mut state = self.state()?;
        if !state.members.contains_key(&member_id) {
            return Err(AttendanceError::NotFound("Member not found".to_string()));
        }

        let now = Utc::now();
        let entry = state
            .entries
            .entry((member_id, date))
            .or_insert_with(|| AttendanceEntry {
                id: Uuid::new_v4(),
                member_id,
                date,
                morning: false,
                evening: false,
                created_at: now,
                updated_at: now,
            });

        match session {
            Session::Morning => entry.morning = present,
            Session::Evening => entry.evening = present,
        }
        entry.updated_at = now;

        Ok(entry.clone())
    }

    async fn list_for_date(&self, date: DateKey) -> AttendanceResult<Vec<AttendanceRecord>> {
        let state = self.state()?;
        let mut records: Vec<AttendanceRecord> = state
            .entries
            .values()
            .filter(|entry| entry.date == date)
            .filter_map(|entry| {
                state
                    .members
                    .get(&entry.member_id)
                    .map(|member| entry.clone().with_member(member.clone()))
            })
            .collect();
        records.sort_by(|a, b| a.member.name.cmp(&b.member.name));
        Ok(records)
    }

    async fn count_present(&self, date: DateKey, session: Session) -> AttendanceResult<i64> {
        let state = self.state()?;
        let count = state
            .entries
            .values()
            .filter(|entry| entry.date == date && entry.session(session))
            .count();
        Ok(count as i64)
    }
}
