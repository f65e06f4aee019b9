//! PostgreSQL backend for the attendance store traits.

use async_trait::async_trait;
use rollcall_core::{
    date::DateKey,
    errors::{AttendanceError, AttendanceResult},
    models::{
        attendance::{AttendanceEntry, AttendanceRecord, Session},
        daily_status::{DailyStatus, LockStamp},
        member::Member,
    },
    store::{LedgerStore, MemberStore, RegisterStore},
};
use uuid::Uuid;

use crate::{DbPool, repositories};

#[derive(Debug, Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

fn is_unique_violation(report: &eyre::Report) -> bool {
    matches!(
        report.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(db_err)) if db_err.is_unique_violation()
    )
}

fn is_foreign_key_violation(report: &eyre::Report) -> bool {
    matches!(
        report.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation()
    )
}

#[async_trait]
impl MemberStore for PgStore {
    async fn create_member(&self, name: &str) -> AttendanceResult<Member> {
        match repositories::member::create_member(&self.pool, name).await {
            Ok(row) => Ok(row.into()),
            Err(report) if is_unique_violation(&report) => Err(AttendanceError::Conflict(
                "Member already exists".to_string(),
            )),
            Err(report) => Err(AttendanceError::Database(report)),
        }
    }

    async fn get_member(&self, id: Uuid) -> AttendanceResult<Option<Member>> {
        let row = repositories::member::get_member_by_id(&self.pool, id).await?;
        Ok(row.map(Member::from))
    }

    async fn list_members(&self) -> AttendanceResult<Vec<Member>> {
        let rows = repositories::member::list_members(&self.pool).await?;
        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn count_members(&self) -> AttendanceResult<i64> {
        Ok(repositories::member::count_members(&self.pool).await?)
    }

    async fn delete_member(&self, id: Uuid) -> AttendanceResult<bool> {
        Ok(repositories::member::delete_member(&self.pool, id).await?)
    }
}

#[async_trait]
impl LedgerStore for PgStore {
    async fn ensure_status(&self, date: DateKey) -> AttendanceResult<DailyStatus> {
        let row = repositories::daily_status::ensure_status(&self.pool, date.date()).await?;
        Ok(row.into())
    }

    async fn set_lock(
        &self,
        date: DateKey,
        session: Session,
        stamp: Option<LockStamp>,
    ) -> AttendanceResult<DailyStatus> {
        let (locked_at, locked_by) = match &stamp {
            Some(stamp) => (Some(stamp.at), Some(stamp.by.as_str())),
            None => (None, None),
        };

        let row = repositories::daily_status::set_lock(
            &self.pool,
            date.date(),
            session,
            locked_at,
            locked_by,
        )
        .await?;
        Ok(row.into())
    }
}

#[async_trait]
impl RegisterStore for PgStore {
    async fn upsert_session(
        &self,
        member_id: Uuid,
        date: DateKey,
        session: Session,
        present: bool,
    ) -> AttendanceResult<AttendanceEntry> {
        // The member can vanish between lookup and upsert
        match repositories::attendance::upsert_session(
            &self.pool,
            member_id,
            date.date(),
            session,
            present,
        )
        .await
        {
            Ok(row) => Ok(row.into()),
            Err(report) if is_foreign_key_violation(&report) => {
                Err(AttendanceError::NotFound("Member not found".to_string()))
            }
            Err(report) => Err(AttendanceError::Database(report)),
        }
    }

    async fn list_for_date(&self, date: DateKey) -> AttendanceResult<Vec<AttendanceRecord>> {
        let rows = repositories::attendance::list_for_date(&self.pool, date.date()).await?;
        Ok(rows.into_iter().map(AttendanceRecord::from).collect())
    }

    async fn count_present(&self, date: DateKey, session: Session) -> AttendanceResult<i64> {
        Ok(repositories::attendance::count_present(&self.pool, date.date(), session).await?)
    }
}
