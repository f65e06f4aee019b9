use async_trait::async_trait;
use mockall::mock;
use rollcall_core::{
    date::DateKey,
    errors::AttendanceResult,
    models::{
        attendance::{AttendanceEntry, AttendanceRecord, Session},
        daily_status::{DailyStatus, LockStamp},
        member::Member,
    },
    store::{LedgerStore, MemberStore, RegisterStore},
};
use uuid::Uuid;

// Mock store for testing failure paths without a database
mock! {
    pub AttendanceStore {}

    #[async_trait]
    impl MemberStore for AttendanceStore {
        async fn create_member(&self, name: &str) -> AttendanceResult<Member>;
        async fn get_member(&self, id: Uuid) -> AttendanceResult<Option<Member>>;
        async fn list_members(&self) -> AttendanceResult<Vec<Member>>;
        async fn count_members(&self) -> AttendanceResult<i64>;
        async fn delete_member(&self, id: Uuid) -> AttendanceResult<bool>;
    }

    #[async_trait]
    impl LedgerStore for AttendanceStore {
        async fn ensure_status(&self, date: DateKey) -> AttendanceResult<DailyStatus>;
        async fn set_lock(
            &self,
            date: DateKey,
            session: Session,
            stamp: Option<LockStamp>,
        ) -> AttendanceResult<DailyStatus>;
    }

    #[async_trait]
    impl RegisterStore for AttendanceStore {
        async fn upsert_session(
            &self,
            member_id: Uuid,
            date: DateKey,
            session: Session,
            present: bool,
        ) -> AttendanceResult<AttendanceEntry>;
        async fn list_for_date(&self, date: DateKey) -> AttendanceResult<Vec<AttendanceRecord>>;
        async fn count_present(&self, date: DateKey, session: Session) -> AttendanceResult<i64>;
    }
}
