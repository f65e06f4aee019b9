use crate::date::DateKey;
use crate::errors::AttendanceResult;
use crate::models::{attendance::Session, summary::AttendanceSummary};
use crate::services::ledger;
use crate::store::{LedgerStore, MemberStore, RegisterStore};

/// Head counts for `date` against its lock state. Store failures propagate;
/// a missing ledger record is created rather than assumed unlocked.
pub async fn summary<S>(store: &S, date: DateKey) -> AttendanceResult<AttendanceSummary>
where
    S: MemberStore + LedgerStore + RegisterStore + ?Sized,
{
    let total_members = store.count_members().await?;
    let morning_present = store.count_present(date, Session::Morning).await?;
    let evening_present = store.count_present(date, Session::Evening).await?;
    let status = ledger::ensure_status(store, date).await?;

    Ok(AttendanceSummary {
        total_members,
        morning_present,
        evening_present,
        locks: status.locks(),
    })
}
