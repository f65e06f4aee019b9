//! The DailyStatus ledger. Nothing else mutates lock records.

use chrono::Utc;
use tracing::info;

use crate::date::DateKey;
use crate::errors::AttendanceResult;
use crate::models::{
    attendance::Session,
    daily_status::{DailyStatus, LockStamp},
};
use crate::store::LedgerStore;

/// Idempotent get-or-create of the record for `date`.
pub async fn ensure_status<S>(store: &S, date: DateKey) -> AttendanceResult<DailyStatus>
where
    S: LedgerStore + ?Sized,
{
    store.ensure_status(date).await
}

/// Sets one session's lock flag. Locking stamps the current time and `actor`,
/// unlocking clears both.
pub async fn set_lock<S>(
    store: &S,
    date: DateKey,
    session: Session,
    locked: bool,
    actor: &str,
) -> AttendanceResult<DailyStatus>
where
    S: LedgerStore + ?Sized,
{
    let stamp = locked.then(|| LockStamp {
        at: Utc::now(),
        by: actor.to_string(),
    });

    let status = store.set_lock(date, session, stamp).await?;
    info!(%date, %session, locked, actor, "attendance lock updated");
    Ok(status)
}

/// Absence of a record means unlocked; the record is created on the way.
pub async fn is_locked<S>(store: &S, date: DateKey, session: Session) -> AttendanceResult<bool>
where
    S: LedgerStore + ?Sized,
{
    let status = ensure_status(store, date).await?;
    Ok(status.is_locked(session))
}
