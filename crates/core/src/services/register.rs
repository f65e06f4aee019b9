//! The attendance register: per-member, per-date presence.

use uuid::Uuid;

use crate::date::DateKey;
use crate::errors::{AttendanceError, AttendanceResult};
use crate::models::attendance::{AttendanceRecord, MarkAttendanceRequest, Session};
use crate::services::ledger;
use crate::store::{LedgerStore, MemberStore, RegisterStore};

/// Sets one session's presence for a member on `date`.
///
/// The lock check completes before the upsert is issued but the two are not
/// one transaction: a commit landing in between lets this mark through.
/// Re-marking with the same value leaves both session flags unchanged; only
/// `updated_at` moves.
pub async fn mark<S>(
    store: &S,
    member_id: Uuid,
    session: Session,
    present: bool,
    date: DateKey,
) -> AttendanceResult<AttendanceRecord>
where
    S: MemberStore + LedgerStore + RegisterStore + ?Sized,
{
    let member = store
        .get_member(member_id)
        .await?
        .ok_or_else(|| AttendanceError::NotFound("Member not found".to_string()))?;

    if ledger::is_locked(store, date, session).await? {
        return Err(AttendanceError::Locked(session));
    }

    let entry = store
        .upsert_session(member.id, date, session, present)
        .await?;

    Ok(entry.with_member(member))
}

/// Validates a raw mark payload and applies it.
pub async fn mark_request<S>(
    store: &S,
    request: &MarkAttendanceRequest,
    date: DateKey,
) -> AttendanceResult<AttendanceRecord>
where
    S: MemberStore + LedgerStore + RegisterStore + ?Sized,
{
    let invalid = || AttendanceError::Validation("Invalid payload".to_string());

    let member_id = request
        .member_id
        .as_deref()
        .and_then(|id| Uuid::parse_str(id.trim()).ok())
        .ok_or_else(invalid)?;
    let session = request
        .session
        .as_deref()
        .and_then(|s| s.parse::<Session>().ok())
        .ok_or_else(invalid)?;
    let present = request.present.ok_or_else(invalid)?;

    mark(store, member_id, session, present, date).await
}

/// Every entry for `date` with its member, ordered by member name.
pub async fn list_for_date<S>(store: &S, date: DateKey) -> AttendanceResult<Vec<AttendanceRecord>>
where
    S: RegisterStore + ?Sized,
{
    store.list_for_date(date).await
}
