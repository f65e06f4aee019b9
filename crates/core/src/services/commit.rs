//! Committing (locking) and unlocking a session for a day.

use tracing::warn;

use crate::auth::CredentialVerifier;
use crate::date::DateKey;
use crate::errors::{AttendanceError, AttendanceResult};
use crate::models::attendance::{CommitRequest, CommitResponse, LockAction, Session};
use crate::services::ledger;
use crate::store::LedgerStore;

/// Locks or unlocks one session of `date`.
///
/// The checks run in a fixed order: the session and action must be valid,
/// a secret must be configured (`verifier` is `None` otherwise), and the
/// presented password must match it. Only then is the ledger touched.
/// Register entries are never modified.
pub async fn commit<S, V>(
    store: &S,
    verifier: Option<&V>,
    date: DateKey,
    request: &CommitRequest,
    actor: &str,
) -> AttendanceResult<CommitResponse>
where
    S: LedgerStore + ?Sized,
    V: CredentialVerifier + ?Sized,
{
    let session: Session = request.session.as_deref().unwrap_or_default().parse()?;
    let action: LockAction = request.action.as_deref().unwrap_or_default().parse()?;

    let verifier = verifier.ok_or(AttendanceError::Misconfigured)?;
    if !verifier.verify(request.password.as_deref().unwrap_or_default()) {
        warn!(%date, %session, "commit rejected: invalid admin password");
        return Err(AttendanceError::Authentication(
            "Invalid admin password".to_string(),
        ));
    }

    ledger::ensure_status(store, date).await?;
    let status = ledger::set_lock(store, date, session, action.locks(), actor).await?;

    let message = if action.locks() {
        "Attendance committed"
    } else {
        "Attendance unlocked"
    };

    Ok(CommitResponse {
        message: message.to_string(),
        locks: status.locks(),
    })
}
