//! Member management.

use uuid::Uuid;

use crate::errors::{AttendanceError, AttendanceResult};
use crate::models::member::Member;
use crate::store::MemberStore;

pub async fn create_member<S>(store: &S, name: Option<&str>) -> AttendanceResult<Member>
where
    S: MemberStore + ?Sized,
{
    let name = name.map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(AttendanceError::Validation("Name is required".to_string()));
    }

    store.create_member(name).await
}

pub async fn list_members<S>(store: &S) -> AttendanceResult<Vec<Member>>
where
    S: MemberStore + ?Sized,
{
    store.list_members().await
}

/// Deletes the member and, with it, all of their register entries.
pub async fn delete_member<S>(store: &S, id: Uuid) -> AttendanceResult<()>
where
    S: MemberStore + ?Sized,
{
    if store.delete_member(id).await? {
        Ok(())
    } else {
        Err(AttendanceError::NotFound("Member not found".to_string()))
    }
}
