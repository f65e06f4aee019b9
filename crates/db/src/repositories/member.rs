use crate::models::DbMember;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn create_member(pool: &Pool<Postgres>, name: &str) -> Result<DbMember> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!("Creating member: id={}, name={}", id, name);

    let member = sqlx::query_as::<_, DbMember>(
        r#"
        INSERT INTO members (id, name, created_at, updated_at)
        VALUES ($1, $2, $3, $3)
        RETURNING id, name, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(member)
}

pub async fn get_member_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbMember>> {
    let member = sqlx::query_as::<_, DbMember>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM members
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(member)
}

pub async fn list_members(pool: &Pool<Postgres>) -> Result<Vec<DbMember>> {
    let members = sqlx::query_as::<_, DbMember>(
        r#"
        SELECT id, name, created_at, updated_at
        FROM members
        ORDER BY name COLLATE "C" ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(members)
}

pub async fn count_members(pool: &Pool<Postgres>) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Deletes the member's attendance rows and then the member, in one transaction.
pub async fn delete_member(pool: &Pool<Postgres>, id: Uuid) -> Result<bool> {
    let mut tx = pool.begin().await?;

    let removed_entries = sqlx::query("DELETE FROM attendance WHERE member_id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let removed = sqlx::query("DELETE FROM members WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tx.commit().await?;

    tracing::debug!(
        "Deleted member: id={}, found={}, attendance_rows={}",
        id,
        removed > 0,
        removed_entries
    );
    Ok(removed > 0)
}
