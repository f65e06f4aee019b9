use crate::models::{DbAttendance, DbAttendanceWithMember};
use chrono::{NaiveDate, Utc};
use eyre::Result;
use rollcall_core::models::attendance::Session;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Sets one session column of the (member, date) row. A new row starts with
/// both sessions false before the named one is applied.
pub async fn upsert_session(
    pool: &Pool<Postgres>,
    member_id: Uuid,
    date: NaiveDate,
    session: Session,
    present: bool,
) -> Result<DbAttendance> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let column = session.as_str();

    let query = format!(
        r#"
        INSERT INTO attendance (id, member_id, date, {column}, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        ON CONFLICT (member_id, date) DO UPDATE SET
            {column} = EXCLUDED.{column},
            updated_at = EXCLUDED.updated_at
        RETURNING id, member_id, date, morning, evening, created_at, updated_at
        "#,
        column = column,
    );

    let entry = sqlx::query_as::<_, DbAttendance>(&query)
        .bind(id)
        .bind(member_id)
        .bind(date)
        .bind(present)
        .bind(now)
        .fetch_one(pool)
        .await?;

    tracing::debug!(
        "Marked attendance: member_id={}, date={}, {}={}",
        member_id,
        date,
        column,
        present
    );
    Ok(entry)
}

pub async fn list_for_date(
    pool: &Pool<Postgres>,
    date: NaiveDate,
) -> Result<Vec<DbAttendanceWithMember>> {
    let entries = sqlx::query_as::<_, DbAttendanceWithMember>(
        r#"
        SELECT a.id, a.member_id, a.date, a.morning, a.evening, a.created_at, a.updated_at,
               m.name AS member_name,
               m.created_at AS member_created_at,
               m.updated_at AS member_updated_at
        FROM attendance a
        JOIN members m ON m.id = a.member_id
        WHERE a.date = $1
        ORDER BY m.name COLLATE "C" ASC
        "#,
    )
    .bind(date)
    .fetch_all(pool)
    .await?;

    Ok(entries)
}

pub async fn count_present(pool: &Pool<Postgres>, date: NaiveDate, session: Session) -> Result<i64> {
    let query = format!(
        "SELECT COUNT(*) FROM attendance WHERE date = $1 AND {} = TRUE",
        session.as_str()
    );

    let count = sqlx::query_scalar::<_, i64>(&query)
        .bind(date)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
