use crate::models::DbDailyStatus;
use chrono::{DateTime, NaiveDate, Utc};
use eyre::Result;
use rollcall_core::models::attendance::Session;
use sqlx::{Pool, Postgres};

const STATUS_COLUMNS: &str = "date, morning_locked, morning_locked_at, morning_locked_by, \
     evening_locked, evening_locked_at, evening_locked_by, created_at, updated_at";

/// Get-or-create for one date. Racing inserts collapse on the primary key and
/// every caller reads back the single surviving row.
pub async fn ensure_status(pool: &Pool<Postgres>, date: NaiveDate) -> Result<DbDailyStatus> {
    let now = Utc::now();

    let inserted = sqlx::query(
        r#"
        INSERT INTO daily_status (date, created_at, updated_at)
        VALUES ($1, $2, $2)
        ON CONFLICT (date) DO NOTHING
        "#,
    )
    .bind(date)
    .bind(now)
    .execute(pool)
    .await?
    .rows_affected();

    if inserted > 0 {
        tracing::debug!("Created daily status: date={}", date);
    }

    let status = sqlx::query_as::<_, DbDailyStatus>(&format!(
        "SELECT {} FROM daily_status WHERE date = $1",
        STATUS_COLUMNS
    ))
    .bind(date)
    .fetch_one(pool)
    .await?;

    Ok(status)
}

/// Writes one session's lock columns, creating the row if the date is new.
/// The other session's columns are never part of the statement.
pub async fn set_lock(
    pool: &Pool<Postgres>,
    date: NaiveDate,
    session: Session,
    locked_at: Option<DateTime<Utc>>,
    locked_by: Option<&str>,
) -> Result<DbDailyStatus> {
    let now = Utc::now();
    let locked = locked_at.is_some();
    let s = session.as_str();

    tracing::debug!(
        "Setting lock: date={}, session={}, locked={}",
        date,
        s,
        locked
    );

    let query = format!(
        r#"
        INSERT INTO daily_status (date, {s}_locked, {s}_locked_at, {s}_locked_by, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $5)
        ON CONFLICT (date) DO UPDATE SET
            {s}_locked = EXCLUDED.{s}_locked,
            {s}_locked_at = EXCLUDED.{s}_locked_at,
            {s}_locked_by = EXCLUDED.{s}_locked_by,
            updated_at = EXCLUDED.updated_at
        RETURNING {columns}
        "#,
        s = s,
        columns = STATUS_COLUMNS,
    );

    let status = sqlx::query_as::<_, DbDailyStatus>(&query)
        .bind(date)
        .bind(locked)
        .bind(locked_at)
        .bind(locked_by)
        .bind(now)
        .fetch_one(pool)
        .await?;

    Ok(status)
}
