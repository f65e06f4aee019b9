use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create members table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id UUID PRIMARY KEY,
            name VARCHAR(255) NOT NULL UNIQUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT name_not_blank CHECK (length(trim(name)) > 0)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create daily_status table, one row per calendar day
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS daily_status (
            date DATE PRIMARY KEY,
            morning_locked BOOLEAN NOT NULL DEFAULT FALSE,
            morning_locked_at TIMESTAMP WITH TIME ZONE NULL,
            morning_locked_by VARCHAR(255) NULL,
            evening_locked BOOLEAN NOT NULL DEFAULT FALSE,
            evening_locked_at TIMESTAMP WITH TIME ZONE NULL,
            evening_locked_by VARCHAR(255) NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create attendance table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS attendance (
            id UUID PRIMARY KEY,
            member_id UUID NOT NULL REFERENCES members(id) ON DELETE CASCADE,
            date DATE NOT NULL,
            morning BOOLEAN NOT NULL DEFAULT FALSE,
            evening BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT attendance_member_date UNIQUE (member_id, date)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes, one statement per prepared query
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_attendance_date ON attendance(date)",
        "CREATE INDEX IF NOT EXISTS idx_attendance_member_id ON attendance(member_id)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully.");
    Ok(())
}
