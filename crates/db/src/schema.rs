use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            discord_id VARCHAR(32) PRIMARY KEY,
            tester_since TIMESTAMP WITH TIME ZONE NULL,
            is_vouch_blacklisted BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Append-only: rows are never updated or deleted
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS invite_log (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            invoker_id VARCHAR(32) NOT NULL,
            invitee_id VARCHAR(32) NOT NULL,
            note TEXT NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_invite_log_invitee_id ON invite_log(invitee_id);
        CREATE INDEX IF NOT EXISTS idx_invite_log_invoker_id ON invite_log(invoker_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
