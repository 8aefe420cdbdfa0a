use crate::models::DbUser;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};

/// Record that a member became a tester at `since`.
///
/// Only the first call per member has an effect: an existing `tester_since`
/// is never overwritten. Returns the updated row, or `None` if the member was
/// already marked.
pub async fn mark_tester(
    pool: &Pool<Postgres>,
    discord_id: &str,
    since: DateTime<Utc>,
) -> Result<Option<DbUser>> {
    let user = sqlx::query_as::<_, DbUser>(
        r#"
        INSERT INTO users (discord_id, tester_since, is_vouch_blacklisted, created_at)
        VALUES ($1, $2, FALSE, $2)
        ON CONFLICT (discord_id)
        DO UPDATE SET tester_since = $2, is_vouch_blacklisted = FALSE
        WHERE users.tester_since IS NULL
        RETURNING discord_id, tester_since, is_vouch_blacklisted, created_at
        "#,
    )
    .bind(discord_id)
    .bind(since)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
