use crate::models::DbInvite;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn log_invite(
    pool: &Pool<Postgres>,
    invoker_id: &str,
    invitee_id: &str,
    note: &str,
) -> Result<DbInvite> {
    let invite = sqlx::query_as::<_, DbInvite>(
        r#"
        INSERT INTO invite_log (id, invoker_id, invitee_id, note, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, invoker_id, invitee_id, note, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(invoker_id)
    .bind(invitee_id)
    .bind(note)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(invite)
}
