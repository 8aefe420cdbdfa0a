use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub discord_id: String,
    pub tester_since: Option<DateTime<Utc>>,
    pub is_vouch_blacklisted: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbInvite {
    pub id: Uuid,
    pub invoker_id: String,
    pub invitee_id: String,
    pub note: String,
    pub created_at: DateTime<Utc>,
}
