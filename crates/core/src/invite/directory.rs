use async_trait::async_trait;

use crate::errors::BotResult;
use crate::models::ids::{MemberId, RoleId};
use crate::models::invite::InviteRecord;

/// Member and role operations on the chat platform.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    async fn has_role(&self, member: MemberId, role: RoleId) -> BotResult<bool>;

    async fn grant_role(&self, member: MemberId, role: RoleId, reason: &str) -> BotResult<()>;

    /// Delivery is best-effort: recipients may have direct messages disabled.
    async fn send_direct_message(&self, member: MemberId, text: &str) -> BotResult<()>;
}

/// Append-only record of who invited whom.
#[async_trait]
pub trait InviteLog: Send + Sync {
    async fn log_invite(&self, record: &InviteRecord) -> BotResult<()>;
}
