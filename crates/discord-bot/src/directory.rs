//! Adapters that back the invite workflow with Discord and PostgreSQL.

use async_trait::async_trait;
use betabot_core::{
    errors::{BotError, BotResult},
    invite::{InviteLog, MemberDirectory},
    models::{
        ids::{MemberId, RoleId},
        invite::InviteRecord,
    },
};
use betabot_db::{repositories::invites, DbPool};
use serenity::{
    model::id::{GuildId, RoleId as DiscordRoleId, UserId},
    prelude::Context,
    Result as SerenityResult,
};

use crate::errors::platform_error;

/// Members of one guild, as seen through the Discord API.
pub struct SerenityDirectory {
    ctx: Context,
    guild_id: GuildId,
}

impl SerenityDirectory {
    pub fn new(ctx: Context, guild_id: GuildId) -> Self {
        Self { ctx, guild_id }
    }
}

#[async_trait]
impl MemberDirectory for SerenityDirectory {
    async fn has_role(&self, member: MemberId, role: RoleId) -> BotResult<bool> {
        let member = self
            .guild_id
            .member(&self.ctx, UserId(member.0))
            .await
            .map_err(platform_error)?;

        Ok(member.roles.contains(&DiscordRoleId(role.0)))
    }

    async fn grant_role(&self, member: MemberId, role: RoleId, reason: &str) -> BotResult<()> {
        self.ctx
            .http
            .add_member_role(self.guild_id.0, member.0, role.0, Some(reason))
            .await
            .map_err(platform_error)
    }

    async fn send_direct_message(&self, member: MemberId, text: &str) -> BotResult<()> {
        send_dm(&self.ctx, UserId(member.0), text)
            .await
            .map_err(platform_error)
    }
}

/// Open (or reuse) the DM channel with a user and post `text` there.
pub async fn send_dm(ctx: &Context, user_id: UserId, text: &str) -> SerenityResult<()> {
    let channel = user_id.create_dm_channel(ctx).await?;
    channel.say(&ctx.http, text).await?;

    Ok(())
}

/// The `invite_log` table.
pub struct PgInviteLog {
    pool: DbPool,
}

impl PgInviteLog {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InviteLog for PgInviteLog {
    async fn log_invite(&self, record: &InviteRecord) -> BotResult<()> {
        invites::log_invite(
            &self.pool,
            &record.invoker.to_string(),
            &record.invitee.to_string(),
            &record.note,
        )
        .await
        .map_err(BotError::Database)?;

        Ok(())
    }
}
