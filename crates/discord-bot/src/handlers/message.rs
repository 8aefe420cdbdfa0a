use eyre::Result;
use serenity::model::{
    application::command::Command,
    channel::{Attachment, Message},
    id::RoleId,
};
use tracing::{debug, info};

use super::{try_dm, HandlerContext};

const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "avif"];

/// Handle a newly created message.
pub async fn handle_message(ctx: &HandlerContext, msg: &Message) -> Result<()> {
    // Ignore our own messages
    if msg.author.id == ctx.ctx.cache.current_user_id() {
        return Ok(());
    }

    if msg.guild_id.is_none() && msg.content == "ping" {
        try_dm(&ctx.ctx, msg.author.id, "pong").await;
        return Ok(());
    }

    if msg.channel_id.0 == ctx.config.showcase_channel_id && !is_showcase_post(&msg.attachments) {
        msg.delete(&ctx.ctx).await?;
        info!(author = %msg.author.id, "Deleted non-image post in showcase");
    }

    if is_sync_command(&msg.content) {
        handle_sync(ctx, msg).await?;
    }

    Ok(())
}

/// Re-register every global command. Moderators only, never from DMs.
async fn handle_sync(ctx: &HandlerContext, msg: &Message) -> Result<()> {
    let roles = match (&msg.guild_id, &msg.member) {
        (Some(_), Some(member)) => member.roles.as_slice(),
        _ => return Ok(()),
    };
    if !is_moderator(roles, RoleId(ctx.config.mod_role_id)) {
        debug!(author = %msg.author.id, "Ignoring !sync from non-moderator");
        return Ok(());
    }

    let commands = Command::set_global_application_commands(&ctx.ctx.http, |commands| {
        crate::commands::register_commands(commands)
    })
    .await?;
    info!("Global commands synced! Total commands: {}", commands.len());

    try_dm(&ctx.ctx, msg.author.id, "Command tree synced.").await;
    Ok(())
}

pub fn is_sync_command(content: &str) -> bool {
    content.trim_end() == "!sync"
}

pub fn is_moderator(roles: &[RoleId], mod_role: RoleId) -> bool {
    roles.contains(&mod_role)
}

/// A showcase post must carry at least one image.
pub fn is_showcase_post(attachments: &[Attachment]) -> bool {
    attachments
        .iter()
        .any(|attachment| is_image(attachment.content_type.as_deref(), &attachment.filename))
}

/// Judge by MIME type when Discord sends one, by file extension otherwise.
pub fn is_image(content_type: Option<&str>, filename: &str) -> bool {
    match content_type {
        Some(content_type) => content_type.starts_with("image/"),
        None => filename
            .rsplit_once('.')
            .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())),
    }
}
