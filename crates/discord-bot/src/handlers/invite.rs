use betabot_core::{
    invite::{BulkInvite, ComponentAction, Confirmation, Resolution},
    models::ids::{MemberId, MessageRef, RoleId},
};
use eyre::{eyre, Result};
use serenity::{
    builder::CreateComponents,
    model::{
        application::{
            component::ButtonStyle,
            interaction::{
                application_command::ApplicationCommandInteraction,
                message_component::MessageComponentInteraction,
                InteractionResponseType,
            },
        },
        channel::ReactionType,
        id::UserId,
    },
};
use std::collections::HashSet;
use tracing::{debug, info};

use super::HandlerContext;
use crate::directory::{PgInviteLog, SerenityDirectory};

pub const NO_MENTIONS_MESSAGE: &str = "No members are mentioned in that message.";
pub const CANCELLED_MESSAGE: &str = "Bulk invite cancelled.";

/// Handle the "Invite mentioned users" context-menu command.
///
/// Posts an ephemeral Yes/No prompt and registers the workflow under the
/// prompt's message id so the buttons can find it again.
pub async fn handle_bulk_invite_command(
    ctx: HandlerContext,
    command: &ApplicationCommandInteraction,
) -> Result<()> {
    if command.guild_id.is_none() {
        return Err(eyre!("Command must be used in a server"));
    }

    let message = command
        .data
        .resolved
        .messages
        .values()
        .next()
        .ok_or_else(|| eyre!("Missing target message"))?;

    let candidates = candidates_from_mentions(message.mentions.iter().map(|user| (user.id, user.bot)));
    let count = candidates.len();
    let jump_url = message.link();
    let source = MessageRef {
        id: message.id.0,
        jump_url: jump_url.clone(),
    };

    let Some(invite) = BulkInvite::new(
        candidates,
        source,
        format!("bulk invite at {}", jump_url),
        RoleId(ctx.config.tester_role_id),
    ) else {
        command
            .create_interaction_response(&ctx.ctx.http, |r| {
                r.kind(InteractionResponseType::ChannelMessageWithSource)
                    .interaction_response_data(|m| m.content(NO_MENTIONS_MESSAGE).ephemeral(true))
            })
            .await?;

        return Ok(());
    };

    let prompt = prompt_text(count, &jump_url);

    command
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::ChannelMessageWithSource)
                .interaction_response_data(|m| {
                    m.content(&prompt)
                        .ephemeral(true)
                        .components(confirm_buttons)
                })
        })
        .await?;

    // The prompt's message id only exists once it is posted. A click landing
    // before the insert below resolves as unknown and is acknowledged with no
    // change, and the operator can click again.
    let prompt_message = command.get_interaction_response(&ctx.ctx.http).await?;
    ctx.prompts.insert(prompt_message.id.0, invite).await;

    let live_prompts = ctx.prompts.len().await;
    info!(
        operator = %command.user.id,
        prompt = %prompt_message.id,
        live_prompts = live_prompts,
        "Bulk invite prompt created"
    );

    Ok(())
}

/// Route a button click to its handler by custom id.
pub async fn handle_component_interaction(
    ctx: HandlerContext,
    component: &MessageComponentInteraction,
) -> Result<()> {
    let Some(action) = ComponentAction::from_custom_id(&component.data.custom_id) else {
        debug!(custom_id = %component.data.custom_id, "Unknown component");
        return Ok(());
    };

    let prompt_id = component.message.id.0;
    match ctx.prompts.resolve(prompt_id, action).await {
        Resolution::Confirm(confirmation) => confirm(&ctx, component, confirmation).await,
        Resolution::Cancelled => cancel(&ctx, component).await,
        Resolution::Replay => {
            debug!(%action, prompt_id, "Prompt already used, click ignored");
            acknowledge(&ctx, component).await
        }
        Resolution::Unknown => {
            debug!(%action, prompt_id, "Ignoring click on an inactive prompt");
            acknowledge(&ctx, component).await
        }
    }
}

async fn confirm(
    ctx: &HandlerContext,
    component: &MessageComponentInteraction,
    confirmation: Confirmation,
) -> Result<()> {
    let guild_id = component
        .guild_id
        .ok_or_else(|| eyre!("Bulk invite confirmed outside of a server"))?;

    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::DeferredChannelMessageWithSource)
                .interaction_response_data(|m| m.ephemeral(true))
        })
        .await?;

    let directory = SerenityDirectory::new(ctx.ctx.clone(), guild_id);
    let log = PgInviteLog::new(ctx.db_pool.clone());
    let summary = confirmation
        .run(MemberId(component.user.id.0), &directory, &log)
        .await?;

    component
        .create_followup_message(&ctx.ctx.http, |m| {
            m.content(summary.to_string()).ephemeral(true)
        })
        .await?;

    Ok(())
}

async fn cancel(ctx: &HandlerContext, component: &MessageComponentInteraction) -> Result<()> {
    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::UpdateMessage)
                .interaction_response_data(|m| m.content(CANCELLED_MESSAGE).components(|c| c))
        })
        .await?;

    Ok(())
}

/// Answer a click without changing anything visible.
async fn acknowledge(ctx: &HandlerContext, component: &MessageComponentInteraction) -> Result<()> {
    component
        .create_interaction_response(&ctx.ctx.http, |r| {
            r.kind(InteractionResponseType::DeferredUpdateMessage)
        })
        .await?;

    Ok(())
}

fn confirm_buttons(components: &mut CreateComponents) -> &mut CreateComponents {
    components.create_action_row(|row| {
        row.create_button(|b| {
            b.custom_id(ComponentAction::ConfirmBulkInvite.custom_id())
                .label("Yes")
                .emoji(ReactionType::Unicode("✅".to_string()))
                .style(ButtonStyle::Success)
        })
        .create_button(|b| {
            b.custom_id(ComponentAction::CancelBulkInvite.custom_id())
                .label("No")
                .emoji(ReactionType::Unicode("❌".to_string()))
                .style(ButtonStyle::Danger)
        })
    })
}

/// Non-bot mentions in mention order, without duplicates.
pub fn candidates_from_mentions(mentions: impl IntoIterator<Item = (UserId, bool)>) -> Vec<MemberId> {
    let mut seen = HashSet::new();
    mentions
        .into_iter()
        .filter(|&(_, is_bot)| !is_bot)
        .map(|(user_id, _)| MemberId(user_id.0))
        .filter(|member| seen.insert(*member))
        .collect()
}

pub fn prompt_text(count: usize, jump_url: &str) -> String {
    format!("Invite {} members mentioned in {} to the beta?", count, jump_url)
}
