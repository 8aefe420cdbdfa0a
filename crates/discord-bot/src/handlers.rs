use serenity::{
    async_trait,
    model::{
        application::interaction::{Interaction, InteractionResponseType},
        channel::Message,
        gateway::Ready,
        guild::Member,
        id::{GuildId, UserId},
    },
    prelude::*,
};
use sqlx::PgPool;
use tracing::{debug, error, info};
use betabot_core::invite::PromptRegistry;

pub mod invite;
pub mod member;
pub mod message;

use crate::config::BotConfig;
use crate::directory::send_dm;
use crate::errors::{ErrorReporter, GENERIC_ERROR_MESSAGE};

/// Main Discord handler that processes all events.
///
/// Holds the configuration, the database pool and the registry of live
/// bulk-invite prompts shared by every event.
pub struct Handler {
    config: BotConfig,
    db_pool: PgPool,
    prompts: PromptRegistry,
    reporter: ErrorReporter,
}

impl Handler {
    /// Create a new handler
    pub fn new(config: BotConfig, db_pool: PgPool, reporter: ErrorReporter) -> Self {
        Self {
            config,
            db_pool,
            prompts: PromptRegistry::new(),
            reporter,
        }
    }

    fn context(&self, ctx: &Context) -> HandlerContext {
        HandlerContext {
            ctx: ctx.clone(),
            config: self.config.clone(),
            db_pool: self.db_pool.clone(),
            prompts: self.prompts.clone(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Handle ready events (when bot connects to Discord)
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected!", ready.user.name);

        // Global registration is slow to propagate and only happens on `!sync`.
        // The development guild gets commands immediately on every start.
        if let Some(test_guild_id) = self.config.test_guild_id {
            let guild_id = GuildId(test_guild_id);

            match guild_id
                .set_application_commands(&ctx.http, |commands| {
                    crate::commands::register_commands(commands)
                })
                .await
            {
                Ok(cmds) => {
                    info!("Guild commands registered successfully for {}! Total commands: {}", test_guild_id, cmds.len());
                }
                Err(why) => {
                    error!("Error registering guild commands: {:?}", why);
                }
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let handler_ctx = self.context(&ctx);

        if let Err(e) = message::handle_message(&handler_ctx, &msg).await {
            self.reporter.report("message", &e);
        }
    }

    async fn guild_member_update(&self, ctx: Context, old_if_available: Option<Member>, new: Member) {
        let handler_ctx = self.context(&ctx);

        if let Err(e) = member::handle_member_update(&handler_ctx, old_if_available.as_ref(), &new).await {
            self.reporter.report("guild_member_update", &e);
        }
    }

    /// Handle interactions (context-menu commands and buttons)
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::ApplicationCommand(command) => {
                info!("Received command: {}", command.data.name);
                let handler_ctx = self.context(&ctx);

                let result = match command.data.name.as_str() {
                    crate::commands::invite::BULK_INVITE_COMMAND => {
                        invite::handle_bulk_invite_command(handler_ctx, &command).await
                    }
                    _ => {
                        error!("Unknown command: {}", command.data.name);
                        Err(eyre::eyre!("Unknown command"))
                    }
                };

                if let Err(e) = result {
                    self.reporter.report("command", &e);

                    // The command may already have been answered
                    if command
                        .create_interaction_response(&ctx.http, |r| {
                            r.kind(InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|m| {
                                    m.content(GENERIC_ERROR_MESSAGE).ephemeral(true)
                                })
                        })
                        .await
                        .is_err()
                    {
                        if let Err(why) = command
                            .create_followup_message(&ctx.http, |m| {
                                m.content(GENERIC_ERROR_MESSAGE).ephemeral(true)
                            })
                            .await
                        {
                            error!("Failed to send error response: {:?}", why);
                        }
                    }
                }
            }
            Interaction::MessageComponent(component) => {
                let handler_ctx = self.context(&ctx);

                if let Err(e) = invite::handle_component_interaction(handler_ctx, &component).await {
                    self.reporter.report("component", &e);

                    if component
                        .create_interaction_response(&ctx.http, |r| {
                            r.kind(InteractionResponseType::ChannelMessageWithSource)
                                .interaction_response_data(|m| {
                                    m.content(GENERIC_ERROR_MESSAGE).ephemeral(true)
                                })
                        })
                        .await
                        .is_err()
                    {
                        if let Err(why) = component
                            .create_followup_message(&ctx.http, |m| {
                                m.content(GENERIC_ERROR_MESSAGE).ephemeral(true)
                            })
                            .await
                        {
                            error!("Failed to send error response: {:?}", why);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

/// Shared context for event handlers.
///
/// This struct provides a convenient way to pass the Discord context,
/// bot configuration, database connection and prompt registry to handlers.
pub struct HandlerContext {
    pub ctx: Context,
    pub config: BotConfig,
    pub db_pool: PgPool,
    pub prompts: PromptRegistry,
}

/// Send a direct message, ignoring failure.
///
/// Members can turn off DMs, so delivery is never guaranteed.
pub async fn try_dm(ctx: &Context, user_id: UserId, text: &str) {
    if let Err(e) = send_dm(ctx, user_id, text).await {
        debug!(user = %user_id, error = %e, "Could not send direct message");
    }
}
