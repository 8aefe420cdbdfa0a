use std::sync::Arc;

use eyre::Result;
use serenity::{
    Client,
    prelude::GatewayIntents,
};
use sqlx::PgPool;
use tokio::sync::Notify;
use tracing::{info, warn};

pub mod commands;
pub mod config;
pub mod directory;
pub mod errors;
pub mod handlers;

/// Why [`start_bot`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotExit {
    /// The gateway connection ended on its own.
    Shutdown,
    /// A handler hit a platform rate limit; reconnect after
    /// [`config::BotConfig::rate_limit_delay`].
    RateLimited,
}

/// Start the Discord bot with the provided configuration and database connection.
///
/// Runs until the gateway connection ends or a handler reports a rate limit,
/// in which case every shard is shut down before returning.
///
/// # Arguments
///
/// * `config` - The bot configuration containing token, role and channel ids
/// * `db_pool` - A PostgreSQL connection pool for database operations
///
/// # Returns
///
/// * `Ok(BotExit)` describing why the bot stopped
/// * `Err` if an error occurred during initialization or operation
pub async fn start_bot(config: config::BotConfig, db_pool: PgPool) -> Result<BotExit> {
    info!("Starting Discord bot");

    let restart = Arc::new(Notify::new());
    let reporter = errors::ErrorReporter::new(restart.clone());
    let handler = handlers::Handler::new(config.clone(), db_pool, reporter);

    let intents = GatewayIntents::non_privileged()
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.token, intents)
        .application_id(config.application_id)
        .event_handler(handler)
        .await?;
    let shard_manager = client.shard_manager.clone();

    info!("Connecting to Discord...");
    tokio::select! {
        result = client.start() => {
            result?;
            Ok(BotExit::Shutdown)
        }
        _ = restart.notified() => {
            warn!("Shutting down shards after rate limit");
            shard_manager.lock().await.shutdown_all().await;
            Ok(BotExit::RateLimited)
        }
    }
}
