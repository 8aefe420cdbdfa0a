use eyre::{eyre, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

const DEFAULT_RATE_LIMIT_DELAY_SECS: u64 = 600;

/// Configuration for the Discord bot.
///
/// Everything is read from environment variables; see [`BotConfig::from_env`].
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Discord bot token (required)
    pub token: String,
    /// Application ID for Discord bot (required)
    pub application_id: u64,
    /// Database connection URL (required)
    pub database_url: String,
    /// Role granted by bulk invites (required)
    pub tester_role_id: u64,
    /// Members with this role may run `!sync` (required)
    pub mod_role_id: u64,
    /// Channel where only image posts are allowed (required)
    pub showcase_channel_id: u64,
    /// Test guild ID for faster command registration during development
    pub test_guild_id: Option<u64>,
    /// How long to wait before reconnecting after being rate limited
    pub rate_limit_delay_secs: Option<u64>,
}

impl BotConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let token = env::var("DISCORD_TOKEN")
            .map_err(|_| eyre!("DISCORD_TOKEN environment variable not set"))?;

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| eyre!("DATABASE_URL environment variable not set"))?;

        // Optional test guild ID for development
        let test_guild_id = env::var("DISCORD_TEST_GUILD_ID")
            .ok()
            .and_then(|id| id.parse::<u64>().ok());

        let rate_limit_delay_secs = env::var("RATE_LIMIT_DELAY_SECS")
            .ok()
            .map(|secs| parse_id("RATE_LIMIT_DELAY_SECS", &secs))
            .transpose()?;

        Ok(Self {
            token,
            application_id: required_id("DISCORD_APPLICATION_ID")?,
            database_url,
            tester_role_id: required_id("TESTER_ROLE_ID")?,
            mod_role_id: required_id("MOD_ROLE_ID")?,
            showcase_channel_id: required_id("SHOWCASE_CHANNEL_ID")?,
            test_guild_id,
            rate_limit_delay_secs,
        })
    }

    /// Reconnect delay after a rate limit (defaults to 10 minutes)
    pub fn rate_limit_delay(&self) -> Duration {
        Duration::from_secs(
            self.rate_limit_delay_secs
                .unwrap_or(DEFAULT_RATE_LIMIT_DELAY_SECS),
        )
    }
}

fn required_id(name: &str) -> Result<u64> {
    let value = env::var(name).map_err(|_| eyre!("{} environment variable not set", name))?;
    parse_id(name, &value)
}

/// Parse a numeric setting, naming the variable in the error.
pub fn parse_id(name: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|_| eyre!("{} must be a valid u64", name))
}
