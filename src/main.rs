use color_eyre::eyre::Result;
use dotenv::dotenv;
use betabot_discord_bot::{config::BotConfig, BotExit};
use betabot_db::{create_pool, schema::initialize_database};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting betabot");

    // Load configuration
    let config = BotConfig::from_env()?;

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    loop {
        match betabot_discord_bot::start_bot(config.clone(), db_pool.clone()).await {
            Ok(BotExit::Shutdown) => {
                info!("Discord bot shut down gracefully");
                break;
            }
            Ok(BotExit::RateLimited) => {
                let delay = config.rate_limit_delay();
                warn!("Rate limited, reconnecting in {}s", delay.as_secs());
                tokio::time::sleep(delay).await;
            }
            Err(e) => {
                error!("Discord bot error: {:?}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}
