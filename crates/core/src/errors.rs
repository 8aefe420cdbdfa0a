use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited by the platform")]
    RateLimited,

    #[error("Platform error: {0}")]
    Platform(eyre::Report),

    #[error("Database error: {0}")]
    Database(eyre::Report),
}

impl BotError {
    /// Fatal errors abort whatever batch they occur in and must reach the
    /// process-wide error handler. Everything else can be tolerated per item.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BotError::RateLimited)
    }
}

pub type BotResult<T> = Result<T, BotError>;
