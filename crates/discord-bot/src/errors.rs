//! Process-wide error handling.
//!
//! Every error that escapes an event handler ends up in
//! [`ErrorReporter::report`]. Rate limits additionally ask the running client
//! to shut down so the binary can reconnect after a delay.

use std::sync::Arc;

use betabot_core::errors::BotError;
use eyre::Report;
use tokio::sync::Notify;
use tracing::{error, warn};

/// Shown to operators instead of internal error detail.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong :(";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    RateLimited,
    Unexpected,
}

/// Classify an error by walking its whole cause chain.
pub fn classify(report: &Report) -> ErrorClass {
    let rate_limited = report.chain().any(|cause| {
        matches!(cause.downcast_ref::<BotError>(), Some(BotError::RateLimited))
            || cause
                .downcast_ref::<serenity::Error>()
                .is_some_and(is_rate_limit)
    });

    if rate_limited {
        ErrorClass::RateLimited
    } else {
        ErrorClass::Unexpected
    }
}

/// True for an HTTP 429 from the platform API.
pub fn is_rate_limit(err: &serenity::Error) -> bool {
    match err {
        serenity::Error::Http(http_err) => {
            http_err.status_code().map(|status| status.as_u16()) == Some(429)
        }
        _ => false,
    }
}

/// Convert a platform error into the domain error the workflow understands.
pub fn platform_error(err: serenity::Error) -> BotError {
    if is_rate_limit(&err) {
        BotError::RateLimited
    } else {
        BotError::Platform(err.into())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ErrorReporter {
    restart: Arc<Notify>,
}

impl ErrorReporter {
    pub fn new(restart: Arc<Notify>) -> Self {
        Self { restart }
    }

    pub fn report(&self, context: &str, report: &Report) -> ErrorClass {
        let class = classify(report);
        match class {
            ErrorClass::RateLimited => {
                warn!(context, error = %report, "Rate limited, requesting reconnect");
                self.restart.notify_one();
            }
            ErrorClass::Unexpected => {
                error!(context, error = ?report, "Unhandled error");
            }
        }
        class
    }
}
