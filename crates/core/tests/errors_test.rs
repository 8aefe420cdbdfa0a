use std::error::Error;
use betabot_core::errors::{BotError, BotResult};

#[test]
fn test_bot_error_display() {
    let not_found = BotError::NotFound("Prompt not found".to_string());
    let rate_limited = BotError::RateLimited;
    let platform = BotError::Platform(eyre::eyre!("Missing access"));
    let database = BotError::Database(eyre::eyre!("Database connection failed"));

    assert_eq!(not_found.to_string(), "Resource not found: Prompt not found");
    assert_eq!(rate_limited.to_string(), "Rate limited by the platform");
    assert!(platform.to_string().contains("Platform error:"));
    assert!(database.to_string().contains("Database error:"));
}

#[test]
fn test_only_rate_limits_are_fatal() {
    assert!(BotError::RateLimited.is_fatal());
    assert!(!BotError::Platform(eyre::eyre!("Unknown member")).is_fatal());
    assert!(!BotError::NotFound("member".to_string()).is_fatal());
    assert!(!BotError::Database(eyre::eyre!("timeout")).is_fatal());
}

#[test]
fn test_bot_result() {
    let result: BotResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BotResult<i32> = Err(BotError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_database_error_keeps_report_message() {
    let result: Result<(), eyre::Report> = Err(eyre::eyre!("pool timed out"));
    let bot_error = result.map_err(BotError::Database).unwrap_err();

    assert!(matches!(bot_error, BotError::Database(_)));
    assert!(bot_error.to_string().contains("pool timed out"));
    assert!(!bot_error.is_fatal());
}

#[test]
fn test_rate_limit_survives_eyre_wrapping() {
    let report = eyre::Report::new(BotError::RateLimited);

    assert!(matches!(report.downcast_ref::<BotError>(), Some(BotError::RateLimited)));
    assert!(report.source().is_none());
}
