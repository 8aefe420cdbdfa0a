use std::time::Duration;

use betabot_discord_bot::config::{parse_id, BotConfig};
use rstest::rstest;

fn config(rate_limit_delay_secs: Option<u64>) -> BotConfig {
    BotConfig {
        token: "test_token".to_string(),
        application_id: 12345,
        database_url: "postgres://localhost".to_string(),
        tester_role_id: 1,
        mod_role_id: 2,
        showcase_channel_id: 3,
        test_guild_id: None,
        rate_limit_delay_secs,
    }
}

#[test]
fn test_rate_limit_delay_default() {
    assert_eq!(config(None).rate_limit_delay(), Duration::from_secs(600));
}

#[test]
fn test_rate_limit_delay_custom() {
    assert_eq!(config(Some(30)).rate_limit_delay(), Duration::from_secs(30));
}

#[rstest]
#[case("1234", 1234)]
#[case(" 987654321098765432 ", 987654321098765432)]
fn test_parse_id(#[case] value: &str, #[case] expected: u64) {
    assert_eq!(parse_id("TESTER_ROLE_ID", value).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("abc")]
#[case("-5")]
fn test_parse_id_names_variable(#[case] value: &str) {
    let err = parse_id("TESTER_ROLE_ID", value).unwrap_err();
    assert_eq!(err.to_string(), "TESTER_ROLE_ID must be a valid u64");
}
