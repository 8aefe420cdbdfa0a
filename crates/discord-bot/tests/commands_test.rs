use betabot_discord_bot::commands::{self, invite};
use pretty_assertions::assert_eq;
use serde_json::json;
use serenity::builder::CreateApplicationCommands;

#[test]
fn test_register_commands() {
    // Registration must not panic; the builder itself is mostly opaque
    let mut commands = CreateApplicationCommands::default();
    commands::register_commands(&mut commands);
}

#[test]
fn test_bulk_invite_is_message_context_menu() {
    let command = invite::bulk_invite_command();

    assert_eq!(command.0.get("name"), Some(&json!(invite::BULK_INVITE_COMMAND)));
    // 3 = MESSAGE command type
    assert_eq!(command.0.get("type"), Some(&json!(3)));
    assert_eq!(command.0.get("dm_permission"), Some(&json!(false)));
}
