use serenity::builder::CreateApplicationCommands;

pub mod invite;

/// Register all commands for the bot.
///
/// Used both for the development guild on ready and for the global
/// registration triggered by `!sync`.
pub fn register_commands(commands: &mut CreateApplicationCommands) -> &mut CreateApplicationCommands {
    commands.create_application_command(|command| {
        *command = invite::bulk_invite_command();
        command
    });

    commands
}
