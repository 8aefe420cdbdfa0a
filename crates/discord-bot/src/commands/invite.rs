use serenity::{
    builder::CreateApplicationCommand,
    model::{application::command::CommandType, permissions::Permissions},
};

/// Name shown in the message context menu ("Apps" > ...).
pub const BULK_INVITE_COMMAND: &str = "Invite mentioned users";

/// Message context-menu command that starts a bulk invite for everyone
/// mentioned in the target message.
pub fn bulk_invite_command() -> CreateApplicationCommand {
    let mut command = CreateApplicationCommand::default();
    command
        .name(BULK_INVITE_COMMAND)
        .kind(CommandType::Message)
        .dm_permission(false)
        .default_member_permissions(Permissions::MANAGE_ROLES);

    command
}
