use betabot_db::repositories::users;
use chrono::Utc;
use eyre::Result;
use serenity::model::{guild::Member, id::RoleId};
use tracing::info;

use super::HandlerContext;

/// Record when a member first received the tester role.
pub async fn handle_member_update(ctx: &HandlerContext, old: Option<&Member>, new: &Member) -> Result<()> {
    let tester_role = RoleId(ctx.config.tester_role_id);
    let old_roles = old.map(|member| member.roles.as_slice());

    if !tester_role_granted(old_roles, &new.roles, tester_role) {
        return Ok(());
    }

    let discord_id = new.user.id.to_string();
    if let Some(user) = users::mark_tester(&ctx.db_pool, &discord_id, Utc::now()).await? {
        info!(member = %discord_id, tester_since = ?user.tester_since, "Recorded new tester");
    }

    Ok(())
}

/// Whether this update gave the member the tester role.
///
/// Without the previous role set (member not cached) we can only tell that
/// the role is present; recording is idempotent so that is good enough.
pub fn tester_role_granted(old: Option<&[RoleId]>, new: &[RoleId], tester_role: RoleId) -> bool {
    if !new.contains(&tester_role) {
        return false;
    }

    match old {
        Some(old) => !old.contains(&tester_role),
        None => true,
    }
}
