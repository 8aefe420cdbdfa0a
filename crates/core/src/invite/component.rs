use std::fmt;
use std::str::FromStr;

use crate::errors::BotError;

pub const CONFIRM_BULK_INVITE: &str = "bulk_invite:confirm";
pub const CANCEL_BULK_INVITE: &str = "bulk_invite:cancel";

/// Buttons the bot knows how to handle, keyed by their stable custom id.
///
/// The ids survive restarts, so a late click on an old prompt still maps to
/// the right action even when the prompt itself is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentAction {
    ConfirmBulkInvite,
    CancelBulkInvite,
}

impl ComponentAction {
    pub const ALL: [ComponentAction; 2] = [
        ComponentAction::ConfirmBulkInvite,
        ComponentAction::CancelBulkInvite,
    ];

    pub fn custom_id(self) -> &'static str {
        match self {
            ComponentAction::ConfirmBulkInvite => CONFIRM_BULK_INVITE,
            ComponentAction::CancelBulkInvite => CANCEL_BULK_INVITE,
        }
    }

    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.custom_id() == custom_id)
    }
}

impl FromStr for ComponentAction {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_custom_id(s)
            .ok_or_else(|| BotError::NotFound(format!("No handler for component {}", s)))
    }
}

impl fmt::Display for ComponentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.custom_id())
    }
}
