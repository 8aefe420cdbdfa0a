use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;

/// What happened to a single candidate during a confirmed bulk invite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InviteOutcome {
    AlreadyTester,
    Invited,
    /// The role could not be granted. Only visible as a count discrepancy.
    Failed,
}

/// Result of one confirmed bulk invite, in candidate order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteSummary {
    pub outcomes: Vec<(MemberId, InviteOutcome)>,
}

impl InviteSummary {
    pub fn record(&mut self, member: MemberId, outcome: InviteOutcome) {
        self.outcomes.push((member, outcome));
    }

    pub fn invited(&self) -> Vec<MemberId> {
        self.with_outcome(InviteOutcome::Invited)
    }

    pub fn already_testers(&self) -> Vec<MemberId> {
        self.with_outcome(InviteOutcome::AlreadyTester)
    }

    pub fn failed(&self) -> Vec<MemberId> {
        self.with_outcome(InviteOutcome::Failed)
    }

    fn with_outcome(&self, wanted: InviteOutcome) -> Vec<MemberId> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| *outcome == wanted)
            .map(|(member, _)| *member)
            .collect()
    }
}

impl fmt::Display for InviteSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invited {} members.", self.invited().len())?;

        let already_testers = self.already_testers();
        if !already_testers.is_empty() {
            let mentions = already_testers
                .iter()
                .map(MemberId::mention)
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, " {} were already testers: {}", already_testers.len(), mentions)?;
        }

        Ok(())
    }
}

/// An audit log entry for one newly granted invite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteRecord {
    pub invoker: MemberId,
    pub invitee: MemberId,
    pub note: String,
}
