use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::directory::{InviteLog, MemberDirectory};
use crate::errors::BotResult;
use crate::models::ids::{MemberId, MessageRef, RoleId};
use crate::models::invite::{InviteOutcome, InviteRecord, InviteSummary};

/// Audit-log reason attached to every role grant.
pub const GRANT_REASON: &str = "bulk invite via context menu";

/// Direct message sent to every newly granted tester.
pub const NEW_TESTER_DM: &str = "You've been invited to the beta! \
You now have the tester role and can see the tester channels. Welcome aboard!";

/// Lifecycle of one prompt. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PromptState {
    Pending = 0,
    Confirming = 1,
    Completed = 2,
    Cancelled = 3,
}

impl PromptState {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => PromptState::Pending,
            1 => PromptState::Confirming,
            2 => PromptState::Completed,
            _ => PromptState::Cancelled,
        }
    }
}

/// One live bulk-invite prompt.
///
/// The state lives in a single atomic and every transition out of `Pending`
/// is a compare-and-swap, so of any number of concurrent confirm or cancel
/// clicks exactly one wins and the rest are no-ops.
#[derive(Debug)]
pub struct BulkInvite {
    candidates: Vec<MemberId>,
    source: MessageRef,
    note: String,
    role: RoleId,
    state: AtomicU8,
}

impl BulkInvite {
    /// `None` when there is nobody to invite; no prompt is shown for an
    /// empty batch.
    pub fn new(
        candidates: Vec<MemberId>,
        source: MessageRef,
        note: impl Into<String>,
        role: RoleId,
    ) -> Option<Self> {
        if candidates.is_empty() {
            return None;
        }

        Some(Self {
            candidates,
            source,
            note: note.into(),
            role,
            state: AtomicU8::new(PromptState::Pending as u8),
        })
    }

    pub fn candidates(&self) -> &[MemberId] {
        &self.candidates
    }

    pub fn source(&self) -> &MessageRef {
        &self.source
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn role(&self) -> RoleId {
        self.role
    }

    pub fn state(&self) -> PromptState {
        PromptState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// True once a confirm or cancel has won the prompt.
    pub fn is_used(&self) -> bool {
        self.state() != PromptState::Pending
    }

    fn transition(&self, from: PromptState, to: PromptState) -> bool {
        self.state
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Claim the prompt for confirmation. Returns `None` if another confirm
    /// or a cancel already got there first.
    pub fn claim(self: &Arc<Self>) -> Option<Confirmation> {
        self.transition(PromptState::Pending, PromptState::Confirming)
            .then(|| Confirmation {
                invite: Arc::clone(self),
            })
    }

    /// Cancel the prompt. Returns `false` if it is no longer pending.
    pub fn cancel(&self) -> bool {
        self.transition(PromptState::Pending, PromptState::Cancelled)
    }

    /// Claim and run in one step. `Ok(None)` means the click was a replay.
    pub async fn confirm<D, L>(
        self: &Arc<Self>,
        invoker: MemberId,
        directory: &D,
        log: &L,
    ) -> BotResult<Option<InviteSummary>>
    where
        D: MemberDirectory + ?Sized,
        L: InviteLog + ?Sized,
    {
        match self.claim() {
            Some(confirmation) => confirmation.run(invoker, directory, log).await.map(Some),
            None => Ok(None),
        }
    }
}

/// Proof that this caller won the prompt. Only a `Confirmation` can grant roles.
#[derive(Debug)]
pub struct Confirmation {
    invite: Arc<BulkInvite>,
}

impl Confirmation {
    pub fn invite(&self) -> &BulkInvite {
        &self.invite
    }

    /// Process every candidate in order, one at a time.
    ///
    /// Per-candidate failures are logged and skipped. Only fatal errors
    /// (rate limits) abort the batch.
    pub async fn run<D, L>(self, invoker: MemberId, directory: &D, log: &L) -> BotResult<InviteSummary>
    where
        D: MemberDirectory + ?Sized,
        L: InviteLog + ?Sized,
    {
        let invite = &*self.invite;
        let mut summary = InviteSummary::default();

        for &member in &invite.candidates {
            let outcome = process_candidate(invite, invoker, member, directory, log).await?;
            summary.record(member, outcome);
        }

        invite
            .state
            .store(PromptState::Completed as u8, Ordering::Release);

        info!(
            prompt = invite.source.id,
            invited = summary.invited().len(),
            candidates = invite.candidates.len(),
            "Bulk invite completed"
        );

        Ok(summary)
    }
}

async fn process_candidate<D, L>(
    invite: &BulkInvite,
    invoker: MemberId,
    member: MemberId,
    directory: &D,
    log: &L,
) -> BotResult<InviteOutcome>
where
    D: MemberDirectory + ?Sized,
    L: InviteLog + ?Sized,
{
    match directory.has_role(member, invite.role).await {
        Ok(true) => return Ok(InviteOutcome::AlreadyTester),
        Ok(false) => {}
        Err(err) if err.is_fatal() => return Err(err),
        Err(err) => {
            warn!(%member, error = %err, "Could not look up member roles, skipping");
            return Ok(InviteOutcome::Failed);
        }
    }

    match directory.grant_role(member, invite.role, GRANT_REASON).await {
        Ok(()) => {}
        Err(err) if err.is_fatal() => return Err(err),
        Err(err) => {
            warn!(%member, error = %err, "Failed to grant tester role");
            return Ok(InviteOutcome::Failed);
        }
    }

    if let Err(err) = directory.send_direct_message(member, NEW_TESTER_DM).await {
        debug!(%member, error = %err, "Could not DM new tester");
    }

    let record = InviteRecord {
        invoker,
        invitee: member,
        note: invite.note.clone(),
    };
    if let Err(err) = log.log_invite(&record).await {
        warn!(%member, error = %err, "Failed to write invite log entry");
    }

    Ok(InviteOutcome::Invited)
}
