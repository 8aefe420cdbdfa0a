use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use super::component::ComponentAction;
use super::workflow::{BulkInvite, Confirmation};

/// How long a prompt stays clickable. Matches the lifetime of the interaction
/// token, after which the prompt's buttons cannot be answered anyway.
pub const PROMPT_TTL: Duration = Duration::from_secs(15 * 60);

/// What a button click on a prompt turned into.
#[derive(Debug)]
pub enum Resolution {
    /// This click won the prompt and must run the batch.
    Confirm(Confirmation),
    /// This click cancelled the prompt.
    Cancelled,
    /// The prompt is still registered but another click already won it.
    Replay,
    /// No live prompt under that id: finished, expired, or lost to a restart.
    Unknown,
}

#[derive(Debug)]
struct Entry {
    created: Instant,
    invite: Arc<BulkInvite>,
}

/// Live prompts keyed by the id of the prompt message.
///
/// Button handlers get the prompt message id with every click, so that id is
/// the correlation key back to the workflow state. Prompts nobody answers are
/// dropped once they are older than the TTL.
#[derive(Debug, Clone)]
pub struct PromptRegistry {
    prompts: Arc<RwLock<HashMap<u64, Entry>>>,
    ttl: Duration,
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::with_ttl(PROMPT_TTL)
    }
}

impl PromptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            prompts: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Register a prompt, evicting every expired one on the way.
    pub async fn insert(&self, prompt_id: u64, invite: BulkInvite) -> Arc<BulkInvite> {
        let invite = Arc::new(invite);
        let now = Instant::now();
        let mut prompts = self.prompts.write().await;

        let before = prompts.len();
        prompts.retain(|_, entry| now.duration_since(entry.created) < self.ttl);
        let evicted = before - prompts.len();
        if evicted > 0 {
            debug!(evicted, "Evicted expired bulk invite prompts");
        }

        prompts.insert(
            prompt_id,
            Entry {
                created: now,
                invite: invite.clone(),
            },
        );
        invite
    }

    /// Turn a click into a decision.
    ///
    /// The prompt leaves the registry as soon as a confirm claims it or a
    /// cancel wins, before the caller does anything fallible. A long
    /// confirmation runs on the returned token, outside the lock.
    pub async fn resolve(&self, prompt_id: u64, action: ComponentAction) -> Resolution {
        let mut prompts = self.prompts.write().await;

        let Some(entry) = prompts.get(&prompt_id) else {
            return Resolution::Unknown;
        };
        if entry.created.elapsed() >= self.ttl {
            prompts.remove(&prompt_id);
            return Resolution::Unknown;
        }

        let resolution = match action {
            ComponentAction::ConfirmBulkInvite => match entry.invite.claim() {
                Some(confirmation) => Resolution::Confirm(confirmation),
                None => Resolution::Replay,
            },
            ComponentAction::CancelBulkInvite => {
                if entry.invite.cancel() {
                    Resolution::Cancelled
                } else {
                    Resolution::Replay
                }
            }
        };

        if !matches!(resolution, Resolution::Replay) {
            prompts.remove(&prompt_id);
        }
        resolution
    }

    pub async fn len(&self) -> usize {
        self.prompts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.prompts.read().await.is_empty()
    }
}
