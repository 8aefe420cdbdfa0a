//! The bulk-invite confirmation workflow.
//!
//! An operator picks a batch of members, gets a Yes/No prompt, and on
//! confirmation every member without the tester role is granted it,
//! notified, and recorded in the invite log.

pub mod component;
pub mod directory;
pub mod registry;
pub mod workflow;

pub use component::ComponentAction;
pub use directory::{InviteLog, MemberDirectory};
pub use registry::{PromptRegistry, Resolution, PROMPT_TTL};
pub use workflow::{BulkInvite, Confirmation, PromptState};
