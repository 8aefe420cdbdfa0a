use betabot_core::invite::ComponentAction;
use betabot_core::models::{
    ids::{MemberId, MessageRef},
    invite::{InviteOutcome, InviteSummary},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, to_string};

fn summary(outcomes: &[(u64, InviteOutcome)]) -> InviteSummary {
    let mut summary = InviteSummary::default();
    for &(id, outcome) in outcomes {
        summary.record(MemberId(id), outcome);
    }
    summary
}

#[test]
fn test_member_mention() {
    assert_eq!(MemberId(1234).mention(), "<@1234>");
    assert_eq!(MemberId(1234).to_string(), "1234");
}

#[rstest]
#[case(&[], "Invited 0 members.")]
#[case(&[(1, InviteOutcome::Invited), (3, InviteOutcome::Invited)], "Invited 2 members.")]
#[case(
    &[(1, InviteOutcome::Invited), (2, InviteOutcome::AlreadyTester), (3, InviteOutcome::Invited)],
    "Invited 2 members. 1 were already testers: <@2>"
)]
#[case(
    &[(1, InviteOutcome::AlreadyTester), (2, InviteOutcome::AlreadyTester)],
    "Invited 0 members. 2 were already testers: <@1> <@2>"
)]
#[case(
    &[(1, InviteOutcome::Failed), (2, InviteOutcome::Invited), (3, InviteOutcome::Invited)],
    "Invited 2 members."
)]
fn test_summary_message(#[case] outcomes: &[(u64, InviteOutcome)], #[case] expected: &str) {
    assert_eq!(summary(outcomes).to_string(), expected);
}

#[test]
fn test_summary_keeps_candidate_order() {
    let summary = summary(&[
        (5, InviteOutcome::Invited),
        (1, InviteOutcome::Failed),
        (9, InviteOutcome::Invited),
        (2, InviteOutcome::AlreadyTester),
    ]);

    assert_eq!(summary.invited(), vec![MemberId(5), MemberId(9)]);
    assert_eq!(summary.failed(), vec![MemberId(1)]);
    assert_eq!(summary.already_testers(), vec![MemberId(2)]);
}

#[test]
fn test_message_ref_serialization() {
    let source = MessageRef {
        id: 42,
        jump_url: "https://discord.com/channels/1/2/42".to_string(),
    };

    let json = to_string(&source).expect("Failed to serialize message ref");
    let deserialized: MessageRef = from_str(&json).expect("Failed to deserialize message ref");

    assert_eq!(deserialized, source);
}

#[rstest]
#[case("bulk_invite:confirm", Some(ComponentAction::ConfirmBulkInvite))]
#[case("bulk_invite:cancel", Some(ComponentAction::CancelBulkInvite))]
#[case("match_yes", None)]
#[case("", None)]
fn test_component_lookup(#[case] custom_id: &str, #[case] expected: Option<ComponentAction>) {
    assert_eq!(ComponentAction::from_custom_id(custom_id), expected);
    assert_eq!(custom_id.parse::<ComponentAction>().ok(), expected);
}

#[test]
fn test_component_ids_are_distinct() {
    for action in ComponentAction::ALL {
        assert_eq!(ComponentAction::from_custom_id(action.custom_id()), Some(action));
        assert_eq!(action.to_string(), action.custom_id());
    }
}
