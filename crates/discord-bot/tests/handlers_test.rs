use betabot_core::models::ids::MemberId;
use betabot_discord_bot::handlers::{
    invite::{candidates_from_mentions, prompt_text},
    member::tester_role_granted,
    message::{is_image, is_moderator, is_sync_command},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serenity::model::id::{RoleId, UserId};

const TESTER: RoleId = RoleId(900);

#[test]
fn test_candidates_skip_bots_and_duplicates() {
    let mentions = vec![
        (UserId(3), false),
        (UserId(99), true),
        (UserId(1), false),
        (UserId(3), false),
    ];

    assert_eq!(candidates_from_mentions(mentions), vec![MemberId(3), MemberId(1)]);
}

#[test]
fn test_candidates_empty_when_only_bots() {
    assert!(candidates_from_mentions(vec![(UserId(99), true)]).is_empty());
}

#[test]
fn test_prompt_text() {
    assert_eq!(
        prompt_text(3, "https://discord.com/channels/1/2/3"),
        "Invite 3 members mentioned in https://discord.com/channels/1/2/3 to the beta?"
    );
}

#[rstest]
#[case(Some(&[][..]), &[TESTER][..], true)]
#[case(Some(&[RoleId(1)][..]), &[RoleId(1), TESTER][..], true)]
#[case(Some(&[TESTER][..]), &[TESTER, RoleId(1)][..], false)]
#[case(None, &[TESTER][..], true)]
#[case(None, &[RoleId(1)][..], false)]
#[case(Some(&[TESTER][..]), &[][..], false)]
fn test_tester_role_granted(
    #[case] old: Option<&[RoleId]>,
    #[case] new: &[RoleId],
    #[case] expected: bool,
) {
    assert_eq!(tester_role_granted(old, new, TESTER), expected);
}

#[rstest]
#[case("!sync", true)]
#[case("!sync  \n", true)]
#[case(" !sync", false)]
#[case("!sync now", false)]
#[case("!SYNC", false)]
fn test_sync_command(#[case] content: &str, #[case] expected: bool) {
    assert_eq!(is_sync_command(content), expected);
}

#[test]
fn test_is_moderator() {
    let moderator = RoleId(5);
    assert!(is_moderator(&[RoleId(1), moderator], moderator));
    assert!(!is_moderator(&[RoleId(1)], moderator));
    assert!(!is_moderator(&[], moderator));
}

#[rstest]
#[case(Some("image/png"), "shot.png", true)]
#[case(Some("image/webp"), "whatever.bin", true)]
#[case(Some("video/mp4"), "clip.mp4", false)]
#[case(Some("text/plain"), "notes.png", false)]
#[case(None, "Screenshot.PNG", true)]
#[case(None, "photo.jpeg", true)]
#[case(None, "archive.zip", false)]
#[case(None, "no_extension", false)]
fn test_is_image(#[case] content_type: Option<&str>, #[case] filename: &str, #[case] expected: bool) {
    assert_eq!(is_image(content_type, filename), expected);
}
