use super::*;

#[test]
fn submission_status_default_is_idle() {
    assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
}

#[test]
fn submission_status_variants_are_distinct() {
    assert_ne!(SubmissionStatus::Idle, SubmissionStatus::Loading);
    assert_ne!(SubmissionStatus::Loading, SubmissionStatus::Success);
    assert_ne!(SubmissionStatus::Success, SubmissionStatus::Error);
    assert_ne!(SubmissionStatus::Error, SubmissionStatus::Idle);
}

#[test]
fn normalized_link_input_trims_surrounding_whitespace() {
    assert_eq!(
        normalized_link_input("  https://youtu.be/dQw4w9WgXcQ  "),
        Some("https://youtu.be/dQw4w9WgXcQ".to_owned())
    );
}

#[test]
fn normalized_link_input_rejects_empty_and_blank() {
    assert_eq!(normalized_link_input(""), None);
    assert_eq!(normalized_link_input("   "), None);
}
