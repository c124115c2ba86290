use super::*;

#[test]
fn toast_state_default_is_empty() {
    let state = ToastState::default();
    assert_eq!(state.kind(), None);
    assert_eq!(state.message(), None);
    assert_eq!(state.seq(), 0);
}

#[test]
fn show_sets_current_toast_and_bumps_seq() {
    let mut state = ToastState::default();
    state.show(ToastKind::Loading, "Processing download...");
    assert_eq!(state.kind(), Some(ToastKind::Loading));
    assert_eq!(state.message().as_deref(), Some("Processing download..."));
    assert_eq!(state.seq(), 1);
}

#[test]
fn show_replaces_previous_toast() {
    let mut state = ToastState::default();
    state.show(ToastKind::Loading, "Processing download...");
    state.show(ToastKind::Success, "Download started!");
    assert_eq!(state.kind(), Some(ToastKind::Success));
    assert_eq!(state.message().as_deref(), Some("Download started!"));
    assert_eq!(state.seq(), 2);
}

#[test]
fn dismiss_clears_current_without_bumping_seq() {
    let mut state = ToastState::default();
    state.show(ToastKind::Error, "Could not fetch that track.");
    state.dismiss();
    assert_eq!(state.kind(), None);
    assert_eq!(state.seq(), 1);
}

#[test]
fn toast_kind_variants_are_distinct() {
    assert_ne!(ToastKind::Loading, ToastKind::Success);
    assert_ne!(ToastKind::Loading, ToastKind::Error);
    assert_ne!(ToastKind::Success, ToastKind::Error);
}
