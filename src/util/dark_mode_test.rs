#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn stored_preference_takes_precedence_over_system_signal() {
    assert!(!preference_from(Some(false), true));
    assert!(preference_from(Some(true), false));
}

#[test]
fn system_signal_seeds_preference_when_nothing_stored() {
    assert!(preference_from(None, true));
    assert!(!preference_from(None, false));
}

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn has_stored_preference_is_false_in_non_hydrate_tests() {
    assert!(!has_stored_preference());
}

#[test]
fn system_prefers_dark_is_false_in_non_hydrate_tests() {
    assert!(!system_prefers_dark());
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}

#[test]
fn persist_is_noop_but_callable() {
    persist(false);
    persist(true);
}
