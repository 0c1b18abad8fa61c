use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastState::default();
    let first = state.success("saved");
    let second = state.error("failed");
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastState::default();
    let first = state.success("one");
    let second = state.success("two");
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.success("keep");
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.success("one");
    state.dismiss(first);
    let second = state.success("two");
    assert_ne!(first, second);
}

#[test]
fn kinds_are_distinct() {
    let mut state = ToastState::default();
    state.success("ok");
    state.error("bad");
    assert_eq!(state.items[0].kind, ToastKind::Success);
    assert_eq!(state.items[1].kind, ToastKind::Error);
}
