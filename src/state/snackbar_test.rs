use super::*;

fn contact_request() -> SnackbarRequest {
    SnackbarRequest::info("Full Stack Web Development: build modern web apps.", 8000)
        .with_action("Contact Us", Some("/contact?course=x&action=learn-more".to_owned()))
}

// =============================================================
// Request constructors
// =============================================================

#[test]
fn info_request_has_no_action() {
    let request = SnackbarRequest::info("hello", 2000);
    assert_eq!(request.duration_ms, 2000);
    assert_eq!(request.style, SnackbarStyle::Info);
    assert!(request.action.is_none());
}

#[test]
fn failure_request_uses_fixed_duration() {
    let request = SnackbarRequest::failure("Error loading students");
    assert_eq!(request.duration_ms, FAILURE_DURATION_MS);
    assert_eq!(request.style, SnackbarStyle::Failure);
}

#[test]
fn with_action_attaches_label_and_target() {
    let request = contact_request();
    let action = request.action.expect("action");
    assert_eq!(action.label, "Contact Us");
    assert!(action.navigate_to.is_some());
}

// =============================================================
// show / expire
// =============================================================

#[test]
fn show_returns_monotonic_ids() {
    let mut state = SnackbarState::default();
    let first = state.show(SnackbarRequest::info("one", 1000));
    let second = state.show(SnackbarRequest::info("two", 1000));
    assert!(second > first);
    assert_eq!(state.current().map(|a| a.id), Some(second));
}

#[test]
fn show_replaces_current_snackbar() {
    let mut state = SnackbarState::default();
    state.show(SnackbarRequest::info("one", 1000));
    state.show(SnackbarRequest::info("two", 1000));
    assert_eq!(state.current().map(|a| a.request.message.as_str()), Some("two"));
}

#[test]
fn expire_closes_matching_snackbar() {
    let mut state = SnackbarState::default();
    let id = state.show(SnackbarRequest::info("one", 1000));
    state.expire(id);
    assert!(state.current().is_none());
}

#[test]
fn expire_with_stale_id_is_noop() {
    let mut state = SnackbarState::default();
    let first = state.show(SnackbarRequest::info("one", 1000));
    let second = state.show(SnackbarRequest::info("two", 1000));
    state.expire(first);
    assert_eq!(state.current().map(|a| a.id), Some(second));
}

// =============================================================
// invoke_action
// =============================================================

#[test]
fn invoke_action_closes_and_returns_action() {
    let mut state = SnackbarState::default();
    let id = state.show(contact_request());
    let action = state.invoke_action(id).expect("action");
    assert_eq!(action.label, "Contact Us");
    assert!(state.current().is_none());
}

#[test]
fn invoke_action_runs_at_most_once() {
    let mut state = SnackbarState::default();
    let id = state.show(contact_request());
    assert!(state.invoke_action(id).is_some());
    assert!(state.invoke_action(id).is_none());
}

#[test]
fn invoke_action_after_expiry_is_noop() {
    let mut state = SnackbarState::default();
    let id = state.show(contact_request());
    state.expire(id);
    assert!(state.invoke_action(id).is_none());
}

#[test]
fn invoke_action_after_replacement_is_noop() {
    let mut state = SnackbarState::default();
    let first = state.show(contact_request());
    let second = state.show(SnackbarRequest::info("newer", 1000));
    assert!(state.invoke_action(first).is_none());
    assert_eq!(state.current().map(|a| a.id), Some(second));
}

#[test]
fn invoke_action_without_action_keeps_snackbar() {
    let mut state = SnackbarState::default();
    let id = state.show(SnackbarRequest::info("plain", 1000));
    assert!(state.invoke_action(id).is_none());
    assert_eq!(state.current().map(|a| a.id), Some(id));
}
