use super::*;

fn student(id: i64, name: &str, email: &str) -> Student {
    Student {
        id,
        name: name.to_owned(),
        email: email.to_owned(),
    }
}

// =============================================================
// RosterState defaults
// =============================================================

#[test]
fn roster_default_empty_not_loading_cards() {
    let state = RosterState::default();
    assert!(state.students.is_empty());
    assert!(!state.loading);
    assert_eq!(state.view_mode, ViewMode::Cards);
}

// =============================================================
// Load lifecycle
// =============================================================

#[test]
fn apply_load_replaces_collection_wholesale() {
    let mut state = RosterState::default();
    state.apply_load(vec![student(1, "Ada", "ada@x")]);
    state.begin_load();
    assert!(state.loading);
    state.apply_load(vec![student(2, "Grace", "grace@x"), student(3, "Alan", "alan@x")]);
    assert!(!state.loading);
    assert_eq!(state.students.len(), 2);
    assert_eq!(state.students[0].id, 2);
}

#[test]
fn fail_load_retains_previous_students() {
    let mut state = RosterState::default();
    state.apply_load(vec![student(1, "Ada", "ada@x")]);
    state.begin_load();
    state.fail_load();
    assert!(!state.loading);
    assert_eq!(state.students.len(), 1);
    assert_eq!(state.students[0].name, "Ada");
}

// =============================================================
// Derived counts
// =============================================================

#[test]
fn active_count_is_total_size() {
    let mut state = RosterState::default();
    assert_eq!(state.active_count(), 0);
    state.apply_load(vec![student(1, "Ada", "ada@x"), student(2, "Grace", "grace@x")]);
    assert_eq!(state.active_count(), 2);
}

#[test]
fn unique_email_count_dedupes_exact_matches() {
    let mut state = RosterState::default();
    state.apply_load(vec![
        student(1, "Ada", "a@x"),
        student(2, "Grace", "a@x"),
        student(3, "Alan", "b@x"),
    ]);
    assert_eq!(state.unique_email_count(), 2);
}

#[test]
fn unique_email_count_is_case_sensitive() {
    let mut state = RosterState::default();
    state.apply_load(vec![student(1, "Ada", "a@x"), student(2, "Grace", "A@x")]);
    assert_eq!(state.unique_email_count(), 2);
}

// =============================================================
// ViewMode
// =============================================================

#[test]
fn toggle_view_flips_between_cards_and_table() {
    let mut state = RosterState::default();
    state.toggle_view();
    assert_eq!(state.view_mode, ViewMode::Table);
    state.toggle_view();
    assert_eq!(state.view_mode, ViewMode::Cards);
}

#[test]
fn toggle_view_leaves_data_untouched() {
    let mut state = RosterState::default();
    state.apply_load(vec![student(1, "Ada", "ada@x")]);
    state.toggle_view();
    assert_eq!(state.students.len(), 1);
}

// =============================================================
// Columns
// =============================================================

#[test]
fn columns_base_variant() {
    assert_eq!(columns(false), ["id", "name", "email"]);
}

#[test]
fn columns_extended_variant_appends_actions() {
    assert_eq!(columns(true), ["id", "name", "email", "actions"]);
}
