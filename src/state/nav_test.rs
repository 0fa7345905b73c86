use super::*;

// =============================================================
// NavState defaults
// =============================================================

#[test]
fn nav_state_default_desktop_menu_closed() {
    let state = NavState::default();
    assert!(!state.is_mobile);
    assert!(!state.menu_open);
}

// =============================================================
// toggle_menu
// =============================================================

#[test]
fn toggle_menu_flips_flag() {
    let mut state = NavState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn toggle_menu_has_effect_even_on_desktop() {
    let mut state = NavState {
        is_mobile: false,
        menu_open: false,
    };
    state.toggle_menu();
    assert!(state.menu_open);
}

// =============================================================
// apply_breakpoint
// =============================================================

#[test]
fn mobile_emission_preserves_menu_state() {
    let mut state = NavState {
        is_mobile: true,
        menu_open: true,
    };
    state.apply_breakpoint(true);
    assert!(state.is_mobile);
    assert!(state.menu_open);
}

#[test]
fn desktop_emission_forces_menu_closed() {
    let mut state = NavState::default();
    state.apply_breakpoint(true);
    state.apply_breakpoint(true);
    state.toggle_menu();
    assert!(state.menu_open);
    state.apply_breakpoint(false);
    assert!(!state.is_mobile);
    assert!(!state.menu_open);
}

#[test]
fn repeated_desktop_emission_undoes_errant_manual_open() {
    let mut state = NavState::default();
    state.apply_breakpoint(false);
    state.toggle_menu();
    assert!(state.menu_open);
    // The viewport was already desktop; the next emission still resets.
    state.apply_breakpoint(false);
    assert!(!state.menu_open);
}

#[test]
fn close_menu_is_idempotent() {
    let mut state = NavState {
        is_mobile: true,
        menu_open: true,
    };
    state.close_menu();
    assert!(!state.menu_open);
    state.close_menu();
    assert!(!state.menu_open);
}
