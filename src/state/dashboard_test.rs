use super::*;

// =============================================================
// DashboardCounts defaults
// =============================================================

#[test]
fn counts_default_to_zero() {
    let counts = DashboardCounts::default();
    assert_eq!(counts.course_count, 0);
    assert_eq!(counts.student_count, 0);
    assert_eq!(counts.message_count, 0);
}

// =============================================================
// active_module_count
// =============================================================

#[test]
fn active_module_count_zero_when_all_empty() {
    assert_eq!(DashboardCounts::default().active_module_count(), 0);
}

#[test]
fn active_module_count_counts_nonzero_collections() {
    let counts = DashboardCounts {
        course_count: 3,
        student_count: 0,
        message_count: 5,
    };
    assert_eq!(counts.active_module_count(), 2);
}

#[test]
fn active_module_count_all_three() {
    let counts = DashboardCounts {
        course_count: 1,
        student_count: 1,
        message_count: 1,
    };
    assert_eq!(counts.active_module_count(), 3);
}

// =============================================================
// merge_loads (all-or-nothing join)
// =============================================================

#[test]
fn merge_loads_all_ok_takes_lengths() {
    let courses: Result<Vec<&str>, String> = Ok(vec!["a", "b"]);
    let students: Result<Vec<&str>, String> = Ok(vec!["x"]);
    let messages: Result<Vec<&str>, String> = Ok(vec![]);
    let merged = DashboardCounts::merge_loads(&courses, &students, &messages);
    assert_eq!(
        merged,
        Some(DashboardCounts {
            course_count: 2,
            student_count: 1,
            message_count: 0,
        })
    );
}

#[test]
fn merge_loads_voids_batch_when_any_read_fails() {
    let ok: Result<Vec<&str>, String> = Ok(vec!["a"]);
    let err: Result<Vec<&str>, String> = Err("boom".to_owned());
    assert_eq!(DashboardCounts::merge_loads(&err, &ok, &ok), None);
    assert_eq!(DashboardCounts::merge_loads(&ok, &err, &ok), None);
    assert_eq!(DashboardCounts::merge_loads(&ok, &ok, &err), None);
}

// =============================================================
// DashboardState load lifecycle
// =============================================================

#[test]
fn begin_load_sets_loading() {
    let mut state = DashboardState::default();
    state.begin_load();
    assert!(state.loading);
}

#[test]
fn finish_load_success_replaces_counts_wholesale() {
    let mut state = DashboardState::default();
    state.begin_load();
    state.finish_load(Some(DashboardCounts {
        course_count: 4,
        student_count: 9,
        message_count: 2,
    }));
    assert!(!state.loading);
    assert_eq!(state.counts.course_count, 4);
    assert_eq!(state.counts.student_count, 9);
    assert_eq!(state.counts.message_count, 2);
}

#[test]
fn finish_load_voided_batch_keeps_previous_counts() {
    let previous = DashboardCounts {
        course_count: 4,
        student_count: 9,
        message_count: 2,
    };
    let mut state = DashboardState {
        counts: previous,
        loading: false,
    };
    state.begin_load();
    state.finish_load(None);
    assert!(!state.loading);
    assert_eq!(state.counts, previous);
}

// =============================================================
// progress_width
// =============================================================

#[test]
fn progress_width_scales_to_percentage() {
    let width = progress_width(5, 10);
    assert!((width - 50.0).abs() < f64::EPSILON);
}

#[test]
fn progress_width_clamps_to_100() {
    let width = progress_width(150, 100);
    assert!((width - 100.0).abs() < f64::EPSILON);
}

#[test]
fn progress_width_zero_current_is_zero() {
    assert!(progress_width(0, 100).abs() < f64::EPSILON);
}

#[test]
fn progress_width_guards_zero_max() {
    assert!(progress_width(7, 0).abs() < f64::EPSILON);
}

#[test]
fn progress_width_monotonic_in_current() {
    let mut last = 0.0;
    for current in 0..=120 {
        let width = progress_width(current, 100);
        assert!(width >= last);
        last = width;
    }
}
