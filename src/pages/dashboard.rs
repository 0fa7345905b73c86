//! Dashboard page aggregating counts from the three backend collections.

use leptos::prelude::*;

use crate::components::loading::LoadingIndicator;
use crate::state::dashboard::{DashboardState, progress_width};

#[cfg(feature = "hydrate")]
use crate::state::dashboard::DashboardCounts;
#[cfg(feature = "hydrate")]
use crate::state::snackbar::SnackbarState;
#[cfg(feature = "hydrate")]
use crate::state::{LoadFailurePolicy, report_load_failure};

/// A failed batch voids all three counts and degrades silently.
#[cfg(feature = "hydrate")]
const LOAD_FAILURE_POLICY: LoadFailurePolicy = LoadFailurePolicy::Silent;

/// Dashboard page.
///
/// On activation the three collection reads are dispatched concurrently and
/// joined all-or-nothing: counts only change when every read succeeds.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());

    #[cfg(feature = "hydrate")]
    {
        let snackbar = expect_context::<RwSignal<SnackbarState>>();
        state.update(DashboardState::begin_load);
        leptos::task::spawn_local(async move {
            let (courses, students, messages) = futures::join!(
                crate::net::api::fetch_courses(),
                crate::net::api::fetch_students(),
                crate::net::api::fetch_messages(),
            );
            let merged = DashboardCounts::merge_loads(&courses, &students, &messages);
            if merged.is_none() {
                let detail = [courses.err(), students.err(), messages.err()]
                    .into_iter()
                    .flatten()
                    .collect::<Vec<_>>()
                    .join("; ");
                report_load_failure(LOAD_FAILURE_POLICY, "dashboard counts", &detail, snackbar);
            }
            let _ = state.try_update(|s| s.finish_load(merged));
        });
    }

    let counts = move || state.get().counts;
    // Bars are relative to the largest collection so the busiest module
    // reads as full.
    let max_count = move || {
        let c = counts();
        c.course_count.max(c.student_count).max(c.message_count)
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <p class="dashboard-page__active">
                    {move || format!("{} of 3 modules active", counts().active_module_count())}
                </p>
            </header>

            <Show
                when=move || !state.get().loading
                fallback=|| view! { <LoadingIndicator message=String::from("Loading dashboard...")/> }
            >
                <div class="dashboard-page__cards">
                    <SummaryCard
                        label="Courses"
                        count=Signal::derive(move || counts().course_count)
                        max=Signal::derive(max_count)
                    />
                    <SummaryCard
                        label="Students"
                        count=Signal::derive(move || counts().student_count)
                        max=Signal::derive(max_count)
                    />
                    <SummaryCard
                        label="Messages"
                        count=Signal::derive(move || counts().message_count)
                        max=Signal::derive(max_count)
                    />
                </div>
            </Show>
        </div>
    }
}

/// One collection summary: label, count, and a relative progress bar.
#[component]
fn SummaryCard(label: &'static str, count: Signal<usize>, max: Signal<usize>) -> impl IntoView {
    view! {
        <div class="summary-card">
            <span class="summary-card__label">{label}</span>
            <span class="summary-card__count">{move || count.get()}</span>
            <div class="summary-card__track">
                <div
                    class="summary-card__bar"
                    style:width=move || format!("{}%", progress_width(count.get(), max.get()))
                ></div>
            </div>
        </div>
    }
}
