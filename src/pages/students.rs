//! Student roster page with card and table layouts.

use leptos::prelude::*;

use crate::components::loading::LoadingIndicator;
use crate::state::roster::{self, RosterState, ViewMode};
use crate::util::view_mode;

#[cfg(feature = "hydrate")]
use crate::state::snackbar::SnackbarState;
#[cfg(feature = "hydrate")]
use crate::state::{LoadFailurePolicy, report_load_failure};

/// Roster load failures notify the user in addition to logging.
#[cfg(feature = "hydrate")]
const LOAD_FAILURE_POLICY: LoadFailurePolicy = LoadFailurePolicy::Notify;

/// Student roster page.
///
/// Loads the full collection once per activation. A failed load keeps
/// whatever was shown before instead of blanking the roster.
#[component]
pub fn StudentsPage() -> impl IntoView {
    let roster = RwSignal::new(RosterState {
        view_mode: view_mode::read_preference(),
        ..RosterState::default()
    });

    #[cfg(feature = "hydrate")]
    {
        let snackbar = expect_context::<RwSignal<SnackbarState>>();
        roster.update(RosterState::begin_load);
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_students().await {
                Ok(students) => {
                    let _ = roster.try_update(|state| state.apply_load(students));
                }
                Err(err) => {
                    report_load_failure(LOAD_FAILURE_POLICY, "students", &err, snackbar);
                    let _ = roster.try_update(RosterState::fail_load);
                }
            }
        });
    }

    let on_toggle = move |_| {
        roster.update(RosterState::toggle_view);
        view_mode::store_preference(roster.get().view_mode);
    };

    let toggle_label = move || match roster.get().view_mode {
        ViewMode::Cards => "Table View",
        ViewMode::Table => "Card View",
    };

    view! {
        <div class="students-page">
            <header class="students-page__header">
                <h1>"Students"</h1>
                <p class="students-page__summary">
                    {move || {
                        let state = roster.get();
                        format!(
                            "{} active, {} unique emails",
                            state.active_count(),
                            state.unique_email_count(),
                        )
                    }}
                </p>
                <button class="btn" on:click=on_toggle>{toggle_label}</button>
            </header>

            <Show
                when=move || !roster.get().loading
                fallback=|| view! { <LoadingIndicator message=String::from("Loading students...")/> }
            >
                {move || match roster.get().view_mode {
                    ViewMode::Cards => view! { <StudentCards roster=roster/> }.into_any(),
                    ViewMode::Table => view! { <StudentTable roster=roster/> }.into_any(),
                }}
            </Show>
        </div>
    }
}

/// Card layout.
#[component]
fn StudentCards(roster: RwSignal<RosterState>) -> impl IntoView {
    view! {
        {move || {
            let students = roster.get().students;
            if students.is_empty() {
                view! { <p class="students-page__empty">"No students found."</p> }.into_any()
            } else {
                view! {
                    <div class="students-page__cards">
                        {students
                            .into_iter()
                            .map(|student| {
                                view! {
                                    <div class="student-card">
                                        <span class="student-card__id">{format!("#{}", student.id)}</span>
                                        <span class="student-card__name">{student.name}</span>
                                        <span class="student-card__email">{student.email}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

/// Table layout using the extended column set.
#[component]
fn StudentTable(roster: RwSignal<RosterState>) -> impl IntoView {
    let columns = roster::columns(true);

    view! {
        <table class="students-page__table">
            <thead>
                <tr>
                    {columns
                        .iter()
                        .map(|column| view! { <th class="students-page__column">{*column}</th> })
                        .collect::<Vec<_>>()}
                </tr>
            </thead>
            <tbody>
                {move || {
                    roster
                        .get()
                        .students
                        .into_iter()
                        .map(|student| {
                            view! {
                                <tr>
                                    <td>{student.id}</td>
                                    <td>{student.name}</td>
                                    <td>{student.email}</td>
                                    <td class="students-page__actions">
                                        <button class="btn btn--small">"View"</button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
