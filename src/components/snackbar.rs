//! Snackbar host rendering the current transient notification.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::snackbar::SnackbarState;

/// Renders the active snackbar and owns its auto-dismiss timer.
///
/// The timer is keyed by show id, so an expiry firing for a snackbar that
/// was already replaced or closed does nothing. Invoking the action closes
/// the snackbar and routes to its navigation target, if it has one.
#[component]
pub fn SnackbarHost() -> impl IntoView {
    let snackbar = expect_context::<RwSignal<SnackbarState>>();
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let shown = snackbar.with(|state| {
            state
                .current()
                .map(|active| (active.id, active.request.duration_ms))
        });
        let Some((id, duration_ms)) = shown else {
            return;
        };
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(duration_ms)))
                .await;
            let _ = snackbar.try_update(|state| state.expire(id));
        });
    });

    let on_action = move |id: u64| {
        if let Some(Some(action)) = snackbar.try_update(|state| state.invoke_action(id)) {
            if let Some(route) = action.navigate_to {
                navigate(&route, NavigateOptions::default());
            }
        }
    };

    view! {
        {move || {
            snackbar.get().current().cloned().map(|active| {
                let id = active.id;
                let class = format!("snackbar snackbar--{}", active.request.style.css_class());
                let on_action = on_action.clone();
                view! {
                    <div class=class>
                        <span class="snackbar__message">{active.request.message}</span>
                        {active.request.action.map(|action| {
                            view! {
                                <button class="snackbar__action" on:click=move |_| on_action(id)>
                                    {action.label}
                                </button>
                            }
                        })}
                    </div>
                }
            })
        }}
    }
}
