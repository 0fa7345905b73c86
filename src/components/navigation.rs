//! Top navigation bar with the responsive mobile menu.

use leptos::prelude::*;

use crate::state::nav::NavState;

/// Navigation shell rendered once at the application level.
///
/// Subscribes to the handset breakpoint for its lifetime; every emission
/// flows through [`NavState::apply_breakpoint`], so the mobile menu is
/// forced closed whenever the viewport reports non-mobile.
#[component]
pub fn NavigationBar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();

    // The subscription guard lives in the component's arena; teardown drops
    // it, which detaches the media-query listener.
    #[cfg(feature = "hydrate")]
    {
        let subscription = crate::util::breakpoint::subscribe(move |is_mobile| {
            let _ = nav.try_update(|state| state.apply_breakpoint(is_mobile));
        });
        let _guard = StoredValue::new_local(subscription);
    }

    let on_toggle = move |_| nav.update(NavState::toggle_menu);
    let on_link = move |_| nav.update(NavState::close_menu);

    let menu_class = move || {
        let state = nav.get();
        if !state.is_mobile {
            "nav__links"
        } else if state.menu_open {
            "nav__links nav__links--open"
        } else {
            "nav__links nav__links--collapsed"
        }
    };

    view! {
        <header class="nav">
            <a class="nav__brand" href="/" on:click=on_link>
                "Excellence Institute"
            </a>
            <Show when=move || nav.get().is_mobile>
                <button class="nav__toggle" aria-label="Toggle menu" on:click=on_toggle>
                    "☰"
                </button>
            </Show>
            <nav class=menu_class>
                <a class="nav__link" href="/" on:click=on_link>"Home"</a>
                <a class="nav__link" href="/about" on:click=on_link>"About"</a>
                <a class="nav__link" href="/dashboard" on:click=on_link>"Dashboard"</a>
                <a class="nav__link" href="/students" on:click=on_link>"Students"</a>
                <a class="nav__link" href="/contact" on:click=on_link>"Contact"</a>
            </nav>
        </header>
    }
}
