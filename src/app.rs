//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::NavigationBar;
use crate::components::snackbar::SnackbarHost;
use crate::pages::{
    about::AboutPage, contact::ContactPage, dashboard::DashboardPage, home::HomePage,
    students::StudentsPage,
};
use crate::state::nav::NavState;
use crate::state::snackbar::SnackbarState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared shell state (navigation, snackbar surface) and sets
/// up client-side routing. The navigation bar and the snackbar host render
/// once here, outside the routed outlet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(NavState::default());
    let snackbar = RwSignal::new(SnackbarState::default());
    provide_context(nav);
    provide_context(snackbar);

    view! {
        <Stylesheet id="leptos" href="/pkg/institute-ui.css"/>
        <Title text="Excellence Institute"/>

        <Router>
            <NavigationBar/>
            <main class="app__content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("students") view=StudentsPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <SnackbarHost/>
        </Router>
    }
}
