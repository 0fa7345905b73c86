//! Loading indicator shown while a collection read is outstanding.

use leptos::prelude::*;

/// Inline spinner with a caption.
#[component]
pub fn LoadingIndicator(message: String) -> impl IntoView {
    view! {
        <div class="loading">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__message">{message}</span>
        </div>
    }
}
