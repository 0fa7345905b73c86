//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`dashboard`, `nav`, `roster`, `snackbar`) so
//! individual components can depend on small focused models. Everything in
//! here is plain data with pure operations; signals wrap these structs at
//! the component layer, which keeps the behavior testable off-browser.

use leptos::prelude::*;

use self::snackbar::{SnackbarRequest, SnackbarState};

pub mod dashboard;
pub mod nav;
pub mod roster;
pub mod snackbar;

/// What a component does, beyond logging, when one of its collection loads
/// fails.
///
/// The policy is declared per component as a const rather than chosen at
/// each call site, so the silent-vs-visible asymmetry between views stays
/// deliberate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadFailurePolicy {
    /// Log only; the view keeps showing stale or default data.
    Silent,
    /// Log and raise a transient failure snackbar.
    Notify,
}

/// Report one failed collection load.
///
/// Always logs to the console sink; under [`LoadFailurePolicy::Notify`] it
/// additionally raises an "Error loading {what}" failure snackbar. Never
/// retries and never propagates.
pub fn report_load_failure(
    policy: LoadFailurePolicy,
    what: &str,
    detail: &str,
    snackbar: RwSignal<SnackbarState>,
) {
    leptos::logging::error!("failed to load {what}: {detail}");
    if policy == LoadFailurePolicy::Notify {
        let _ = snackbar.try_update(|state| {
            state.show(SnackbarRequest::failure(format!("Error loading {what}")));
        });
    }
}
