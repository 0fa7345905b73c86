//! Roster view-mode persistence.
//!
//! Remembers the card/table preference in `localStorage` so the roster
//! reopens in the layout the user last chose. Requires a browser
//! environment; elsewhere reads return the default and writes are no-ops.

use crate::state::roster::ViewMode;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "institute_roster_view";

/// Read the stored view preference, defaulting to cards.
pub fn read_preference() -> ViewMode {
    #[cfg(feature = "hydrate")]
    {
        let stored = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
        match stored.as_deref() {
            Some("table") => ViewMode::Table,
            _ => ViewMode::Cards,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ViewMode::Cards
    }
}

/// Persist the view preference.
pub fn store_preference(mode: ViewMode) {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if let Some(storage) = storage {
            let value = match mode {
                ViewMode::Cards => "cards",
                ViewMode::Table => "table",
            };
            let _ = storage.set_item(STORAGE_KEY, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
