#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Navigation shell state: viewport class plus mobile-menu visibility.
///
/// `is_mobile` is owned by the handset breakpoint subscription; every
/// emission goes through [`NavState::apply_breakpoint`]. The menu flag is
/// dependent state: any non-mobile emission forces it closed, so the menu
/// can never stay open while the viewport is desktop-sized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub is_mobile: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Handle one breakpoint emission. Emissions are authoritative, not
    /// edge-triggered: a repeated non-mobile emission still closes the menu.
    pub fn apply_breakpoint(&mut self, is_mobile: bool) {
        self.is_mobile = is_mobile;
        if !is_mobile {
            self.menu_open = false;
        }
    }

    /// Flip the mobile menu unconditionally.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Close the menu, e.g. after following a navigation link.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
