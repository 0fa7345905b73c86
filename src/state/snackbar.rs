#[cfg(test)]
#[path = "snackbar_test.rs"]
mod snackbar_test;

/// Auto-dismiss duration for failure snackbars, in milliseconds.
pub const FAILURE_DURATION_MS: u32 = 3000;

/// Visual treatment of a snackbar, mapped to a CSS modifier class by the
/// host component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SnackbarStyle {
    #[default]
    Info,
    Success,
    Failure,
}

impl SnackbarStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

/// Optional user-invocable action on a snackbar.
///
/// The action is data, not a closure: invoking it closes the snackbar and,
/// when `navigate_to` is set, the host routes there. A label with no target
/// is a plain dismiss button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnackbarAction {
    pub label: String,
    pub navigate_to: Option<String>,
}

/// One request to show a transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnackbarRequest {
    pub message: String,
    pub action: Option<SnackbarAction>,
    pub duration_ms: u32,
    pub style: SnackbarStyle,
}

impl SnackbarRequest {
    pub fn info(message: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            message: message.into(),
            action: None,
            duration_ms,
            style: SnackbarStyle::Info,
        }
    }

    pub fn success(message: impl Into<String>, duration_ms: u32) -> Self {
        Self {
            style: SnackbarStyle::Success,
            ..Self::info(message, duration_ms)
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            style: SnackbarStyle::Failure,
            ..Self::info(message, FAILURE_DURATION_MS)
        }
    }

    #[must_use]
    pub fn with_action(mut self, label: impl Into<String>, navigate_to: Option<String>) -> Self {
        self.action = Some(SnackbarAction {
            label: label.into(),
            navigate_to,
        });
        self
    }
}

/// The snackbar currently on screen, tagged with its show id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSnackbar {
    pub id: u64,
    pub request: SnackbarRequest,
}

/// Single-slot snackbar state machine.
///
/// Showing replaces whatever is on screen and hands back a monotonic id.
/// Expiry and action invocation are keyed by that id, so a timer firing for
/// a snackbar that was already replaced or closed is a no-op, and an action
/// can run at most once.
#[derive(Clone, Debug, Default)]
pub struct SnackbarState {
    next_id: u64,
    current: Option<ActiveSnackbar>,
}

impl SnackbarState {
    pub fn current(&self) -> Option<&ActiveSnackbar> {
        self.current.as_ref()
    }

    /// Display `request`, replacing any current snackbar.
    pub fn show(&mut self, request: SnackbarRequest) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(ActiveSnackbar { id, request });
        id
    }

    /// Timer expiry for show `id`. Stale ids leave the current snackbar
    /// alone.
    pub fn expire(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|active| active.id == id) {
            self.current = None;
        }
    }

    /// Invoke the action of show `id`, if it is still on screen and carries
    /// one. Closes the snackbar and returns the action for the caller to
    /// perform; any later invocation or expiry for the same id is a no-op.
    pub fn invoke_action(&mut self, id: u64) -> Option<SnackbarAction> {
        match self.current.take() {
            Some(active) if active.id == id && active.request.action.is_some() => {
                active.request.action
            }
            other => {
                self.current = other;
                None
            }
        }
    }
}
