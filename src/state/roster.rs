#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use std::collections::HashSet;

use crate::net::types::Student;

/// How the student roster is laid out. Presentation-only: toggling never
/// touches the loaded collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Cards,
    Table,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Cards => Self::Table,
            Self::Table => Self::Cards,
        }
    }
}

/// Columns shown by the tabular layout.
pub const BASE_COLUMNS: [&str; 3] = ["id", "name", "email"];
/// Tabular columns including the trailing per-row actions cell.
pub const EXTENDED_COLUMNS: [&str; 4] = ["id", "name", "email", "actions"];

/// Column identifiers for the table layout. Which variant a template asks
/// for is the template's concern.
pub fn columns(with_actions: bool) -> &'static [&'static str] {
    if with_actions {
        &EXTENDED_COLUMNS
    } else {
        &BASE_COLUMNS
    }
}

/// Student roster state: the loaded collection, the load-in-flight flag,
/// and the card/table layout toggle.
#[derive(Clone, Debug, Default)]
pub struct RosterState {
    pub students: Vec<Student>,
    pub loading: bool,
    pub view_mode: ViewMode,
}

impl RosterState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the collection wholesale with a successful read.
    pub fn apply_load(&mut self, students: Vec<Student>) {
        self.students = students;
        self.loading = false;
    }

    /// Failed read: clear the loading flag and retain whatever was loaded
    /// before, rather than blanking the view.
    pub fn fail_load(&mut self) {
        self.loading = false;
    }

    /// Total roster size.
    ///
    /// TODO: filter by an activity attribute once the backend grows one;
    /// today every loaded student counts as active.
    pub fn active_count(&self) -> usize {
        self.students.len()
    }

    /// Number of distinct `email` values, compared case-sensitively with no
    /// normalization.
    pub fn unique_email_count(&self) -> usize {
        self.students
            .iter()
            .map(|student| student.email.as_str())
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }
}
