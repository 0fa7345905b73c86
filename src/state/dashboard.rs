#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Aggregate counts derived from the three backend collections.
///
/// Replaced wholesale by a successful aggregate load; never updated
/// partially.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardCounts {
    pub course_count: usize,
    pub student_count: usize,
    pub message_count: usize,
}

impl DashboardCounts {
    /// Number of the three collections holding at least one record (0–3).
    pub fn active_module_count(&self) -> usize {
        [self.course_count, self.student_count, self.message_count]
            .iter()
            .filter(|&&count| count > 0)
            .count()
    }

    /// All-or-nothing join of the three collection loads.
    ///
    /// Returns `None` if any load failed, in which case the previous counts
    /// stay in place.
    pub fn merge_loads<A, B, C, E>(
        courses: &Result<Vec<A>, E>,
        students: &Result<Vec<B>, E>,
        messages: &Result<Vec<C>, E>,
    ) -> Option<Self> {
        match (courses, students, messages) {
            (Ok(courses), Ok(students), Ok(messages)) => Some(Self {
                course_count: courses.len(),
                student_count: students.len(),
                message_count: messages.len(),
            }),
            _ => None,
        }
    }
}

/// Dashboard view state: the derived counts plus the load-in-flight flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct DashboardState {
    pub counts: DashboardCounts,
    pub loading: bool,
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of an aggregate load. A voided batch (`None`)
    /// leaves the counts untouched; both outcomes clear the loading flag.
    pub fn finish_load(&mut self, counts: Option<DashboardCounts>) {
        if let Some(counts) = counts {
            self.counts = counts;
        }
        self.loading = false;
    }
}

/// Percentage width for a dashboard progress bar, clamped to 100.
///
/// A zero `max` yields 0 rather than dividing by zero.
#[allow(clippy::cast_precision_loss)]
pub fn progress_width(current: usize, max: usize) -> f64 {
    if max == 0 {
        return 0.0;
    }
    (current as f64 / max as f64 * 100.0).min(100.0)
}
