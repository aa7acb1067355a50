//! Course list screen state

/// Cursor position in the course list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CourseListState {
    pub selected: usize,
}

impl CourseListState {
    /// Keep the cursor inside a list of `len` rows
    pub fn clamped(self, len: usize) -> Self {
        Self {
            selected: self.selected.min(len.saturating_sub(1)),
        }
    }
}
