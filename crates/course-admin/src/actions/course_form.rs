//! Manage-course form actions

use crate::state::FieldErrors;

/// Direction for cycling through the author choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseFormAction {
    /// Start editing: `None` opens a blank form, `Some(slug)` an existing course
    Open { slug: Option<String> },
    Char(char),
    Backspace,
    ClearField,
    NextField,
    PrevField,
    /// Pick the next/previous author (author field only)
    CycleAuthor(Cycle),
    /// Submit the draft for validation
    Submit,
    /// Validation found problems; back to editing
    ValidationFailed(FieldErrors),
    /// Validation passed; the save call is on its way
    ValidationPassed,
    /// Fetch the data the form depends on again
    Reload,
    /// Leave the form without saving
    Cancel,
}
