//! Quick-add popup actions

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuickAddAction {
    Char(char),
    Backspace,
    ClearLine,
    /// Add the typed title as a new course
    Confirm,
    Close,
}
