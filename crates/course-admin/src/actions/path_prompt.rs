//! Path prompt actions (type a route like `/course/clean-code`)

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPromptAction {
    Char(char),
    Backspace,
    ClearLine,
    /// Navigate to the typed path
    Confirm,
    Close,
}
