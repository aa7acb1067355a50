//! Single-line popup inputs

/// Quick-add popup: only a title
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickAddState {
    pub title: String,
}

/// Path prompt popup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathPromptState {
    pub input: String,
}
