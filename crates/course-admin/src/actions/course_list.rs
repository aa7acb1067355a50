//! Course list screen actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseListAction {
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,
    /// Open the course under the cursor in the edit form
    EditSelected,
    /// Open the blank course form
    New,
    /// Open the quick-add popup
    QuickAdd,
    /// Delete the course under the cursor
    DeleteSelected,
    /// Fetch courses and authors again
    Reload,
}
