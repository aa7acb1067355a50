//! Context-sensitive actions
//!
//! Semantic actions that views interpret differently. `Confirm` (Enter) edits
//! the selected course in the course list and follows the highlighted link on
//! the home screen.

/// Semantic actions that views interpret differently.
///
/// Each view translates them via `translate_context_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextAction {
    /// Primary action on focused item (Enter key)
    Confirm,
    /// Remove the focused item (d)
    Delete,
    /// Reload data shown by the view (Ctrl+R)
    Refresh,
}
