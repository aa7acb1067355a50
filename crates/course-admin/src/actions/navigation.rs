//! Navigation actions - shared across multiple screens
//!
//! Generic navigation actions that views translate into their
//! screen-specific actions.

/// Generic navigation actions (vim-style)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Next item (j, down arrow, Tab in forms)
    Next,
    /// Previous item (k, up arrow, Shift+Tab in forms)
    Previous,
    /// Left (h, left arrow)
    Left,
    /// Right (l, right arrow)
    Right,
    /// First item (gg)
    ToTop,
    /// Last item (G)
    ToBottom,
}
