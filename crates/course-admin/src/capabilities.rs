//! Panel capability system
//!
//! Views declare capabilities so the keyboard middleware can route keys
//! without knowing about concrete views.

use bitflags::bitflags;

bitflags! {
    /// Capabilities that a view can declare
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PanelCapabilities: u32 {
        /// View owns a text field: character keys are typed, not looked up
        const TEXT_INPUT = 1 << 0;

        /// View can move between items (rows, form fields) with arrow keys
        const ITEM_NAVIGATION = 1 << 1;
    }
}

impl PanelCapabilities {
    pub fn accepts_text_input(self) -> bool {
        self.contains(Self::TEXT_INPUT)
    }

    pub fn supports_item_navigation(self) -> bool {
        self.contains(Self::ITEM_NAVIGATION)
    }
}

impl Default for PanelCapabilities {
    fn default() -> Self {
        Self::empty()
    }
}
