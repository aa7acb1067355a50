//! Available Action - an action the active view offers, shown as a footer hint.

use crate::command_id::CommandId;

/// An action available in the current view context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailableAction {
    /// The command that triggers this action (its key hint comes from the keymap)
    pub command: CommandId,
    /// Short label for display (e.g., "Edit", "Delete")
    pub label: &'static str,
}

impl AvailableAction {
    pub fn new(command: CommandId, label: &'static str) -> Self {
        Self { command, label }
    }
}
