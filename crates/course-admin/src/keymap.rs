pub use crate::{
    command_id::CommandId,
    keybindings::{KeyBinding, Keymap},
};

/// Get the default keymap
pub fn default_keymap() -> Keymap {
    use CommandId::*;

    let bindings = vec![
        // Navigation
        KeyBinding::new("j", "j", NavigateNext),
        KeyBinding::new("down", "↓", NavigateNext),
        KeyBinding::new("k", "k", NavigatePrevious),
        KeyBinding::new("up", "↑", NavigatePrevious),
        KeyBinding::new("h", "h", NavigateLeft),
        KeyBinding::new("left", "←", NavigateLeft),
        KeyBinding::new("l", "l", NavigateRight),
        KeyBinding::new("right", "→", NavigateRight),
        KeyBinding::new("g g", "gg", NavigateToTop),
        KeyBinding::new("G", "G", NavigateToBottom),
        // Context
        KeyBinding::new("enter", "Enter", Confirm),
        KeyBinding::new("d", "d", Delete),
        KeyBinding::new("ctrl+r", "Ctrl+R", Refresh),
        // Courses
        KeyBinding::new("n", "n", CourseNew),
        KeyBinding::new("a", "a", CourseQuickAdd),
        // Routes
        KeyBinding::new("1", "1", GoHome),
        KeyBinding::new("2", "2", GoCourses),
        KeyBinding::new("3", "3", GoAbout),
        KeyBinding::new(":", ":", PathPromptOpen),
        KeyBinding::new("g o", "g o", PathPromptOpen),
        // General
        KeyBinding::new("q", "q", GlobalClose),
        KeyBinding::new("ctrl+c", "Ctrl+C", GlobalQuit),
    ];

    Keymap::new(bindings)
}
