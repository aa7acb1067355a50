//! Key hint bar shown above the status bar

use crate::state::AppState;
use ratatui::style::Style;

#[derive(Debug, Clone)]
pub struct KeyHintViewModel {
    /// e.g. `"j/↓"`
    pub keys: String,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct KeyHintsViewModel {
    pub hints: Vec<KeyHintViewModel>,
    pub key_style: Style,
    pub label_style: Style,
    pub bg_style: Style,
}

impl KeyHintsViewModel {
    /// Hints for the current route's view; commands without a binding are skipped
    pub fn from_state(state: &AppState) -> Self {
        let hints = state
            .base_view()
            .map(|view| view.available_actions(state))
            .unwrap_or_default()
            .into_iter()
            .filter_map(|available| {
                let keys = state.keymap.compact_hint_for_command(available.command)?;
                Some(KeyHintViewModel {
                    keys,
                    label: available.label,
                })
            })
            .collect();

        let theme = &state.theme;
        Self {
            hints,
            key_style: theme.key_hint(),
            label_style: theme.key_description(),
            bg_style: theme.panel_background(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::CoursesView;

    #[test]
    fn test_course_list_hints() {
        let state = AppState {
            view_stack: vec![Box::new(CoursesView::new())],
            ..AppState::default()
        };
        let vm = KeyHintsViewModel::from_state(&state);
        assert!(vm.hints.iter().any(|h| h.keys == "a" && h.label == "quick add"));
        assert!(vm.hints.iter().any(|h| h.keys == "Ctrl+R"));
    }
}
