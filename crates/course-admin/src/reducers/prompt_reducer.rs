//! Quick-add and path prompt reducers
//!
//! Both popups are single-line inputs. `Close` and `Confirm` reset the
//! input: a confirmed title or path is consumed right away, so a second
//! `Confirm` cannot act on it twice.

use crate::actions::{Action, PathPromptAction, QuickAddAction};
use crate::state::{PathPromptState, QuickAddState};

pub fn reduce_quick_add(mut state: QuickAddState, action: &Action) -> QuickAddState {
    if let Action::QuickAdd(action) = action {
        match action {
            QuickAddAction::Char(c) => state.title.push(*c),
            QuickAddAction::Backspace => {
                state.title.pop();
            }
            QuickAddAction::ClearLine => state.title.clear(),
            QuickAddAction::Close | QuickAddAction::Confirm => state = QuickAddState::default(),
        }
    }
    state
}

pub fn reduce_path_prompt(mut state: PathPromptState, action: &Action) -> PathPromptState {
    if let Action::PathPrompt(action) = action {
        match action {
            PathPromptAction::Char(c) => state.input.push(*c),
            PathPromptAction::Backspace => {
                state.input.pop();
            }
            PathPromptAction::ClearLine => state.input.clear(),
            PathPromptAction::Close | PathPromptAction::Confirm => {
                state = PathPromptState::default()
            }
        }
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_add_typing() {
        let state = [
            QuickAddAction::Char('R'),
            QuickAddAction::Char('s'),
            QuickAddAction::Backspace,
            QuickAddAction::Char('u'),
        ]
        .into_iter()
        .fold(QuickAddState::default(), |s, a| {
            reduce_quick_add(s, &Action::QuickAdd(a))
        });
        assert_eq!(state.title, "Ru");

        let state = reduce_quick_add(state, &Action::QuickAdd(QuickAddAction::Close));
        assert_eq!(state, QuickAddState::default());
    }

    #[test]
    fn test_quick_add_confirm_consumes_title() {
        let state = QuickAddState {
            title: "Rust".to_string(),
        };
        let state = reduce_quick_add(state, &Action::QuickAdd(QuickAddAction::Confirm));
        assert!(state.title.is_empty());
    }

    #[test]
    fn test_path_prompt_clear_line() {
        let state = PathPromptState {
            input: "/cour".to_string(),
        };
        let state = reduce_path_prompt(state, &Action::PathPrompt(PathPromptAction::ClearLine));
        assert!(state.input.is_empty());
    }
}
