//! KeyboardMiddleware - turns key presses into actions
//!
//! Keys are resolved in three layers:
//!
//! 1. **Priority keys** work everywhere: Ctrl+C quits, Esc cancels the
//!    active text input or closes the top popup.
//! 2. **Capabilities**: a view with `TEXT_INPUT` receives typed characters,
//!    Backspace, Enter and Tab as generic text-input/navigation actions.
//! 3. **Keymap + gating**: everything else is looked up in the keymap and
//!    only dispatched if the active view accepts the resulting action.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::actions::{Action, GlobalAction, NavigationAction, TextInputAction};
use crate::dispatcher::Dispatcher;
use crate::keybindings::PendingKey;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct KeyboardMiddleware {
    /// First key of a two-key sequence
    pending_key: Option<PendingKey>,
}

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self { pending_key: None }
    }

    fn handle_key(&mut self, key: KeyEvent, state: &AppState, dispatcher: &Dispatcher) {
        let view = state.active_view();
        let capabilities = view.map(|v| v.capabilities(state)).unwrap_or_default();

        // Layer 1: priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - quitting");
            dispatcher.dispatch(Action::Global(GlobalAction::Quit));
            return;
        }

        if key.code == KeyCode::Esc {
            self.pending_key = None;
            if capabilities.accepts_text_input() {
                dispatcher.dispatch(Action::TextInput(TextInputAction::Escape));
            } else if state.view_stack.len() > 1 {
                dispatcher.dispatch(Action::Global(GlobalAction::Close));
            }
            return;
        }

        // Layer 2: capability-based routing
        if capabilities.accepts_text_input() {
            self.pending_key = None;
            if let Some(action) = text_input_action(&key, capabilities.supports_item_navigation()) {
                log::debug!("Layer 2: TEXT_INPUT - {:?}", action);
                dispatcher.dispatch(action);
                return;
            }
        }

        // Layer 3: keymap lookup + gating
        let matched = state.keymap.match_key(&key, self.pending_key.as_ref());
        self.pending_key = matched.pending.map(PendingKey::new);
        if let Some(first) = matched.pending {
            log::debug!("Layer 3: waiting for second key after '{}'", first);
            return;
        }

        for command in matched.commands {
            let action = command.to_action();
            match view {
                Some(view) if !view.accepts_action(&action) => {
                    log::debug!(
                        "Layer 3: {:?} rejected by {:?}, trying next",
                        command,
                        view.view_id()
                    );
                }
                _ => {
                    log::debug!("Layer 3: dispatching {:?}", command);
                    dispatcher.dispatch(action);
                    return;
                }
            }
        }
    }
}

/// Keys a text-input view handles itself
fn text_input_action(key: &KeyEvent, item_navigation: bool) -> Option<Action> {
    let ctrl_or_alt = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    let action = match key.code {
        KeyCode::Char(c) if !ctrl_or_alt => Action::TextInput(TextInputAction::Char(c)),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::TextInput(TextInputAction::ClearLine)
        }
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::SUPER) => {
            Action::TextInput(TextInputAction::ClearLine)
        }
        KeyCode::Backspace => Action::TextInput(TextInputAction::Backspace),
        KeyCode::Enter => Action::TextInput(TextInputAction::Confirm),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Action::Navigate(NavigationAction::Previous)
        }
        KeyCode::Tab => Action::Navigate(NavigationAction::Next),
        KeyCode::BackTab => Action::Navigate(NavigationAction::Previous),
        KeyCode::Down if item_navigation => Action::Navigate(NavigationAction::Next),
        KeyCode::Up if item_navigation => Action::Navigate(NavigationAction::Previous),
        _ => return None,
    };
    Some(action)
}

impl Default for KeyboardMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Global(GlobalAction::KeyPressed(key)) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            self.handle_key(*key, state, dispatcher);
            // Key presses never reach the reducer
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ContextAction, CourseListAction};
    use crate::middleware::test_support::{drain, recording_dispatcher};
    use crate::routes::Route;
    use crate::views::{CoursesView, QuickAddCourseView};

    fn key(code: KeyCode) -> Action {
        Action::Global(GlobalAction::KeyPressed(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn courses_state() -> AppState {
        AppState {
            view_stack: vec![Box::new(CoursesView::new())],
            ..AppState::default()
        }
    }

    fn quick_add_state() -> AppState {
        let mut state = courses_state();
        state.view_stack.push(Box::new(QuickAddCourseView::new()));
        state
    }

    #[test]
    fn test_key_presses_are_consumed() {
        let (dispatcher, _rx) = recording_dispatcher();
        let mut middleware = KeyboardMiddleware::new();
        assert!(!middleware.handle(&key(KeyCode::Char('z')), &courses_state(), &dispatcher));
        assert!(middleware.handle(&Action::None, &courses_state(), &dispatcher));
    }

    #[test]
    fn test_keymap_commands_reach_the_list() {
        let (dispatcher, rx) = recording_dispatcher();
        let mut middleware = KeyboardMiddleware::new();
        let state = courses_state();

        middleware.handle(&key(KeyCode::Char('a')), &state, &dispatcher);
        middleware.handle(&key(KeyCode::Char('2')), &state, &dispatcher);
        middleware.handle(&key(KeyCode::Enter), &state, &dispatcher);

        let actions = drain(&rx);
        assert!(matches!(
            actions[0],
            Action::CourseList(CourseListAction::QuickAdd)
        ));
        assert!(matches!(actions[1], Action::Route(Route::Courses)));
        assert!(matches!(
            actions[2],
            Action::ViewContext(ContextAction::Confirm)
        ));
    }

    #[test]
    fn test_text_input_view_gets_characters() {
        let (dispatcher, rx) = recording_dispatcher();
        let mut middleware = KeyboardMiddleware::new();
        let state = quick_add_state();

        // 'a' would open another quick-add popup if it reached the keymap
        middleware.handle(&key(KeyCode::Char('a')), &state, &dispatcher);
        middleware.handle(&key(KeyCode::Enter), &state, &dispatcher);
        middleware.handle(&key(KeyCode::Esc), &state, &dispatcher);

        let actions = drain(&rx);
        assert!(matches!(
            actions[0],
            Action::TextInput(TextInputAction::Char('a'))
        ));
        assert!(matches!(
            actions[1],
            Action::TextInput(TextInputAction::Confirm)
        ));
        assert!(matches!(
            actions[2],
            Action::TextInput(TextInputAction::Escape)
        ));
    }

    #[test]
    fn test_esc_on_base_view_does_nothing() {
        let (dispatcher, rx) = recording_dispatcher();
        let mut middleware = KeyboardMiddleware::new();
        middleware.handle(&key(KeyCode::Esc), &courses_state(), &dispatcher);
        assert!(drain(&rx).is_empty());
    }

    #[test]
    fn test_two_key_sequence() {
        let (dispatcher, rx) = recording_dispatcher();
        let mut middleware = KeyboardMiddleware::new();
        let state = courses_state();

        middleware.handle(&key(KeyCode::Char('g')), &state, &dispatcher);
        assert!(drain(&rx).is_empty());
        middleware.handle(&key(KeyCode::Char('g')), &state, &dispatcher);

        let actions = drain(&rx);
        assert_eq!(actions.len(), 1);
        assert!(matches!(
            actions[0],
            Action::Navigate(NavigationAction::ToTop)
        ));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let (dispatcher, rx) = recording_dispatcher();
        let mut middleware = KeyboardMiddleware::new();
        let ctrl_c = Action::Global(GlobalAction::KeyPressed(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        middleware.handle(&ctrl_c, &quick_add_state(), &dispatcher);
        assert!(matches!(
            drain(&rx)[..],
            [Action::Global(GlobalAction::Quit)]
        ));
    }
}
