//! Navigation Translation Middleware
//!
//! Translates generic `Navigate` and `ViewContext` actions into
//! screen-specific actions using the active view. Translated actions are
//! dispatched so they pass through the whole chain.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

pub struct NavigationMiddleware;

impl NavigationMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NavigationMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for NavigationMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let translated = match (action, state.active_view()) {
            (Action::Navigate(nav), Some(view)) => view.translate_navigation(*nav),
            (Action::ViewContext(context), Some(view)) => {
                view.translate_context_action(*context, state)
            }
            _ => return true,
        };

        match translated {
            Some(translated) => {
                log::debug!(
                    "NavigationMiddleware: Translating {:?} to {:?}",
                    action,
                    translated
                );
                dispatcher.dispatch(translated);
            }
            None => log::debug!("Not handled by active view: {:?}", action),
        }
        // Generic actions never reach the reducer
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{ContextAction, CourseListAction, NavigationAction};
    use crate::middleware::test_support::{drain, recording_dispatcher};
    use crate::routes::Route;
    use crate::views::CoursesView;

    #[test]
    fn test_translates_for_the_course_list() {
        let (dispatcher, rx) = recording_dispatcher();
        let state = AppState {
            view_stack: vec![Box::new(CoursesView::new())],
            ..AppState::default()
        };
        let mut middleware = NavigationMiddleware::new();

        assert!(!middleware.handle(
            &Action::Navigate(NavigationAction::Next),
            &state,
            &dispatcher
        ));
        assert!(!middleware.handle(
            &Action::ViewContext(ContextAction::Delete),
            &state,
            &dispatcher
        ));
        assert!(middleware.handle(&Action::Route(Route::Home), &state, &dispatcher));

        let actions = drain(&rx);
        assert!(matches!(
            actions[..],
            [
                Action::CourseList(CourseListAction::NavigateNext),
                Action::CourseList(CourseListAction::DeleteSelected)
            ]
        ));
    }
}
