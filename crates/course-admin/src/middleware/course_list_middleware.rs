//! Course List Middleware
//!
//! Side effects of the course list screen that do not depend on the cursor:
//! opening the form or the quick-add popup, reloading. Editing and deleting
//! the selected row are resolved on reduced state, see [`crate::effects`].

use crate::actions::{Action, ApiTask, CourseListAction, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::routes::Route;
use crate::state::AppState;
use crate::views::QuickAddCourseView;

pub struct CourseListMiddleware;

impl CourseListMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CourseListMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for CourseListMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::CourseList(list_action) = action else {
            return true;
        };

        match list_action {
            CourseListAction::New => {
                dispatcher.dispatch(Action::Route(Route::ManageCourse(None)));
                false
            }
            CourseListAction::QuickAdd => {
                dispatcher.dispatch(Action::Global(GlobalAction::PushView(Box::new(
                    QuickAddCourseView::new(),
                ))));
                false
            }
            CourseListAction::Reload => {
                dispatcher.dispatch(Action::Api(ApiTask::LoadCourses));
                dispatcher.dispatch(Action::Api(ApiTask::LoadAuthors));
                false
            }
            // Reduced in order with the cursor moves before them
            CourseListAction::EditSelected
            | CourseListAction::DeleteSelected
            | CourseListAction::NavigateNext
            | CourseListAction::NavigatePrevious
            | CourseListAction::NavigateToTop
            | CourseListAction::NavigateToBottom => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::test_support::{drain, recording_dispatcher};
    use crate::views::ViewId;

    fn handle(action: CourseListAction) -> (bool, Vec<Action>) {
        let (dispatcher, rx) = recording_dispatcher();
        let passed = CourseListMiddleware::new().handle(
            &Action::CourseList(action),
            &AppState::default(),
            &dispatcher,
        );
        (passed, drain(&rx))
    }

    #[test]
    fn test_new_opens_blank_form() {
        let (passed, actions) = handle(CourseListAction::New);
        assert!(!passed);
        assert!(matches!(
            actions[..],
            [Action::Route(Route::ManageCourse(None))]
        ));
    }

    #[test]
    fn test_quick_add_pushes_popup() {
        let (_, actions) = handle(CourseListAction::QuickAdd);
        match &actions[..] {
            [Action::Global(GlobalAction::PushView(view))] => {
                assert_eq!(view.view_id(), ViewId::QuickAddCourse)
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_selection_actions_reach_the_reducer() {
        for action in [
            CourseListAction::EditSelected,
            CourseListAction::DeleteSelected,
            CourseListAction::NavigateNext,
        ] {
            let (passed, actions) = handle(action);
            assert!(passed);
            assert!(actions.is_empty());
        }
    }
}
