//! Course Form Middleware
//!
//! Leaving the form and reloading its data. Submitting is decided on reduced
//! state, see [`crate::effects`].

use crate::actions::{Action, ApiTask, CourseFormAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::routes::Route;
use crate::state::AppState;

pub struct CourseFormMiddleware;

impl CourseFormMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CourseFormMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for CourseFormMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::CourseForm(CourseFormAction::Cancel) => {
                dispatcher.dispatch(Action::Route(Route::Courses));
            }
            Action::CourseForm(CourseFormAction::Reload) => {
                dispatcher.dispatch(Action::Api(ApiTask::LoadCourses));
                dispatcher.dispatch(Action::Api(ApiTask::LoadAuthors));
            }
            _ => {}
        }

        // The form reducer tracks every form action
        true
    }
}
