//! API bookkeeping reducers
//!
//! The in-flight counter goes up on `CallStarted` and down on the success
//! outcome of a tracked call or on `CallFailed`. Deletes are not tracked,
//! so `Deleted` leaves the counter alone.

use crate::actions::{Action, ApiStatusAction, AuthorAction, CourseAction};
use crate::state::{ApiCallStatus, Loaded};

pub fn reduce_api_status(status: ApiCallStatus, action: &Action) -> ApiCallStatus {
    match action {
        Action::ApiStatus(ApiStatusAction::CallStarted) => status.begin(),
        Action::ApiStatus(ApiStatusAction::CallFailed)
        | Action::Course(CourseAction::Loaded(_))
        | Action::Course(CourseAction::Saved(_))
        | Action::Author(AuthorAction::Loaded(_)) => status.end(),
        _ => status,
    }
}

pub fn reduce_loaded(mut loaded: Loaded, action: &Action) -> Loaded {
    match action {
        Action::Course(CourseAction::Loaded(_)) => loaded.courses = true,
        Action::Author(AuthorAction::Loaded(_)) => loaded.authors = true,
        _ => {}
    }
    loaded
}
