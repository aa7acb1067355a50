//! API call requests and in-flight bookkeeping
//!
//! An `ApiTask` describes exactly one call against the course API. Views and
//! middleware dispatch `Action::Api(task)`; the API middleware performs the
//! call and dispatches the outcome as plain actions.

use course_api::Course;

/// One asynchronous call against the course API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiTask {
    LoadCourses,
    LoadAuthors,
    SaveCourse(Course),
    /// Delete a persisted course; `index` is where to restore it on failure
    DeleteCourse { course: Course, index: usize },
}

impl ApiTask {
    /// Whether the call counts towards the loading indicator
    ///
    /// Deletes update the list optimistically and run silently.
    pub fn tracks_loading(&self) -> bool {
        match self {
            Self::LoadCourses | Self::LoadAuthors | Self::SaveCourse(_) => true,
            Self::DeleteCourse { .. } => false,
        }
    }

    /// Short label used for status messages and logs
    pub fn label(&self) -> &'static str {
        match self {
            Self::LoadCourses => "Load courses",
            Self::LoadAuthors => "Load authors",
            Self::SaveCourse(_) => "Save course",
            Self::DeleteCourse { .. } => "Delete course",
        }
    }
}

/// Counter transitions for tracked API calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatusAction {
    /// A tracked call was started
    CallStarted,
    /// A tracked call failed (success is signalled by its outcome action)
    CallFailed,
}
