//! Course domain actions
//!
//! Plain events consumed by the course reducer. The `Loaded`, `Saved`,
//! `Deleted` and `*Failed` variants are outcomes dispatched by the API
//! middleware once a call finishes.

use course_api::{Course, CourseId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseAction {
    /// Append a course locally (quick add, no API call)
    Create(Course),
    /// Course list fetched from the API
    Loaded(Vec<Course>),
    /// Fetching the course list failed
    LoadFailed(String),
    /// The API stored a course (created or updated)
    Saved(Course),
    /// The API rejected a save
    SaveFailed(String),
    /// Remove a course optimistically; `index` is its position in the list
    Delete { course: Course, index: usize },
    /// The API confirmed a delete
    Deleted(CourseId),
    /// The API rejected a delete; the course goes back to `index`
    DeleteFailed {
        course: Course,
        index: usize,
        error: String,
    },
}
