//! Author domain actions

use course_api::Author;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorAction {
    /// Author list fetched from the API
    Loaded(Vec<Author>),
    /// Fetching the author list failed
    LoadFailed(String),
}
