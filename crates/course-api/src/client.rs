//! Course API client trait

use crate::error::ApiResult;
use crate::types::{Author, Course, CourseId};
use async_trait::async_trait;

/// Course catalog API
///
/// Implementations must be `Send + Sync` so a single client can be shared
/// by every task spawned on the middleware runtime.
///
/// # Example
///
/// ```rust,ignore
/// use course_api::{CourseApi, Course};
///
/// async fn titles(api: &dyn CourseApi) -> course_api::ApiResult<Vec<String>> {
///     Ok(api.get_courses().await?.into_iter().map(|c| c.title).collect())
/// }
/// ```
#[async_trait]
pub trait CourseApi: Send + Sync {
    /// Fetch all courses
    async fn get_courses(&self) -> ApiResult<Vec<Course>>;

    /// Fetch all authors
    async fn get_authors(&self) -> ApiResult<Vec<Author>>;

    /// Persist a course
    ///
    /// Creates the course when `course.id` is `None`, updates it otherwise.
    /// Returns the course as stored by the API (with `id` and `slug` set).
    async fn save_course(&self, course: &Course) -> ApiResult<Course>;

    /// Delete a persisted course
    async fn delete_course(&self, id: CourseId) -> ApiResult<()>;
}
