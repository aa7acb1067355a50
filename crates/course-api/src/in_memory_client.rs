//! In-memory course API
//!
//! Behaves like the json-server mock API: assigns ids and slugs on create,
//! rejects courses without title, author or category, and serves a seeded
//! catalog. Used for offline mode and as a test double.

use crate::client::CourseApi;
use crate::error::{ApiError, ApiResult};
use crate::types::{Author, AuthorId, Course, CourseId};
use async_trait::async_trait;
use log::debug;
use regex::Regex;
use std::sync::{LazyLock, Mutex, MutexGuard};
use std::time::Duration;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^a-z0-9_]+").expect("static slug pattern"));

/// Build a URL-friendly slug from a title
///
/// `"Clean Code: Writing Code for Humans"` becomes `"clean-code-writing-code-for-humans"`.
pub fn slugify(title: &str) -> String {
    NON_SLUG_CHARS
        .replace_all(title, "-")
        .trim_matches('-')
        .to_lowercase()
}

#[derive(Debug, Default)]
struct Catalog {
    courses: Vec<Course>,
    authors: Vec<Author>,
    next_id: u64,
}

/// Mock API backed by process memory
#[derive(Debug, Default)]
pub struct InMemoryCourseApi {
    catalog: Mutex<Catalog>,
    /// Error message returned (once) by the next call
    next_failure: Mutex<Option<String>>,
    latency: Option<Duration>,
}

impl InMemoryCourseApi {
    /// Create an API serving the given catalog
    pub fn new(courses: Vec<Course>, authors: Vec<Author>) -> Self {
        let next_id = courses
            .iter()
            .filter_map(|c| c.id)
            .map(|id| id.0)
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            catalog: Mutex::new(Catalog {
                courses,
                authors,
                next_id,
            }),
            next_failure: Mutex::new(None),
            latency: None,
        }
    }

    /// Create an API serving the bundled sample catalog
    pub fn seeded() -> Self {
        Self::new(sample_courses(), sample_authors())
    }

    /// Delay every call by `latency` (makes the loading indicator visible)
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// Make the next call fail with `message`
    pub fn fail_next_with(&self, message: impl Into<String>) {
        *lock(&self.next_failure) = Some(message.into());
    }

    /// Snapshot of the stored courses
    pub fn courses(&self) -> Vec<Course> {
        lock(&self.catalog).courses.clone()
    }

    async fn simulate_call(&self) -> ApiResult<()> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        match lock(&self.next_failure).take() {
            Some(message) => Err(ApiError::Status {
                status: 500,
                message,
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CourseApi for InMemoryCourseApi {
    async fn get_courses(&self) -> ApiResult<Vec<Course>> {
        self.simulate_call().await?;
        Ok(self.courses())
    }

    async fn get_authors(&self) -> ApiResult<Vec<Author>> {
        self.simulate_call().await?;
        Ok(lock(&self.catalog).authors.clone())
    }

    async fn save_course(&self, course: &Course) -> ApiResult<Course> {
        self.simulate_call().await?;
        validate_course(course)?;

        let mut catalog = lock(&self.catalog);
        let mut stored = course.clone();
        stored.slug = slugify(&stored.title);

        match stored.id {
            Some(id) => {
                let existing = catalog
                    .courses
                    .iter_mut()
                    .find(|c| c.id == Some(id))
                    .ok_or(ApiError::NotFound(id))?;
                *existing = stored.clone();
                debug!("Updated course {} ({})", id, stored.slug);
            }
            None => {
                let id = CourseId(catalog.next_id);
                catalog.next_id += 1;
                stored.id = Some(id);
                catalog.courses.push(stored.clone());
                debug!("Created course {} ({})", id, stored.slug);
            }
        }

        Ok(stored)
    }

    async fn delete_course(&self, id: CourseId) -> ApiResult<()> {
        self.simulate_call().await?;
        let mut catalog = lock(&self.catalog);
        let before = catalog.courses.len();
        catalog.courses.retain(|c| c.id != Some(id));
        if catalog.courses.len() == before {
            return Err(ApiError::NotFound(id));
        }
        debug!("Deleted course {}", id);
        Ok(())
    }
}

fn validate_course(course: &Course) -> ApiResult<()> {
    if course.title.trim().is_empty() {
        return Err(ApiError::Validation("Title is required.".to_string()));
    }
    if course.author_id.is_none() {
        return Err(ApiError::Validation("Author is required.".to_string()));
    }
    if course.category.trim().is_empty() {
        return Err(ApiError::Validation("Category is required.".to_string()));
    }
    Ok(())
}

/// Lock a mutex, recovering the data if a panicking test poisoned it
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn sample_authors() -> Vec<Author> {
    vec![
        Author::new(1, "Cory House"),
        Author::new(2, "Scott Allen"),
        Author::new(3, "Dan Wahlin"),
    ]
}

fn sample_courses() -> Vec<Course> {
    let course = |id: u64, title: &str, author: u64, category: &str, length: &str| Course {
        id: Some(CourseId(id)),
        slug: slugify(title),
        title: title.to_string(),
        author_id: Some(AuthorId(author)),
        category: category.to_string(),
        length: length.to_string(),
    };

    vec![
        course(1, "Securing React Apps with Auth0", 1, "JavaScript", "3:18"),
        course(2, "React: The Big Picture", 1, "JavaScript", "1:11"),
        course(3, "Creating Reusable React Components", 1, "JavaScript", "6:20"),
        course(4, "Building a JavaScript Development Environment", 1, "JavaScript", "5:08"),
        course(5, "Building Applications with React and Redux", 1, "JavaScript", "6:13"),
        course(6, "Building Applications in React and Flux", 1, "JavaScript", "5:10"),
        course(7, "Clean Code: Writing Code for Humans", 1, "Software Practices", "3:10"),
        course(8, "Architecting Applications for the Real World", 2, "Software Architecture", "2:52"),
        course(9, "Becoming an Outlier: Reprogramming the Developer Mind", 1, "Career", "2:30"),
        course(10, "Web Component Fundamentals", 3, "HTML5", "5:10"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> Course {
        Course {
            title: title.to_string(),
            author_id: Some(AuthorId(1)),
            category: "Rust".to_string(),
            ..Course::default()
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(
            slugify("Clean Code: Writing Code for Humans"),
            "clean-code-writing-code-for-humans"
        );
        assert_eq!(slugify("  React & Redux!  "), "react-redux");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }

    #[tokio::test]
    async fn test_seeded_catalog() {
        let api = InMemoryCourseApi::seeded();
        assert_eq!(api.get_courses().await.unwrap().len(), 10);
        assert_eq!(api.get_authors().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_slug() {
        let api = InMemoryCourseApi::seeded();
        let saved = api.save_course(&draft("Rust in Action")).await.unwrap();
        assert_eq!(saved.id, Some(CourseId(11)));
        assert_eq!(saved.slug, "rust-in-action");
        assert_eq!(api.courses().len(), 11);
    }

    #[tokio::test]
    async fn test_update_replaces_existing_course() {
        let api = InMemoryCourseApi::seeded();
        let mut course = api.courses()[0].clone();
        course.title = "Securing Rust Apps".to_string();

        let saved = api.save_course(&course).await.unwrap();
        assert_eq!(saved.id, course.id);
        assert_eq!(saved.slug, "securing-rust-apps");
        assert_eq!(api.courses().len(), 10);
        assert_eq!(api.courses()[0].title, "Securing Rust Apps");
    }

    #[tokio::test]
    async fn test_update_of_unknown_course_is_not_found() {
        let api = InMemoryCourseApi::new(vec![], vec![]);
        let mut course = draft("Ghost");
        course.id = Some(CourseId(42));
        let result = api.save_course(&course).await;
        assert!(matches!(result, Err(ApiError::NotFound(CourseId(42)))));
    }

    #[tokio::test]
    async fn test_save_validates_required_fields() {
        let api = InMemoryCourseApi::new(vec![], vec![]);

        let err = api.save_course(&draft("")).await.unwrap_err();
        assert_eq!(err.to_string(), "Title is required.");

        let mut no_author = draft("T");
        no_author.author_id = None;
        let err = api.save_course(&no_author).await.unwrap_err();
        assert_eq!(err.to_string(), "Author is required.");

        assert!(api.courses().is_empty());
    }

    #[tokio::test]
    async fn test_delete() {
        let api = InMemoryCourseApi::seeded();
        api.delete_course(CourseId(3)).await.unwrap();
        assert_eq!(api.courses().len(), 9);
        assert!(matches!(
            api.delete_course(CourseId(3)).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_injected_failure_applies_once() {
        let api = InMemoryCourseApi::seeded();
        api.fail_next_with("boom");

        let err = api.get_courses().await.unwrap_err();
        assert_eq!(err.to_string(), "API responded with 500: boom");
        assert!(api.get_courses().await.is_ok());
    }
}
