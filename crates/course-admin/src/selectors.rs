//! Derived view state
//!
//! Pure functions from store state to the shapes views render. Nothing is
//! memoised; view models call these on every frame.

use course_api::{Author, AuthorId, Course, CourseId};
use std::collections::HashMap;
use thiserror::Error;

use crate::state::AppState;

/// A course joined with its author's name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseListItem {
    pub id: Option<CourseId>,
    pub slug: String,
    pub title: String,
    pub author_id: Option<AuthorId>,
    /// Empty when the course has no author
    pub author_name: String,
    pub category: String,
    pub length: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("course \"{title}\" references unknown author {author_id}")]
    MissingAuthor { title: String, author_id: AuthorId },
}

/// Join each course to its author's name
///
/// While `authors` is still empty the result is an empty list: authors are a
/// dependency of this view and it renders nothing until they arrive. Once
/// authors are present, a course pointing at an unknown author is an error.
pub fn courses_with_author_names(
    courses: &[Course],
    authors: &[Author],
) -> Result<Vec<CourseListItem>, SelectorError> {
    if authors.is_empty() {
        return Ok(Vec::new());
    }

    let names: HashMap<AuthorId, &str> = authors
        .iter()
        .map(|author| (author.id, author.name.as_str()))
        .collect();

    courses
        .iter()
        .map(|course| {
            let author_name = match course.author_id {
                Some(author_id) => names
                    .get(&author_id)
                    .map(|name| name.to_string())
                    .ok_or_else(|| SelectorError::MissingAuthor {
                        title: course.title.clone(),
                        author_id,
                    })?,
                None => String::new(),
            };

            Ok(CourseListItem {
                id: course.id,
                slug: course.slug.clone(),
                title: course.title.clone(),
                author_id: course.author_id,
                author_name,
                category: course.category.clone(),
                length: course.length.clone(),
            })
        })
        .collect()
}

/// Result of looking up the course a form should edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseSelection {
    /// No slug: create a new course
    New,
    /// Courses not loaded yet; the slug cannot be resolved
    Pending(String),
    Found(Course),
    /// Courses are loaded and none has this slug
    Missing(String),
}

/// Resolve a route slug against a course list
pub fn find_course(courses: &[Course], courses_loaded: bool, slug: Option<&str>) -> CourseSelection {
    let Some(slug) = slug else {
        return CourseSelection::New;
    };

    match courses.iter().find(|course| course.slug == slug) {
        Some(course) => CourseSelection::Found(course.clone()),
        None if courses_loaded => CourseSelection::Missing(slug.to_string()),
        None => CourseSelection::Pending(slug.to_string()),
    }
}

/// Resolve a route slug against the store
pub fn select_course(state: &AppState, slug: Option<&str>) -> CourseSelection {
    find_course(&state.courses, state.loaded.courses, slug)
}

/// The course under the list cursor, with its index
pub fn selected_course(state: &AppState) -> Option<(usize, &Course)> {
    let index = state.course_list.clamped(state.courses.len()).selected;
    state.courses.get(index).map(|course| (index, course))
}

/// True while at least one tracked API call is in flight
pub fn is_loading(state: &AppState) -> bool {
    state.api_call_status.is_loading()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ApiCallStatus;
    use std::sync::Arc;

    fn course(title: &str, slug: &str, author: Option<u64>) -> Course {
        Course {
            title: title.to_string(),
            slug: slug.to_string(),
            author_id: author.map(AuthorId),
            ..Course::default()
        }
    }

    #[test]
    fn test_empty_authors_yield_empty_list() {
        let courses = vec![course("T", "t", Some(1))];
        assert_eq!(courses_with_author_names(&courses, &[]), Ok(vec![]));
    }

    #[test]
    fn test_joins_author_name() {
        let authors = vec![Author::new(1, "A")];
        let courses = vec![course("T", "t", Some(1))];

        let items = courses_with_author_names(&courses, &authors).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "T");
        assert_eq!(items[0].author_name, "A");
    }

    #[test]
    fn test_missing_author_is_an_error() {
        let authors = vec![Author::new(1, "A")];
        let courses = vec![course("T", "t", Some(7))];

        assert_eq!(
            courses_with_author_names(&courses, &authors),
            Err(SelectorError::MissingAuthor {
                title: "T".to_string(),
                author_id: AuthorId(7),
            })
        );
    }

    #[test]
    fn test_course_without_author_has_empty_name() {
        let authors = vec![Author::new(1, "A")];
        let courses = vec![course("Quick", "", None)];

        let items = courses_with_author_names(&courses, &authors).unwrap();
        assert_eq!(items[0].author_name, "");
    }

    #[test]
    fn test_find_course() {
        let courses = vec![course("Clean Code", "clean-code", Some(1))];

        assert_eq!(find_course(&courses, false, None), CourseSelection::New);
        assert_eq!(
            find_course(&[], false, Some("clean-code")),
            CourseSelection::Pending("clean-code".to_string())
        );
        assert_eq!(
            find_course(&courses, true, Some("clean-code")),
            CourseSelection::Found(courses[0].clone())
        );
        assert_eq!(
            find_course(&courses, true, Some("nope")),
            CourseSelection::Missing("nope".to_string())
        );
    }

    #[test]
    fn test_selected_course_is_clamped() {
        let mut state = AppState::default();
        assert_eq!(selected_course(&state), None);

        state.courses = Arc::new(vec![course("A", "a", None), course("B", "b", None)]);
        state.course_list.selected = 7;
        assert_eq!(
            selected_course(&state),
            Some((1, &course("B", "b", None)))
        );
    }

    #[test]
    fn test_is_loading_follows_counter() {
        let mut state = AppState::default();
        assert!(!is_loading(&state));
        state.api_call_status = ApiCallStatus(2);
        assert!(is_loading(&state));

        state.courses = Arc::new(vec![course("T", "t", None)]);
        assert_eq!(
            select_course(&state, Some("t")),
            CourseSelection::Found(course("T", "t", None))
        );
    }
}
