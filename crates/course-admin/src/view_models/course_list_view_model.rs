//! View model for the course table
//!
//! Pre-computes display text for every row from the course/author join.

use crate::selectors::{courses_with_author_names, is_loading};
use crate::state::AppState;
use crate::view_models::spinner_frame;

#[derive(Debug, Clone)]
pub struct CourseListViewModel {
    /// Block title, e.g. `" Courses (10) "`
    pub title: String,
    /// Spinner text while API calls are in flight
    pub loading: Option<String>,
    pub content: CourseListContent,
    /// Cursor row, already clamped to the row count
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CourseListContent {
    Rows(Vec<CourseRowViewModel>),
    /// Nothing to show yet (or nothing at all)
    Empty(String),
    /// The course/author join failed
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRowViewModel {
    pub title: String,
    pub author: String,
    pub category: String,
    pub length: String,
    /// Quick-added course that only exists locally
    pub unsaved: bool,
}

impl CourseListViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let loading = is_loading(state);

        let content = match courses_with_author_names(&state.courses, &state.authors) {
            Err(error) => CourseListContent::Error(error.to_string()),
            Ok(items) if items.is_empty() => CourseListContent::Empty(
                if loading {
                    "Loading courses…"
                } else if !state.loaded.courses || !state.loaded.authors {
                    "Courses are not loaded yet. Press Ctrl+R to reload."
                } else {
                    "No courses yet. Press n to add one."
                }
                .to_string(),
            ),
            Ok(items) => CourseListContent::Rows(
                items
                    .into_iter()
                    .map(|item| CourseRowViewModel {
                        unsaved: item.id.is_none(),
                        title: item.title,
                        author: item.author_name,
                        category: item.category,
                        length: item.length,
                    })
                    .collect(),
            ),
        };

        let count = match &content {
            CourseListContent::Rows(rows) => rows.len(),
            _ => 0,
        };

        Self {
            title: format!(" Courses ({}) ", count),
            loading: loading.then(|| format!(" {} Loading… ", spinner_frame(state.tick))),
            selected: state.course_list.clamped(count).selected,
            content,
        }
    }
}
