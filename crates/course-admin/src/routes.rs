//! URL-like routes
//!
//! | path            | screen                     |
//! |-----------------|----------------------------|
//! | `/`             | home                       |
//! | `/about`        | about                      |
//! | `/courses`      | course list                |
//! | `/course`       | blank course form          |
//! | `/course/:slug` | edit form for `slug`       |
//! | anything else   | not found                  |

use crate::views::{AboutView, CoursesView, HomeView, ManageCourseView, NotFoundView, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Courses,
    /// `None` creates a new course
    ManageCourse(Option<String>),
    /// Unknown path, kept for display
    NotFound(String),
}

impl Route {
    /// Parse a path; surrounding whitespace and trailing slashes are ignored
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let normalized = match trimmed.trim_end_matches('/') {
            "" if trimmed.starts_with('/') => "/",
            other => other,
        };

        match normalized {
            "/" => Self::Home,
            "/about" => Self::About,
            "/courses" => Self::Courses,
            "/course" => Self::ManageCourse(None),
            other => match other.strip_prefix("/course/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                    Self::ManageCourse(Some(slug.to_string()))
                }
                _ => Self::NotFound(trimmed.to_string()),
            },
        }
    }

    /// The canonical path for this route
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::About => "/about".to_string(),
            Self::Courses => "/courses".to_string(),
            Self::ManageCourse(None) => "/course".to_string(),
            Self::ManageCourse(Some(slug)) => format!("/course/{}", slug),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// The base view rendering this route
    pub fn view(&self) -> Box<dyn View> {
        match self {
            Self::Home => Box::new(HomeView::new()),
            Self::About => Box::new(AboutView::new()),
            Self::Courses => Box::new(CoursesView::new()),
            Self::ManageCourse(slug) => Box::new(ManageCourseView::new(slug.clone())),
            Self::NotFound(path) => Box::new(NotFoundView::new(path.clone())),
        }
    }
}
