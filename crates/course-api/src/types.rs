//! Course catalog data transfer objects
//!
//! These types mirror the JSON documents served by the API
//! (camelCase keys, `id` absent until a course has been persisted).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a persisted course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub u64);

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A course record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// `None` until the API has persisted the course
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CourseId>,

    /// URL-friendly identifier, assigned by the API from the title
    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub author_id: Option<AuthorId>,

    #[serde(default)]
    pub category: String,

    /// Duration as `m:ss`, free text in the API
    #[serde(default)]
    pub length: String,
}

impl Course {
    /// Create an unsaved course that only carries a title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Whether the course has been persisted (has an id)
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// An author record (read-only reference data)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
}

impl Author {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: AuthorId(id),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_deserializes_camel_case() {
        let json = r#"{
            "id": 7,
            "title": "Clean Code: Writing Code for Humans",
            "slug": "writing-clean-code-humans",
            "authorId": 1,
            "category": "Software Practices",
            "length": "3:10"
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert_eq!(course.id, Some(CourseId(7)));
        assert_eq!(course.author_id, Some(AuthorId(1)));
        assert_eq!(course.category, "Software Practices");
    }

    #[test]
    fn test_unsaved_course_omits_id() {
        let course = Course::with_title("Rust for Humans");
        let json = serde_json::to_value(&course).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "Rust for Humans");
        assert_eq!(json["authorId"], serde_json::Value::Null);
        assert!(!course.is_persisted());
    }

    #[test]
    fn test_course_tolerates_missing_fields() {
        let course: Course = serde_json::from_str(r#"{"title": "X"}"#).unwrap();
        assert_eq!(course.title, "X");
        assert!(course.id.is_none());
        assert!(course.author_id.is_none());
        assert!(course.slug.is_empty());
    }
}
