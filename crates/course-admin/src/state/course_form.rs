//! Manage-course form state
//!
//! The form walks through these phases:
//!
//! ```text
//! Loading ──▶ Editing ──submit──▶ Validating ──ok──▶ Saving ──▶ Saved
//!    │           ▲                    │                 │
//!    │           └──── errors ────────┘                 ▼
//!    │           ▲                                 SaveFailed
//!    │           └────────────── next edit ─────────────┘
//!    ├──▶ NotFound   (slug unknown once courses are loaded)
//!    └──▶ LoadFailed (courses or authors could not be fetched)
//! ```

use course_api::Course;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use strum::{Display, EnumIter, IntoEnumIterator};

/// `m:ss` or `h:mm`, e.g. `3:18`
static LENGTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+:[0-5]\d$").expect("static length pattern"));

/// Input fields of the course form, in focus order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum FormField {
    #[default]
    Title,
    Author,
    Category,
    Length,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Category,
            Self::Category => Self::Length,
            Self::Length => Self::Title,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Title => Self::Length,
            Self::Author => Self::Title,
            Self::Category => Self::Author,
            Self::Length => Self::Category,
        }
    }

    /// All fields in focus order
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Validation messages keyed by field
pub type FieldErrors = BTreeMap<FormField, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// Waiting for courses and/or authors
    #[default]
    Loading,
    Editing,
    Validating,
    /// Save call in flight; input is ignored
    Saving,
    Saved,
    SaveFailed(String),
    LoadFailed(String),
    /// The requested slug does not exist
    NotFound,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFormState {
    /// Slug from the route; `None` for a new course
    pub slug: Option<String>,
    pub phase: FormPhase,
    pub draft: Course,
    pub focused: FormField,
    pub errors: FieldErrors,
}

impl CourseFormState {
    /// Fresh form for the given route slug
    pub fn open(slug: Option<String>) -> Self {
        Self {
            slug,
            ..Self::default()
        }
    }

    /// Whether keystrokes may change the draft
    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, FormPhase::Editing | FormPhase::SaveFailed(_))
    }

    /// Mutable text of a free-text field (the author field is a choice)
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.draft.title),
            FormField::Category => Some(&mut self.draft.category),
            FormField::Length => Some(&mut self.draft.length),
            FormField::Author => None,
        }
    }
}

/// Check a draft before it is sent to the API
///
/// Title, author and category are required; length is optional but must
/// look like `3:18` when given.
pub fn validate_course(course: &Course) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if course.title.trim().is_empty() {
        errors.insert(FormField::Title, "Title is required.".to_string());
    }
    if course.author_id.is_none() {
        errors.insert(FormField::Author, "Author is required.".to_string());
    }
    if course.category.trim().is_empty() {
        errors.insert(FormField::Category, "Category is required.".to_string());
    }
    let length = course.length.trim();
    if !length.is_empty() && !LENGTH_PATTERN.is_match(length) {
        errors.insert(
            FormField::Length,
            "Length must look like 3:18.".to_string(),
        );
    }

    errors
}
