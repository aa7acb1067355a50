//! Application State Module
//!
//! Contains all state types used by the application, organized by feature.

mod api_status;
mod app;
mod course_form;
mod course_list;
mod prompts;
mod status_bar;

pub use api_status::{ApiCallStatus, Loaded};
pub use app::AppState;
pub use course_form::{validate_course, CourseFormState, FieldErrors, FormField, FormPhase};
pub use course_list::CourseListState;
pub use prompts::{PathPromptState, QuickAddState};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
