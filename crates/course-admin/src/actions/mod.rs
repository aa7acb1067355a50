//! Actions module
//!
//! All actions in the application, using a tagged action architecture:
//! - Generic actions (Navigate, TextInput, ViewContext) that the active view
//!   translates into screen-specific actions
//! - Global actions that affect the entire application
//! - Route changes
//! - API requests (`Api`) and the plain outcome events they produce
//! - Screen-specific actions that are already targeted

// Shared action types
pub mod available_action;
pub mod context_action;
pub mod global;
pub mod navigation;
pub mod text_input;

// Domain and API action types
pub mod api;
pub mod author;
pub mod course;
pub mod status_bar;

// Screen-specific action types
pub mod course_form;
pub mod course_list;
pub mod path_prompt;
pub mod quick_add;

pub use api::{ApiStatusAction, ApiTask};
pub use author::AuthorAction;
pub use available_action::AvailableAction;
pub use context_action::ContextAction;
pub use course::CourseAction;
pub use course_form::{CourseFormAction, Cycle};
pub use course_list::CourseListAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use path_prompt::PathPromptAction;
pub use quick_add::QuickAddAction;
pub use status_bar::StatusBarAction;
pub use text_input::TextInputAction;

use crate::routes::Route;

/// Root action enum - tagged by screen/domain
///
/// The enum is closed: every reducer and middleware matches on it
/// exhaustively or passes unknown variants through untouched.
#[derive(Debug, Clone)]
pub enum Action {
    // Generic actions (need translation by active view)
    /// Generic navigation action - translated by active view
    Navigate(NavigationAction),
    /// Generic text input action - translated by active view
    TextInput(TextInputAction),
    /// Context-sensitive action - translated by active view
    ViewContext(ContextAction),

    /// Global application actions
    Global(GlobalAction),
    /// Go to a route (replaces the view stack)
    Route(Route),

    /// Request an API call (executed by the API middleware)
    Api(ApiTask),
    /// In-flight call counter transitions
    ApiStatus(ApiStatusAction),
    /// Course data events
    Course(CourseAction),
    /// Author data events
    Author(AuthorAction),

    /// Course list screen actions
    CourseList(CourseListAction),
    /// Manage-course form actions
    CourseForm(CourseFormAction),
    /// Quick-add popup actions
    QuickAdd(QuickAddAction),
    /// Path prompt actions
    PathPrompt(PathPromptAction),
    /// Status bar actions
    StatusBar(StatusBarAction),

    /// No-op action
    None,
}
