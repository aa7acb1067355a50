//! Command identifiers
//!
//! Every key binding names a command; the command knows which action it
//! produces. Serialized as snake_case (e.g. `CourseQuickAdd` -> `"course_quick_add"`).

use serde::{Deserialize, Serialize};

use crate::actions::{
    Action, ContextAction, CourseListAction, GlobalAction, NavigationAction,
};
use crate::routes::Route;
use crate::views::PathPromptView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandId {
    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateLeft,
    NavigateRight,
    NavigateToTop,
    NavigateToBottom,

    // === Context actions ===
    /// Primary action of the focused item
    Confirm,
    Delete,
    Refresh,

    // === Courses ===
    CourseNew,
    CourseQuickAdd,

    // === Routes ===
    GoHome,
    GoCourses,
    GoAbout,
    /// Type a path to navigate to
    PathPromptOpen,

    // === General ===
    GlobalClose,
    GlobalQuit,
}

impl CommandId {
    pub fn to_action(self) -> Action {
        match self {
            Self::NavigateNext => Action::Navigate(NavigationAction::Next),
            Self::NavigatePrevious => Action::Navigate(NavigationAction::Previous),
            Self::NavigateLeft => Action::Navigate(NavigationAction::Left),
            Self::NavigateRight => Action::Navigate(NavigationAction::Right),
            Self::NavigateToTop => Action::Navigate(NavigationAction::ToTop),
            Self::NavigateToBottom => Action::Navigate(NavigationAction::ToBottom),

            Self::Confirm => Action::ViewContext(ContextAction::Confirm),
            Self::Delete => Action::ViewContext(ContextAction::Delete),
            Self::Refresh => Action::ViewContext(ContextAction::Refresh),

            Self::CourseNew => Action::CourseList(CourseListAction::New),
            Self::CourseQuickAdd => Action::CourseList(CourseListAction::QuickAdd),

            Self::GoHome => Action::Route(Route::Home),
            Self::GoCourses => Action::Route(Route::Courses),
            Self::GoAbout => Action::Route(Route::About),
            Self::PathPromptOpen => {
                Action::Global(GlobalAction::PushView(Box::new(PathPromptView::new())))
            }

            Self::GlobalClose => Action::Global(GlobalAction::Close),
            Self::GlobalQuit => Action::Global(GlobalAction::Quit),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::NavigateNext => "Navigate down",
            Self::NavigatePrevious => "Navigate up",
            Self::NavigateLeft => "Navigate left",
            Self::NavigateRight => "Navigate right",
            Self::NavigateToTop => "Go to top",
            Self::NavigateToBottom => "Go to bottom",
            Self::Confirm => "Confirm",
            Self::Delete => "Delete",
            Self::Refresh => "Reload",
            Self::CourseNew => "New course",
            Self::CourseQuickAdd => "Quick add course",
            Self::GoHome => "Home",
            Self::GoCourses => "Courses",
            Self::GoAbout => "About",
            Self::PathPromptOpen => "Go to path",
            Self::GlobalClose => "Close",
            Self::GlobalQuit => "Quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_as_snake_case() {
        let json = serde_json::to_string(&CommandId::CourseQuickAdd).unwrap();
        assert_eq!(json, "\"course_quick_add\"");
    }

    #[test]
    fn test_route_commands() {
        assert!(matches!(
            CommandId::GoCourses.to_action(),
            Action::Route(Route::Courses)
        ));
        assert!(matches!(
            CommandId::PathPromptOpen.to_action(),
            Action::Global(GlobalAction::PushView(_))
        ));
    }
}
