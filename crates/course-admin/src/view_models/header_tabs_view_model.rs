//! Header Tabs View Model
//!
//! The tab line at the top: application name, one tab per top-level route
//! and a spinner while API calls are in flight.

use crate::command_id::CommandId;
use crate::selectors::is_loading;
use crate::state::AppState;
use crate::view_models::spinner_frame;
use crate::views::ViewId;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct HeaderTabsViewModel {
    pub brand: String,
    pub brand_style: Style,
    pub tabs: Vec<TabViewModel>,
    /// Spinner shown at the right edge while loading
    pub activity: Option<String>,
    pub activity_style: Style,
    pub line_bg: Color,
}

#[derive(Debug, Clone)]
pub struct TabViewModel {
    /// e.g. `"1 Home"`
    pub text: String,
    pub active: bool,
    pub style: Style,
}

const TABS: [(CommandId, &str, &[ViewId]); 3] = [
    (CommandId::GoHome, "Home", &[ViewId::Home]),
    (
        CommandId::GoCourses,
        "Courses",
        &[ViewId::Courses, ViewId::ManageCourse],
    ),
    (CommandId::GoAbout, "About", &[ViewId::About]),
];

impl HeaderTabsViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let current = state.base_view().map(|v| v.view_id());

        let tabs = TABS
            .iter()
            .map(|(command, label, views)| {
                let active = current.is_some_and(|id| views.contains(&id));
                let key = state
                    .keymap
                    .compact_hint_for_command(*command)
                    .unwrap_or_default();
                TabViewModel {
                    text: format!(" {} {} ", key, label),
                    active,
                    style: if active {
                        theme.tab_active()
                    } else {
                        theme.tab_inactive()
                    },
                }
            })
            .collect();

        Self {
            brand: " Course Admin ".to_string(),
            brand_style: Style::default()
                .fg(theme.accent_primary)
                .bg(theme.tab_line_bg)
                .add_modifier(Modifier::BOLD),
            tabs,
            activity: is_loading(state)
                .then(|| format!("{} loading ", spinner_frame(state.tick))),
            activity_style: Style::default()
                .fg(theme.status_running)
                .bg(theme.tab_line_bg),
            line_bg: theme.tab_line_bg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ApiCallStatus;
    use crate::views::{CoursesView, ManageCourseView};

    fn active_tabs(vm: &HeaderTabsViewModel) -> Vec<&str> {
        vm.tabs
            .iter()
            .filter(|t| t.active)
            .map(|t| t.text.trim())
            .collect()
    }

    #[test]
    fn test_home_tab_active_at_start() {
        let vm = HeaderTabsViewModel::from_state(&AppState::default());
        assert_eq!(active_tabs(&vm), vec!["1 Home"]);
        assert!(vm.activity.is_none());
    }

    #[test]
    fn test_form_belongs_to_courses_tab() {
        let state = AppState {
            view_stack: vec![Box::new(ManageCourseView::new(None))],
            ..AppState::default()
        };
        let vm = HeaderTabsViewModel::from_state(&state);
        assert_eq!(active_tabs(&vm), vec!["2 Courses"]);
    }

    #[test]
    fn test_spinner_while_loading() {
        let state = AppState {
            view_stack: vec![Box::new(CoursesView::new())],
            api_call_status: ApiCallStatus(1),
            ..AppState::default()
        };
        let vm = HeaderTabsViewModel::from_state(&state);
        assert!(vm.activity.is_some());
    }
}
