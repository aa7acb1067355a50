//! Application State

use std::sync::Arc;

use course_admin_config::AppConfig;
use course_admin_theme::Theme;
use course_api::{Author, Course};

use crate::keymap::{default_keymap, Keymap};
use crate::views::{HomeView, View};

use super::{
    ApiCallStatus, CourseFormState, CourseListState, Loaded, PathPromptState, QuickAddState,
    StatusBarState,
};

/// Application state
///
/// `courses` and `authors` are shared behind `Arc`: a reducer that does not
/// change a collection hands back the very same allocation, one that does
/// change it builds a new vector.
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    /// Stack of views - the bottom view is the current route, views above
    /// it are floating popups. Rendered bottom-up.
    pub view_stack: Vec<Box<dyn View>>,

    pub courses: Arc<Vec<Course>>,
    pub authors: Arc<Vec<Author>>,
    pub api_call_status: ApiCallStatus,
    pub loaded: Loaded,

    pub course_list: CourseListState,
    pub course_form: CourseFormState,
    pub quick_add: QuickAddState,
    pub path_prompt: PathPromptState,
    pub status_bar: StatusBarState,

    /// Animation counter, advanced while calls are in flight
    pub tick: u64,
    pub theme: Theme,
    pub keymap: Keymap,
    pub app_config: AppConfig,
}

impl AppState {
    /// Initial state with the given configuration
    pub fn new(app_config: AppConfig) -> Self {
        Self {
            app_config,
            ..Self::default()
        }
    }

    /// The top-most (active) view
    pub fn active_view(&self) -> Option<&dyn View> {
        self.view_stack.last().map(|v| v.as_ref())
    }

    /// The view rendering the current route (bottom of the stack)
    pub fn base_view(&self) -> Option<&dyn View> {
        self.view_stack.first().map(|v| v.as_ref())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            view_stack: vec![Box::new(HomeView::new())],
            courses: Arc::new(Vec::new()),
            authors: Arc::new(Vec::new()),
            api_call_status: ApiCallStatus::default(),
            loaded: Loaded::default(),
            course_list: CourseListState::default(),
            course_form: CourseFormState::default(),
            quick_add: QuickAddState::default(),
            path_prompt: PathPromptState::default(),
            status_bar: StatusBarState::default(),
            tick: 0,
            theme: Theme::default(),
            keymap: default_keymap(),
            app_config: AppConfig::default(),
        }
    }
}
