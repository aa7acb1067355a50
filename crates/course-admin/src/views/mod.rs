use crate::actions::{Action, AvailableAction, ContextAction, NavigationAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

pub mod about_view;
pub mod courses_view;
pub mod form_widgets;
pub mod header_tabs;
pub mod home_view;
pub mod key_hints;
pub mod manage_course_view;
pub mod not_found_view;
pub mod path_prompt_view;
pub mod quick_add_course_view;
pub mod status_bar;

pub use about_view::AboutView;
pub use courses_view::CoursesView;
pub use home_view::HomeView;
pub use manage_course_view::ManageCourseView;
pub use not_found_view::NotFoundView;
pub use path_prompt_view::PathPromptView;
pub use quick_add_course_view::QuickAddCourseView;

use crate::view_models::{HeaderTabsViewModel, KeyHintsViewModel, StatusBarViewModel};
use header_tabs::HeaderTabsWidget;
use key_hints::KeyHintsWidget;
use status_bar::StatusBarWidget;

/// View identifier - allows comparing which view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Home,
    About,
    Courses,
    ManageCourse,
    NotFound,
    QuickAddCourse,
    PathPrompt,
}

/// View trait - the interface every screen and popup implements
///
/// Views live in `AppState::view_stack` as `Box<dyn View>`, so the trait
/// stays object-safe, `Send` (views travel inside actions between threads) and
/// `Sync` (the worker reads them through the shared state snapshot).
pub trait View: std::fmt::Debug + Send + Sync {
    fn view_id(&self) -> ViewId;

    /// Render this view. Base views get the shell's content area, floating
    /// views the whole terminal.
    fn render(&self, state: &AppState, area: Rect, f: &mut Frame);

    /// Capabilities used by the keyboard middleware
    fn capabilities(&self, state: &AppState) -> PanelCapabilities;

    /// Clone this view into a Box
    fn clone_box(&self) -> Box<dyn View>;

    /// Translate generic navigation into this view's action
    fn translate_navigation(&self, _nav: NavigationAction) -> Option<Action> {
        None
    }

    /// Translate generic text input into this view's action
    fn translate_text_input(&self, _input: TextInputAction) -> Option<Action> {
        None
    }

    /// Translate a context action (Enter, delete, reload) into this view's action
    fn translate_context_action(&self, _action: ContextAction, _state: &AppState) -> Option<Action> {
        None
    }

    /// Gate keymap actions: only accepted actions are dispatched while this
    /// view is on top
    fn accepts_action(&self, action: &Action) -> bool {
        matches!(action, Action::Global(_) | Action::Route(_))
    }

    /// Commands worth advertising in the key hint bar
    fn available_actions(&self, _state: &AppState) -> Vec<AvailableAction> {
        Vec::new()
    }

    /// Actions to dispatch when the view is pushed onto the stack
    fn on_mount(&self, _state: &AppState) -> Vec<Action> {
        Vec::new()
    }
}

impl Clone for Box<dyn View> {
    fn clone(&self) -> Box<dyn View> {
        self.clone_box()
    }
}

/// Render the entire application UI
///
/// ```text
/// ┌ header tabs ──────────────┐
/// │ base view (current route) │
/// ├ key hints ────────────────┤
/// └ status bar ───────────────┘
/// ```
///
/// Floating views are drawn last, over the full terminal.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [header, content, hints, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    f.render_widget(HeaderTabsWidget(&HeaderTabsViewModel::from_state(state)), header);

    let mut views = state.view_stack.iter();
    if let Some(base) = views.next() {
        base.render(state, content, f);
    }

    f.render_widget(KeyHintsWidget(&KeyHintsViewModel::from_state(state)), hints);
    f.render_widget(StatusBarWidget(&StatusBarViewModel::from_state(state)), status);

    for floating in views {
        floating.render(state, area, f);
    }
}
