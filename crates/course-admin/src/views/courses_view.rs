//! Course list screen

use crate::actions::{
    Action, ApiTask, AvailableAction, ContextAction, CourseListAction, NavigationAction,
};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use crate::view_models::{CourseListContent, CourseListViewModel};
use crate::views::{View, ViewId};
use course_admin_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Paragraph, Row, Table, TableState, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct CoursesView;

impl CoursesView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoursesView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for CoursesView {
    fn view_id(&self) -> ViewId {
        ViewId::Courses
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(&CourseListViewModel::from_state(state), &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => CourseListAction::NavigateNext,
            NavigationAction::Previous => CourseListAction::NavigatePrevious,
            NavigationAction::ToTop => CourseListAction::NavigateToTop,
            NavigationAction::ToBottom => CourseListAction::NavigateToBottom,
            NavigationAction::Left | NavigationAction::Right => return None,
        };
        Some(Action::CourseList(action))
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        let action = match action {
            ContextAction::Confirm => CourseListAction::EditSelected,
            ContextAction::Delete => CourseListAction::DeleteSelected,
            ContextAction::Refresh => CourseListAction::Reload,
        };
        Some(Action::CourseList(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::CourseList(_)
                | Action::Navigate(_)
                | Action::ViewContext(_)
                | Action::Route(_)
                | Action::Global(_)
        )
    }

    fn available_actions(&self, _state: &AppState) -> Vec<AvailableAction> {
        vec![
            AvailableAction::new(CommandId::NavigateNext, "down"),
            AvailableAction::new(CommandId::NavigatePrevious, "up"),
            AvailableAction::new(CommandId::Confirm, "edit"),
            AvailableAction::new(CommandId::CourseNew, "new"),
            AvailableAction::new(CommandId::CourseQuickAdd, "quick add"),
            AvailableAction::new(CommandId::Delete, "delete"),
            AvailableAction::new(CommandId::Refresh, "reload"),
        ]
    }

    /// Fetch whatever has not been fetched yet
    fn on_mount(&self, state: &AppState) -> Vec<Action> {
        let mut actions = Vec::new();
        if state.courses.is_empty() && !state.loaded.courses {
            actions.push(Action::Api(ApiTask::LoadCourses));
        }
        if state.authors.is_empty() && !state.loaded.authors {
            actions.push(Action::Api(ApiTask::LoadAuthors));
        }
        actions
    }
}

fn render(vm: &CourseListViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let mut block = Block::bordered()
        .border_type(BorderType::QuadrantOutside)
        .border_style(Style::default().fg(theme.accent_primary))
        .title(Span::styled(vm.title.clone(), theme.panel_title().bold()));
    if let Some(loading) = &vm.loading {
        block = block.title(
            Line::from(Span::styled(loading.clone(), theme.warning())).right_aligned(),
        );
    }

    let rows = match &vm.content {
        CourseListContent::Rows(rows) => rows,
        CourseListContent::Empty(message) => {
            let paragraph = Paragraph::new(message.clone())
                .block(block)
                .style(theme.muted())
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
            return;
        }
        CourseListContent::Error(error) => {
            let paragraph = Paragraph::new(vec![
                Line::from(Span::styled("Could not show the course list.", theme.error())),
                Line::from(Span::styled(error.clone(), theme.muted())),
            ])
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
            return;
        }
    };

    let header_style = theme.table_header();
    let header = Row::new(
        ["Title", "Author", "Category", "Length"]
            .into_iter()
            .map(|h| Cell::from(h).style(header_style)),
    )
    .style(header_style)
    .height(1);

    let table_rows = rows.iter().enumerate().map(|(index, row)| {
        let title = if row.unsaved {
            Line::from(vec![
                Span::raw(row.title.clone()),
                Span::styled(" (unsaved)", theme.muted().italic()),
            ])
        } else {
            Line::from(row.title.clone())
        };
        let style = if index % 2 == 0 {
            theme.table_row()
        } else {
            theme.table_row_alt()
        };
        Row::new(vec![
            Cell::from(title),
            Cell::from(row.author.clone()),
            Cell::from(row.category.clone()),
            Cell::from(row.length.clone()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Percentage(50),
        Constraint::Percentage(20),
        Constraint::Percentage(20),
        Constraint::Length(8),
    ];

    let table = Table::new(table_rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(theme.table_selected())
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(Some(vm.selected));
    f.render_stateful_widget(table, area, &mut table_state);
}
