//! Add / edit course form

use crate::actions::{
    Action, ApiTask, AvailableAction, ContextAction, CourseFormAction, Cycle, NavigationAction,
    TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use crate::view_models::{CourseFormBody, CourseFormViewModel, FieldViewModel};
use crate::views::form_widgets::{footer_line, render_field};
use crate::views::{View, ViewId};
use course_admin_theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Modifier, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct ManageCourseView {
    /// `None` creates a new course
    slug: Option<String>,
}

impl ManageCourseView {
    pub fn new(slug: Option<String>) -> Self {
        Self { slug }
    }
}

impl View for ManageCourseView {
    fn view_id(&self) -> ViewId {
        ViewId::ManageCourse
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(&CourseFormViewModel::from_state(state), &state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT | PanelCapabilities::ITEM_NAVIGATION
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => CourseFormAction::NextField,
            NavigationAction::Previous => CourseFormAction::PrevField,
            NavigationAction::Left => CourseFormAction::CycleAuthor(Cycle::Backward),
            NavigationAction::Right => CourseFormAction::CycleAuthor(Cycle::Forward),
            NavigationAction::ToTop | NavigationAction::ToBottom => return None,
        };
        Some(Action::CourseForm(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => CourseFormAction::Char(c),
            TextInputAction::Backspace => CourseFormAction::Backspace,
            TextInputAction::ClearLine => CourseFormAction::ClearField,
            TextInputAction::Escape => CourseFormAction::Cancel,
            TextInputAction::Confirm => CourseFormAction::Submit,
        };
        Some(Action::CourseForm(action))
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::CourseForm(CourseFormAction::Submit)),
            ContextAction::Refresh => Some(Action::CourseForm(CourseFormAction::Reload)),
            ContextAction::Delete => None,
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::CourseForm(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::ViewContext(_)
                | Action::Route(_)
                | Action::Global(_)
        )
    }

    fn available_actions(&self, _state: &AppState) -> Vec<AvailableAction> {
        vec![AvailableAction::new(CommandId::Refresh, "reload")]
    }

    fn on_mount(&self, state: &AppState) -> Vec<Action> {
        let mut actions = vec![Action::CourseForm(CourseFormAction::Open {
            slug: self.slug.clone(),
        })];
        if state.courses.is_empty() && !state.loaded.courses {
            actions.push(Action::Api(ApiTask::LoadCourses));
        }
        if state.authors.is_empty() && !state.loaded.authors {
            actions.push(Action::Api(ApiTask::LoadAuthors));
        }
        actions
    }
}

fn render(vm: &CourseFormViewModel, theme: &Theme, area: Rect, f: &mut Frame) {
    let footer = footer_line(
        &[
            ("Tab", "next field"),
            ("←/→", "author"),
            ("Enter", "save"),
            ("Esc", "cancel"),
        ],
        theme,
    );
    let block = Block::bordered()
        .border_set(symbols::border::ROUNDED)
        .border_style(theme.panel_border())
        .title(Span::styled(
            format!(" {} ", vm.heading),
            theme.panel_title().add_modifier(Modifier::BOLD),
        ))
        .title_bottom(footer)
        .style(theme.panel_background());
    f.render_widget(block, area);

    let inner = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    match &vm.body {
        CourseFormBody::Loading(text) => {
            f.render_widget(
                Paragraph::new(text.clone())
                    .style(theme.warning())
                    .alignment(Alignment::Center),
                inner,
            );
        }
        CourseFormBody::Message {
            text,
            detail,
            is_error,
        } => {
            let style = if *is_error { theme.error() } else { theme.warning() };
            let lines = vec![
                Line::from(Span::styled(text.clone(), style.bold())),
                Line::from(Span::styled(detail.clone(), theme.muted())),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Esc", theme.key_hint().bold()),
                    Span::styled(" back to courses", theme.muted()),
                ]),
            ];
            f.render_widget(
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                inner,
            );
        }
        CourseFormBody::Form {
            fields,
            banner,
            progress,
        } => render_form(fields, banner.as_deref(), progress.as_deref(), theme, inner, f),
    }
}

fn render_form(
    fields: &[FieldViewModel],
    banner: Option<&str>,
    progress: Option<&str>,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    // Banner, blank, then two lines per field (input + error), then progress
    let mut constraints = vec![Constraint::Length(1), Constraint::Length(1)];
    constraints.extend(fields.iter().flat_map(|_| [Constraint::Length(1); 2]));
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));
    let rows = Layout::vertical(constraints).split(area);

    if let Some(banner) = banner {
        f.render_widget(
            Paragraph::new(Span::styled(format!("Save failed: {}", banner), theme.error())),
            rows[0],
        );
    }

    for (i, field) in fields.iter().enumerate() {
        let input_row = rows[2 + i * 2];
        let error_row = rows[3 + i * 2];
        render_field(
            f,
            input_row,
            field.label,
            &field.value,
            field.focused,
            field.placeholder,
            theme,
        );
        if let Some(error) = &field.error {
            f.render_widget(
                Paragraph::new(Span::styled(format!("              {}", error), theme.error())),
                error_row,
            );
        }
    }

    if let Some(progress) = progress {
        f.render_widget(
            Paragraph::new(Span::styled(progress.to_string(), theme.warning().italic())),
            rows[2 + fields.len() * 2],
        );
    }
}
