use crate::actions::{Action, AvailableAction, ContextAction};
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::routes::Route;
use crate::state::AppState;
use crate::views::{View, ViewId};
use course_admin_theme::Theme;
use figlet_rs::FIGfont;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

const TITLE: &str = "Course Admin";

/// Landing screen
#[derive(Debug, Clone)]
pub struct HomeView;

impl HomeView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HomeView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for HomeView {
    fn view_id(&self) -> ViewId {
        ViewId::Home
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(&state.theme, area, f);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_context_action(&self, action: ContextAction, _state: &AppState) -> Option<Action> {
        match action {
            ContextAction::Confirm => Some(Action::Route(Route::About)),
            ContextAction::Delete | ContextAction::Refresh => None,
        }
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Global(_) | Action::Route(_) | Action::ViewContext(ContextAction::Confirm)
        )
    }

    fn available_actions(&self, _state: &AppState) -> Vec<AvailableAction> {
        vec![
            AvailableAction::new(CommandId::Confirm, "learn more"),
            AvailableAction::new(CommandId::GoCourses, "courses"),
            AvailableAction::new(CommandId::PathPromptOpen, "go to path"),
            AvailableAction::new(CommandId::GlobalClose, "quit"),
        ]
    }
}

fn banner(theme: &Theme) -> Vec<Line<'static>> {
    let figure = FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()));

    match figure {
        Some(figure) => figure
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), theme.panel_title().bold())))
            .collect(),
        None => vec![Line::from(Span::styled(TITLE, theme.panel_title().bold()))],
    }
}

fn render(theme: &Theme, area: Rect, f: &mut Frame) {
    f.render_widget(Block::default().style(theme.panel_background()), area);

    let banner = banner(theme);
    let [_, banner_area, text_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(banner.len() as u16 + 1),
        Constraint::Min(0),
    ])
    .areas(area);

    f.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        banner_area,
    );

    let text = vec![
        Line::from(Span::styled(
            "Manage the course catalog from your terminal.",
            theme.text(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", theme.key_hint().bold()),
            Span::styled(" learn more   ", theme.muted()),
            Span::styled("2", theme.key_hint().bold()),
            Span::styled(" browse courses", theme.muted()),
        ]),
    ];
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        text_area,
    );
}
