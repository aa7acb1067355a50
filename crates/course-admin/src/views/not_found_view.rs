use crate::actions::AvailableAction;
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

/// Shown for any path the router does not know
#[derive(Debug, Clone)]
pub struct NotFoundView {
    path: String,
}

impl NotFoundView {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

impl View for NotFoundView {
    fn view_id(&self) -> ViewId {
        ViewId::NotFound
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        f.render_widget(Block::default().style(theme.panel_background()), area);

        let [_, text_area] =
            Layout::vertical([Constraint::Percentage(40), Constraint::Min(0)]).areas(area);
        let text = vec![
            Line::from(Span::styled("Oops! Page not found.", theme.error().bold())),
            Line::from(Span::styled(format!("\"{}\"", self.path), theme.muted())),
        ];
        f.render_widget(
            Paragraph::new(text).alignment(Alignment::Center),
            text_area,
        );
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn available_actions(&self, _state: &AppState) -> Vec<AvailableAction> {
        vec![
            AvailableAction::new(CommandId::GoHome, "home"),
            AvailableAction::new(CommandId::PathPromptOpen, "go to path"),
        ]
    }
}
