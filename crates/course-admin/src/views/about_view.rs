use crate::actions::AvailableAction;
use crate::capabilities::PanelCapabilities;
use crate::command_id::CommandId;
use crate::state::AppState;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Margin, Rect},
    style::Stylize,
    symbols,
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone)]
pub struct AboutView;

impl AboutView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AboutView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for AboutView {
    fn view_id(&self) -> ViewId {
        ViewId::About
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let block = Block::bordered()
            .border_set(symbols::border::ROUNDED)
            .border_style(theme.panel_border())
            .title(Span::styled(" About ", theme.panel_title().bold()))
            .style(theme.panel_background());

        let text = vec![
            Line::from(Span::styled("Course Admin", theme.section_header())),
            Line::from(""),
            Line::from(Span::styled(
                "A terminal client for a courses and authors API. Browse the \
                 catalog, add courses, edit or delete them.",
                theme.text(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("API: {}", state.app_config.api_base_url),
                theme.muted(),
            )),
            Line::from(Span::styled(
                if state.app_config.offline {
                    "Mode: offline (in-memory catalog)"
                } else {
                    "Mode: online"
                },
                theme.muted(),
            )),
        ];

        f.render_widget(block, area);
        f.render_widget(
            Paragraph::new(text).wrap(Wrap { trim: true }),
            area.inner(Margin {
                horizontal: 2,
                vertical: 1,
            }),
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
            AvailableAction::new(CommandId::GoCourses, "courses"),
            AvailableAction::new(CommandId::GlobalClose, "quit"),
        ]
    }
}
