//! "Go to path" prompt

use crate::actions::{Action, PathPromptAction, TextInputAction};
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::form_widgets::{footer_line, render_field, render_popup};
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Span,
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Clone)]
pub struct PathPromptView;

impl PathPromptView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PathPromptView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for PathPromptView {
    fn view_id(&self) -> ViewId {
        ViewId::PathPrompt
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let footer = footer_line(&[("Enter", "go"), ("Esc", "cancel")], theme);
        let inner = render_popup(f, area, 7, "Go To", footer, theme);

        let [field, _, examples] = Layout::vertical([Constraint::Length(1); 3]).areas(inner);
        render_field(
            f,
            field,
            "Path",
            &state.path_prompt.input,
            true,
            Some("/courses"),
            theme,
        );
        f.render_widget(
            Paragraph::new(Span::styled(
                "/  /about  /courses  /course  /course/<slug>",
                theme.muted(),
            )),
            examples,
        );
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => PathPromptAction::Char(c),
            TextInputAction::Backspace => PathPromptAction::Backspace,
            TextInputAction::ClearLine => PathPromptAction::ClearLine,
            TextInputAction::Escape => PathPromptAction::Close,
            TextInputAction::Confirm => PathPromptAction::Confirm,
        };
        Some(Action::PathPrompt(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::PathPrompt(_) | Action::TextInput(_) | Action::Global(_)
        )
    }
}
