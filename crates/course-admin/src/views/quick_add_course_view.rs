//! Quick-add popup: create a course from just a title

use crate::actions::{Action, QuickAddAction, TextInputAction};
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
pub struct QuickAddCourseView;

impl QuickAddCourseView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuickAddCourseView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for QuickAddCourseView {
    fn view_id(&self) -> ViewId {
        ViewId::QuickAddCourse
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;
        let footer = footer_line(&[("Enter", "add"), ("Esc", "cancel")], theme);
        let inner = render_popup(f, area, 7, "Quick Add Course", footer, theme);

        let [note, _, field] = Layout::vertical([Constraint::Length(1); 3]).areas(inner);
        f.render_widget(
            Paragraph::new(Span::styled(
                "Added to the list only; edit it later to save it.",
                theme.text_secondary(),
            )),
            note,
        );
        render_field(f, field, "Title", &state.quick_add.title, true, None, theme);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::TEXT_INPUT
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => QuickAddAction::Char(c),
            TextInputAction::Backspace => QuickAddAction::Backspace,
            TextInputAction::ClearLine => QuickAddAction::ClearLine,
            TextInputAction::Escape => QuickAddAction::Close,
            TextInputAction::Confirm => QuickAddAction::Confirm,
        };
        Some(Action::QuickAdd(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::QuickAdd(_) | Action::TextInput(_) | Action::Global(_)
        )
    }
}
