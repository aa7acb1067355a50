//! Key hint bar

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::Widget,
};

use crate::view_models::KeyHintsViewModel;

pub struct KeyHintsWidget<'a>(pub &'a KeyHintsViewModel);

impl Widget for KeyHintsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;
        buf.set_style(area, vm.bg_style);

        let mut spans = vec![Span::raw(" ")];
        for hint in &vm.hints {
            spans.push(Span::styled(hint.keys.clone(), vm.key_style.bold()));
            spans.push(Span::styled(format!(" {}  ", hint.label), vm.label_style));
        }
        Line::from(spans).render(area, buf);
    }
}
