//! Status Bar Widget
//!
//! Format: `[HH:MM:SS] emoji message                     [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;
        if area.height < 1 || area.width < 4 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let right = area.x + area.width;
        let mut x = area.x + 1;

        if !vm.timestamp.is_empty() {
            let stamp = format!("[{}] ", vm.timestamp);
            buf.set_string(x, area.y, &stamp, vm.metadata_style);
            x += stamp.chars().count() as u16;
        }

        buf.set_string(x, area.y, format!("{} ", vm.emoji), vm.message_style);
        // Emoji render two cells wide
        x += 3;

        let source = (!vm.source.is_empty()).then(|| format!("[{}]", vm.source));
        let source_width = source.as_ref().map_or(0, |s| s.chars().count() as u16 + 2);

        let available = right.saturating_sub(x + source_width) as usize;
        let message_len = vm.message.chars().count();
        if message_len > available {
            let truncated: String = vm
                .message
                .chars()
                .take(available.saturating_sub(1))
                .collect();
            buf.set_string(x, area.y, format!("{}…", truncated), vm.message_style);
        } else {
            buf.set_string(x, area.y, &vm.message, vm.message_style);
        }

        if let Some(source) = source {
            let source_x = right.saturating_sub(source.chars().count() as u16 + 1);
            if source_x > x {
                buf.set_string(source_x, area.y, &source, vm.metadata_style);
            }
        }
    }
}
