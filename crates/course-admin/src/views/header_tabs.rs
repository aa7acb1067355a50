//! Header tab line

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::view_models::HeaderTabsViewModel;

const SEPARATOR: &str = "│";

pub struct HeaderTabsWidget<'a>(pub &'a HeaderTabsViewModel);

impl Widget for HeaderTabsWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;
        if area.height < 1 || area.width < 10 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.line_bg).set_char(' ');
        }

        let right = area.x + area.width;
        let mut x = area.x;

        buf.set_string(x, area.y, &vm.brand, vm.brand_style);
        x += vm.brand.chars().count() as u16;

        for tab in &vm.tabs {
            let width = tab.text.chars().count() as u16 + 1;
            if x + width > right {
                break;
            }
            buf.set_string(x, area.y, SEPARATOR, vm.brand_style);
            buf.set_string(x + 1, area.y, &tab.text, tab.style);
            x += width;
        }

        if let Some(activity) = &vm.activity {
            let width = activity.chars().count() as u16;
            if x + width < right {
                buf.set_string(right - width, area.y, activity, vm.activity_style);
            }
        }
    }
}
