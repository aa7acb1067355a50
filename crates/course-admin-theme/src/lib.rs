//! Colour palette and prebuilt styles for course-admin
//!
//! Widgets never pick colours themselves; they ask the [`Theme`] in
//! `AppState` for a colour or a ready-made [`Style`].

use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Status bar and terminal background
    pub bg_primary: Color,
    /// Form and popup background
    pub bg_panel: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    /// Borders, titles, key names
    pub accent_primary: Color,

    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,
    pub status_running: Color,

    pub selected_bg: Color,
    pub selected_fg: Color,

    pub tab_line_bg: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_inactive_fg: Color,

    pub table_header_bg: Color,
    pub table_header_fg: Color,
    pub table_row_fg: Color,
    pub table_row_bg_alt: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Slate background with emerald accents
    pub fn dark() -> Self {
        let slate = tailwind::SLATE;
        let emerald = tailwind::EMERALD;

        Self {
            bg_primary: slate.c950,
            bg_panel: slate.c800,

            text_primary: slate.c100,
            text_secondary: slate.c300,
            text_muted: slate.c400,
            accent_primary: emerald.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::AMBER.c400,
            status_info: tailwind::SKY.c400,
            status_running: tailwind::YELLOW.c400,

            selected_bg: emerald.c700,
            selected_fg: Color::White,

            tab_line_bg: slate.c900,
            tab_active_bg: emerald.c600,
            tab_active_fg: Color::White,
            tab_inactive_fg: slate.c400,

            table_header_bg: slate.c700,
            table_header_fg: slate.c100,
            table_row_fg: slate.c200,
            table_row_bg_alt: slate.c900,
        }
    }

    fn bold(color: Color) -> Style {
        Style::new().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn panel_background(&self) -> Style {
        Style::new().bg(self.bg_panel)
    }

    pub fn panel_border(&self) -> Style {
        Self::bold(self.accent_primary)
    }

    pub fn panel_title(&self) -> Style {
        Self::bold(self.accent_primary)
    }

    pub fn section_header(&self) -> Style {
        Self::bold(self.status_warning).add_modifier(Modifier::UNDERLINED)
    }

    /// Key name in a hint, e.g. `Enter` in "Enter save"
    pub fn key_hint(&self) -> Style {
        Self::bold(self.accent_primary)
    }

    pub fn key_description(&self) -> Style {
        Style::new().fg(self.text_secondary)
    }

    pub fn table_header(&self) -> Style {
        Self::bold(self.table_header_fg).bg(self.table_header_bg)
    }

    /// Row under the cursor
    pub fn table_selected(&self) -> Style {
        Self::bold(self.selected_fg).bg(self.selected_bg)
    }

    pub fn table_row(&self) -> Style {
        Style::new().fg(self.table_row_fg)
    }

    /// Every other row, for readability in long lists
    pub fn table_row_alt(&self) -> Style {
        self.table_row().bg(self.table_row_bg_alt)
    }

    /// Label of the focused form field
    pub fn selection_bg(&self) -> Style {
        Style::new().bg(self.selected_bg).fg(self.selected_fg)
    }

    pub fn tab_active(&self) -> Style {
        Self::bold(self.tab_active_fg).bg(self.tab_active_bg)
    }

    pub fn tab_inactive(&self) -> Style {
        Style::new().fg(self.tab_inactive_fg).bg(self.tab_line_bg)
    }

    pub fn error(&self) -> Style {
        Self::bold(self.status_error)
    }

    pub fn warning(&self) -> Style {
        Self::bold(self.status_warning)
    }

    /// Helper text and placeholders
    pub fn muted(&self) -> Style {
        Style::new().fg(self.text_muted)
    }

    pub fn text(&self) -> Style {
        Style::new().fg(self.text_primary)
    }

    pub fn text_secondary(&self) -> Style {
        Style::new().fg(self.text_secondary)
    }

    pub fn accent(&self) -> Style {
        Style::new().fg(self.accent_primary)
    }
}
