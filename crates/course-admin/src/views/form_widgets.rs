//! Building blocks shared by the form and the popups

use course_admin_theme::Theme;
use ratatui::{
    layout::{Alignment, Margin, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Label column width, including the colon
const LABEL_WIDTH: usize = 12;

/// Footer hint entry: key and what it does
pub type FooterHint<'a> = (&'a str, &'a str);

pub fn footer_line<'a>(hints: &[FooterHint<'a>], theme: &Theme) -> Line<'a> {
    let mut spans = vec![Span::raw(" ")];
    for (key, label) in hints {
        spans.push(Span::styled(*key, theme.key_hint().bold()));
        spans.push(Span::styled(format!(" {}  ", label), theme.muted()));
    }
    Line::from(spans)
}

/// Dim the screen and draw a centered, bordered popup
///
/// Returns the popup's inner area.
pub fn render_popup(
    f: &mut Frame,
    area: Rect,
    height: u16,
    title: &str,
    footer: Line<'_>,
    theme: &Theme,
) -> Rect {
    let overlay = Block::default().style(
        Style::default()
            .bg(ratatui::style::Color::Black)
            .add_modifier(Modifier::DIM),
    );
    f.render_widget(overlay, area);

    let width = (area.width * 60 / 100).clamp(40.min(area.width), 72.min(area.width));
    let height = height.min(area.height);
    let popup = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(theme.panel_title().add_modifier(Modifier::BOLD))
        .title_bottom(footer)
        .title_alignment(Alignment::Center)
        .border_style(theme.panel_border().add_modifier(Modifier::BOLD))
        .style(theme.panel_background());
    f.render_widget(block, popup);

    popup.inner(Margin {
        horizontal: 2,
        vertical: 1,
    })
}

/// One labelled input line: `> Label:     value▌`
pub fn render_field(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    placeholder: Option<&str>,
    theme: &Theme,
) {
    let indicator = if focused { "> " } else { "  " };
    let label_style = if focused {
        theme.text().add_modifier(Modifier::BOLD)
    } else {
        theme.text()
    };
    let label = format!("{:width$}", format!("{}:", label), width = LABEL_WIDTH);
    let cursor = if focused {
        Span::styled("▌", theme.accent())
    } else {
        Span::raw("")
    };

    let mut spans = vec![
        Span::styled(indicator, theme.accent().bold()),
        Span::styled(label, label_style),
    ];

    match (value.is_empty(), placeholder) {
        (true, Some(placeholder)) => {
            spans.push(cursor);
            spans.push(Span::styled(
                placeholder.to_string(),
                theme.muted().italic().add_modifier(Modifier::DIM),
            ));
        }
        _ => {
            let value_style = if focused {
                theme.selection_bg().fg(theme.selected_fg)
            } else {
                theme.text()
            };
            spans.push(Span::styled(value.to_string(), value_style));
            spans.push(cursor);
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
