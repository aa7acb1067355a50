//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub emoji: &'static str,
    pub message: String,
    /// `HH:MM:SS`, empty for the welcome message
    pub timestamp: String,
    /// What produced the message, shown right-aligned
    pub source: String,
    pub message_style: Style,
    pub bg_color: Color,
    /// Style for timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_muted);

        match state.status_bar.latest() {
            Some(msg) => {
                let fg = match msg.kind {
                    StatusKind::Running => theme.status_running,
                    StatusKind::Success => theme.status_success,
                    StatusKind::Error => theme.status_error,
                    StatusKind::Warning => theme.status_warning,
                    StatusKind::Info => theme.status_info,
                };
                Self {
                    emoji: msg.kind.emoji(),
                    message: msg.message.clone(),
                    timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
                    source: msg.source.clone(),
                    message_style: Style::default().fg(fg).add_modifier(Modifier::BOLD),
                    bg_color: theme.bg_primary,
                    metadata_style,
                }
            }
            None => Self {
                emoji: "👋",
                message: "Welcome to Course Admin".to_string(),
                timestamp: String::new(),
                source: String::new(),
                message_style: Style::default()
                    .fg(theme.text_muted)
                    .add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style,
            },
        }
    }
}
