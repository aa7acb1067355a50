//! Status Bar State
//!
//! The status bar replaces toast notifications: every API outcome and user
//! warning lands here and the newest one is shown.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A call is in progress
    Running,
    /// A save or delete went through
    Success,
    /// An API call failed
    Error,
    /// User input was refused (blank title, invalid form, ...)
    Warning,
    /// Informational message
    Info,
}

impl StatusKind {
    /// Icon shown in front of the message
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }
}

/// A single status message with metadata
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// When the message was created
    pub timestamp: DateTime<Local>,
    /// Type of status
    pub kind: StatusKind,
    /// The message text, one short sentence
    pub message: String,
    /// What triggered the message (e.g. "Save course")
    pub source: String,
}

impl StatusMessage {
    /// Create a message stamped with the current local time
    pub fn new(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source: source.into(),
        }
    }
}

/// Status bar state - bounded history of messages
#[derive(Debug, Clone)]
pub struct StatusBarState {
    /// Message history, newest at the back
    pub messages: VecDeque<StatusMessage>,
    /// Maximum messages to keep
    pub max_history: usize,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            messages: VecDeque::new(),
            max_history: 100,
        }
    }
}

impl StatusBarState {
    /// The message currently on display
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Push a new message, trimming the oldest if over limit
    pub fn push(&mut self, message: StatusMessage) {
        self.messages.push_back(message);
        if self.messages.len() > self.max_history {
            self.messages.pop_front();
        }
    }

    /// Forget all messages; the bar falls back to the welcome text
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
