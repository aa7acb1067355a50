//! Key bindings
//!
//! Maps key presses to [`CommandId`]s. Patterns are plain text so the
//! default keymap reads like a config file:
//!
//! - single keys: `"q"`, `"G"`, `":"` (case-sensitive)
//! - modifiers: `"ctrl+r"`, `"shift+tab"`
//! - named keys: `"enter"`, `"esc"`, `"up"`, `"backtab"`, `"f1"`
//! - two-key sequences: `"g g"`, `"g o"`

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// How long the first key of a sequence waits for the second
const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key pattern, e.g. `"ctrl+r"` or `"g g"`
    pub keys: String,
    /// What the footer shows, e.g. `"Ctrl+R"`
    pub hint: String,
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPattern {
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    Sequence {
        first: char,
        second: char,
    },
}

/// Parse a textual key pattern; `None` if it is malformed
pub fn parse_key_pattern(pattern: &str) -> Option<KeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let mut parts = pattern.split_whitespace();
        let (first, second) = (parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }
        return match (single_char(first), single_char(second)) {
            (Some(first), Some(second)) => Some(KeyPattern::Sequence { first, second }),
            _ => None,
        };
    }

    if let Some(c) = single_char(pattern) {
        // Terminals report uppercase letters with SHIFT held
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(KeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key = lower.as_str();
    while let Some((modifier, rest)) = key.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => return None,
        }
        key = rest;
    }

    Some(KeyPattern::Single {
        code: parse_key_code(key)?,
        modifiers,
    })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    let code = match s {
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "space" => KeyCode::Char(' '),
        s if s.len() > 1 && s.starts_with('f') => KeyCode::F(s[1..].parse().ok()?),
        s => KeyCode::Char(single_char(s)?),
    };
    Some(code)
}

/// First key of a sequence waiting for its second key
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

impl PendingKey {
    pub fn new(key: char) -> Self {
        Self {
            key,
            timestamp: Instant::now(),
        }
    }

    fn is_fresh(&self) -> bool {
        self.timestamp.elapsed() < SEQUENCE_TIMEOUT
    }
}

/// Outcome of matching one key press
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyMatch {
    /// Candidate commands in keymap order; the first one the active view accepts wins
    pub commands: Vec<CommandId>,
    /// The key started a sequence and should be remembered
    pub pending: Option<char>,
}

#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, KeyPattern)>,
}

impl Keymap {
    /// Build a keymap, skipping (and logging) malformed patterns
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let bindings = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring invalid key pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();
        Self { bindings }
    }

    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let typed = match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        };

        if let (Some(pending), Some(current)) = (pending.filter(|p| p.is_fresh()), typed) {
            let completed = self.bindings.iter().find(|(_, pattern)| {
                *pattern
                    == KeyPattern::Sequence {
                        first: pending.key,
                        second: current,
                    }
            });
            if let Some((binding, _)) = completed {
                return KeyMatch {
                    commands: vec![binding.command],
                    pending: None,
                };
            }
        }

        let commands: Vec<CommandId> = self
            .bindings
            .iter()
            .filter(|(_, pattern)| match pattern {
                // BackTab arrives with or without SHIFT depending on the terminal
                KeyPattern::Single {
                    code: KeyCode::BackTab,
                    ..
                } => key.code == KeyCode::BackTab,
                KeyPattern::Single { code, modifiers } => {
                    key.code == *code && key.modifiers == *modifiers
                }
                KeyPattern::Sequence { .. } => false,
            })
            .map(|(binding, _)| binding.command)
            .collect();

        if !commands.is_empty() {
            return KeyMatch {
                commands,
                pending: None,
            };
        }

        let starts_sequence = typed.filter(|c| {
            self.bindings
                .iter()
                .any(|(_, pattern)| matches!(pattern, KeyPattern::Sequence { first, .. } if first == c))
        });

        KeyMatch {
            commands: Vec::new(),
            pending: starts_sequence,
        }
    }

    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(binding, _)| binding)
    }

    /// All distinct hints for `command`, joined with `/` (e.g. `"j/↓"`)
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for binding in self.bindings().filter(|b| b.command == command) {
            if !hints.contains(&binding.hint.as_str()) {
                hints.push(&binding.hint);
            }
        }
        (!hints.is_empty()).then(|| hints.join("/"))
    }
}
