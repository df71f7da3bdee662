//! Key binding specification and parsing of configured key strings.
//!
//! Key strings are either a single character (`d`, `D`, `?`) or a bracketed
//! name with optional modifier prefixes (`<space>`, `<enter>`, `<c-d>`,
//! `<a-x>`, `<f5>`).

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use thiserror::Error;

/// A key binding specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// The key code (e.g., Char('d'), Enter, F1)
    pub code: KeyCode,
    /// Required modifiers (e.g., ALT, CTRL)
    pub modifiers: KeyModifiers,
}

/// Error parsing a configured key string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key string")]
    Empty,
    #[error("unknown key: {0}")]
    Unknown(String),
}

/// Named keys accepted inside `<...>`.
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("space", KeyCode::Char(' ')),
    ("enter", KeyCode::Enter),
    ("esc", KeyCode::Esc),
    ("tab", KeyCode::Tab),
    ("backtab", KeyCode::BackTab),
    ("backspace", KeyCode::Backspace),
    ("delete", KeyCode::Delete),
    ("insert", KeyCode::Insert),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("pgup", KeyCode::PageUp),
    ("pgdown", KeyCode::PageDown),
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
];

impl KeyBinding {
    /// Create a new key binding.
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding without modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Create a Ctrl+key binding.
    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Check if a key event matches this binding.
    ///
    /// Shift is ignored for character keys since it is already part of the
    /// character (`D` arrives as `Char('D')` with SHIFT).
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if self.code != key.code {
            return false;
        }
        if matches!(key.code, KeyCode::Char(_)) {
            let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
            (key.modifiers & relevant) == (self.modifiers & relevant)
        } else {
            key.modifiers == self.modifiers
        }
    }

    /// Parse a configured key string, falling back to `default` when invalid.
    pub fn parse_or(value: &str, default: KeyBinding) -> KeyBinding {
        match value.parse() {
            Ok(binding) => binding,
            Err(e) => {
                log::warn!("Invalid key binding '{}': {}, using {}", value, e, default);
                default
            }
        }
    }
}

impl FromStr for KeyBinding {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(KeyParseError::Empty);
        }

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self::plain(KeyCode::Char(c)));
        }

        let inner = s
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| KeyParseError::Unknown(s.to_string()))?;

        let mut modifiers = KeyModifiers::NONE;
        let mut name = inner;
        loop {
            if let Some(rest) = name.strip_prefix("c-") {
                modifiers |= KeyModifiers::CONTROL;
                name = rest;
            } else if let Some(rest) = name.strip_prefix("a-") {
                modifiers |= KeyModifiers::ALT;
                name = rest;
            } else if let Some(rest) = name.strip_prefix("s-") {
                modifiers |= KeyModifiers::SHIFT;
                name = rest;
            } else {
                break;
            }
        }

        let mut name_chars = name.chars();
        if let (Some(c), None) = (name_chars.next(), name_chars.next()) {
            return Ok(Self::new(KeyCode::Char(c), modifiers));
        }

        let lower = name.to_lowercase();
        if let Some((_, code)) = NAMED_KEYS.iter().find(|(n, _)| *n == lower) {
            return Ok(Self::new(*code, modifiers));
        }

        if let Some(num) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            if (1..=12).contains(&num) {
                return Ok(Self::new(KeyCode::F(num), modifiers));
            }
        }

        Err(KeyParseError::Unknown(s.to_string()))
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::F(n) => format!("f{}", n),
            code => NAMED_KEYS
                .iter()
                .find(|(_, c)| *c == code)
                .map(|(n, _)| n.to_string())
                .unwrap_or_else(|| format!("{:?}", code).to_lowercase()),
        };

        let is_plain_char =
            matches!(self.code, KeyCode::Char(c) if c != ' ') && self.modifiers.is_empty();
        if is_plain_char {
            return write!(f, "{}", name);
        }

        let mut prefix = String::new();
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            prefix.push_str("c-");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            prefix.push_str("a-");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            prefix.push_str("s-");
        }
        write!(f, "<{}{}>", prefix, name)
    }
}

impl From<KeyEvent> for KeyBinding {
    fn from(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}
