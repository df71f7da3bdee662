//! Application-level key bindings (list movement, return, quit).

use crossterm::event::{KeyCode, KeyEvent};

use arbor_config::UniversalKeys;
use arbor_core::KeyBinding;

/// Action handled by the application rather than the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    NextItem,
    PrevItem,
    FirstItem,
    LastItem,
    Return,
    Quit,
}

/// Parsed `[keybinding.universal]` keys the application handles itself.
#[derive(Debug, Clone)]
pub struct GlobalKeys {
    pub next_item: KeyBinding,
    pub prev_item: KeyBinding,
    pub return_key: KeyBinding,
    pub quit: KeyBinding,
}

impl GlobalKeys {
    pub fn from_config(keys: &UniversalKeys) -> Self {
        Self {
            next_item: KeyBinding::parse_or(&keys.next_item, KeyBinding::plain(KeyCode::Char('j'))),
            prev_item: KeyBinding::parse_or(&keys.prev_item, KeyBinding::plain(KeyCode::Char('k'))),
            return_key: KeyBinding::parse_or(&keys.return_key, KeyBinding::plain(KeyCode::Esc)),
            quit: KeyBinding::parse_or(&keys.quit, KeyBinding::plain(KeyCode::Char('q'))),
        }
    }

    /// Resolve a key press. Arrow, Home and End keys always move the selection.
    pub fn action(&self, key: &KeyEvent) -> Option<GlobalAction> {
        if self.quit.matches(key) {
            return Some(GlobalAction::Quit);
        }
        if self.return_key.matches(key) {
            return Some(GlobalAction::Return);
        }
        if self.next_item.matches(key) || key.code == KeyCode::Down {
            return Some(GlobalAction::NextItem);
        }
        if self.prev_item.matches(key) || key.code == KeyCode::Up {
            return Some(GlobalAction::PrevItem);
        }
        match key.code {
            KeyCode::Home => Some(GlobalAction::FirstItem),
            KeyCode::End => Some(GlobalAction::LastItem),
            _ => None,
        }
    }
}

impl Default for GlobalKeys {
    fn default() -> Self {
        Self::from_config(&UniversalKeys::default())
    }
}
