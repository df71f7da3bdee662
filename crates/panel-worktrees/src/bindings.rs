//! Key bindings of the worktree panel.

use crossterm::event::{KeyCode, KeyEvent};

use arbor_config::UniversalKeys;
use arbor_core::KeyBinding;
use arbor_i18n as i18n;

/// Item-scoped action a binding triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorktreeAction {
    /// Switch into the selected worktree
    Enter,
    /// Remove the selected worktree (with confirmation)
    Delete,
}

impl WorktreeAction {
    /// Human-readable description for help and status bar surfaces.
    pub fn description(self) -> &'static str {
        let t = i18n::t();
        match self {
            WorktreeAction::Enter => t.enter_worktree(),
            WorktreeAction::Delete => t.delete_worktree(),
        }
    }
}

/// One entry of the binding table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: KeyBinding,
    pub action: WorktreeAction,
    pub description: &'static str,
}

/// Ordered, immutable list of panel bindings.
///
/// Built once from the configured keys; rebinding means building a new table.
#[derive(Debug, Clone)]
pub struct BindingTable {
    bindings: Vec<Binding>,
}

impl BindingTable {
    /// Build the table from `[keybinding.universal]`.
    pub fn from_config(keys: &UniversalKeys) -> Self {
        let select = KeyBinding::parse_or(&keys.select, KeyBinding::plain(KeyCode::Char(' ')));
        let remove = KeyBinding::parse_or(&keys.remove, KeyBinding::plain(KeyCode::Char('d')));

        let bindings = [
            (select, WorktreeAction::Enter),
            (remove, WorktreeAction::Delete),
        ]
        .into_iter()
        .map(|(key, action)| Binding {
            key,
            action,
            description: action.description(),
        })
        .collect();

        Self { bindings }
    }

    /// Action bound to `key`, first match wins.
    pub fn lookup(&self, key: &KeyEvent) -> Option<WorktreeAction> {
        self.bindings
            .iter()
            .find(|binding| binding.key.matches(key))
            .map(|binding| binding.action)
    }

    /// Bindings in table order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::from_config(&UniversalKeys::default())
    }
}
