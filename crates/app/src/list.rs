//! Worktree list with selection.

use std::path::Path;

use ratatui::widgets::ListState;

use arbor_core::Worktree;

/// Worktrees of the active repository plus the selected row.
#[derive(Debug, Default)]
pub struct WorktreeList {
    items: Vec<Worktree>,
    /// Selection and scroll offset, shared with the list widget
    pub state: ListState,
}

impl WorktreeList {
    pub fn new(items: Vec<Worktree>) -> Self {
        let mut list = Self::default();
        list.set_items(items);
        list
    }

    /// Replace the items after a reload.
    ///
    /// The selection follows the previously selected worktree by path; when
    /// it is gone the old index is clamped to the new length.
    pub fn set_items(&mut self, items: Vec<Worktree>) {
        let previous = self.selected().map(|wt| wt.path.clone());
        let previous_index = self.state.selected().unwrap_or(0);

        self.items = items;

        let index = previous
            .and_then(|path| self.items.iter().position(|wt| wt.path == path))
            .or_else(|| {
                (!self.items.is_empty()).then(|| previous_index.min(self.items.len() - 1))
            });
        self.state.select(index);
    }

    /// Drop the worktree at `path`, keeping the selection on the same row
    /// index where possible.
    pub fn remove(&mut self, path: &Path) -> bool {
        let Some(index) = self.items.iter().position(|wt| wt.path == path) else {
            return false;
        };
        self.items.remove(index);
        let selected = self
            .state
            .selected()
            .filter(|_| !self.items.is_empty())
            .map(|i| i.min(self.items.len() - 1));
        self.state.select(selected);
        true
    }

    pub fn items(&self) -> &[Worktree] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> Option<&Worktree> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Select row `index` if it exists.
    pub fn select(&mut self, index: usize) {
        if index < self.items.len() {
            self.state.select(Some(index));
        }
    }

    pub fn select_next(&mut self) {
        if let Some(i) = self.state.selected() {
            self.select((i + 1).min(self.items.len().saturating_sub(1)));
        }
    }

    pub fn select_prev(&mut self) {
        if let Some(i) = self.state.selected() {
            self.select(i.saturating_sub(1));
        }
    }

    pub fn select_first(&mut self) {
        self.select(0);
    }

    pub fn select_last(&mut self) {
        self.select(self.items.len().saturating_sub(1));
    }
}
