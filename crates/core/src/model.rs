//! Worktree model shared between the list host and the panel.

use std::path::{Path, PathBuf};

/// A git worktree as shown in the worktree list.
///
/// Owned by the list context; the panel only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worktree {
    /// Display name (directory name of the worktree)
    pub name: String,
    /// Absolute path of the worktree checkout
    pub path: PathBuf,
    /// Main worktree of the repository (the primary checkout)
    pub is_main: bool,
    /// Worktree the process is currently running in
    pub is_current: bool,
}

impl Worktree {
    /// Create a linked worktree that is neither main nor current.
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            is_main: false,
            is_current: false,
        }
    }

    /// Mark the worktree as the repository's main worktree.
    pub fn main(mut self) -> Self {
        self.is_main = true;
        self
    }

    /// Mark the worktree as the one currently checked out.
    pub fn current(mut self) -> Self {
        self.is_current = true;
        self
    }

    /// Worktree path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the worktree may be removed at all.
    pub fn is_deletable(&self) -> bool {
        !self.is_main && !self.is_current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_worktree_is_deletable() {
        let wt = Worktree::new("feature", "/repo/feature");
        assert!(wt.is_deletable());
        assert_eq!(wt.path(), Path::new("/repo/feature"));
    }

    #[test]
    fn test_main_and_current_are_protected() {
        assert!(!Worktree::new("repo", "/repo").main().is_deletable());
        assert!(!Worktree::new("hotfix", "/hotfix").current().is_deletable());
        assert!(!Worktree::new("repo", "/repo").main().current().is_deletable());
    }
}
