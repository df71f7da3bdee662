//! Worktree listing and removal through the git CLI.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use arbor_core::{BackendError, Worktree, WorktreeBackend};

use crate::{run_git, same_path, show_toplevel, stderr_message};

/// List the worktrees of the repository containing `dir`.
///
/// The first entry git reports is the main worktree; the one whose path
/// matches `dir`'s top level is the current one.
pub fn list_worktrees(dir: &Path) -> Result<Vec<Worktree>> {
    let toplevel = show_toplevel(dir)?;
    let output = run_git(dir, &["worktree", "list", "--porcelain"])?;
    if !output.status.success() {
        bail!("{}", stderr_message(&output));
    }
    let stdout = String::from_utf8(output.stdout).context("git output is not UTF-8")?;
    Ok(parse_porcelain(&stdout, &toplevel))
}

/// Parse `git worktree list --porcelain` output.
///
/// Bare repository entries are skipped since they have no checkout.
pub fn parse_porcelain(output: &str, current: &Path) -> Vec<Worktree> {
    let mut worktrees = Vec::new();
    let mut block: Option<(PathBuf, bool)> = None;
    let mut is_first = true;

    let mut finish = |block: Option<(PathBuf, bool)>, worktrees: &mut Vec<Worktree>| {
        if let Some((path, is_bare)) = block {
            let is_main = std::mem::replace(&mut is_first, false);
            if !is_bare {
                worktrees.push(Worktree {
                    name: worktree_name(&path),
                    is_main,
                    is_current: same_path(&path, current),
                    path,
                });
            }
        }
    };

    for line in output.lines() {
        if let Some(path) = line.strip_prefix("worktree ") {
            finish(block.take(), &mut worktrees);
            block = Some((PathBuf::from(path), false));
        } else if line == "bare" {
            if let Some((_, is_bare)) = block.as_mut() {
                *is_bare = true;
            }
        }
    }
    finish(block.take(), &mut worktrees);

    worktrees
}

fn worktree_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Worktree backend running `git worktree remove`.
#[derive(Debug, Clone)]
pub struct GitWorktreeBackend {
    repo_dir: PathBuf,
}

impl GitWorktreeBackend {
    /// Create a backend operating on the repository containing `repo_dir`.
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }

    /// Point the backend at another repository (after switching).
    pub fn set_repo_dir(&mut self, repo_dir: impl Into<PathBuf>) {
        self.repo_dir = repo_dir.into();
    }
}

impl WorktreeBackend for GitWorktreeBackend {
    fn delete(&mut self, path: &Path, force: bool) -> Result<(), BackendError> {
        let path_arg = path.to_string_lossy();
        let mut args = vec!["worktree", "remove"];
        if force {
            args.push("--force");
        }
        args.push(&path_arg);

        // Failing to spawn git cannot be fixed by forcing.
        let output =
            run_git(&self.repo_dir, &args).map_err(|e| BackendError::Fatal(format!("{:#}", e)))?;

        if output.status.success() {
            log::info!("Removed worktree {} (force: {})", path.display(), force);
            Ok(())
        } else {
            let message = stderr_message(&output);
            log::warn!("git worktree remove failed: {}", message);
            Err(BackendError::Failed(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PORCELAIN: &str = "\
worktree /home/user/repo
HEAD 1b2c3d4e5f60718293a4b5c6d7e8f90123456789
branch refs/heads/main

worktree /home/user/worktrees/feature
HEAD 0a1b2c3d4e5f60718293a4b5c6d7e8f901234567
branch refs/heads/feature
locked

worktree /home/user/worktrees/hotfix
HEAD 9f8e7d6c5b4a39281706f5e4d3c2b1a098765432
detached
";

    #[test]
    fn test_parse_porcelain_marks_main_and_current() {
        let worktrees = parse_porcelain(PORCELAIN, Path::new("/home/user/worktrees/feature"));
        assert_eq!(worktrees.len(), 3);

        assert_eq!(worktrees[0].name, "repo");
        assert!(worktrees[0].is_main);
        assert!(!worktrees[0].is_current);

        assert_eq!(worktrees[1].name, "feature");
        assert_eq!(worktrees[1].path, PathBuf::from("/home/user/worktrees/feature"));
        assert!(!worktrees[1].is_main);
        assert!(worktrees[1].is_current);

        assert_eq!(worktrees[2].name, "hotfix");
        assert!(worktrees[2].is_deletable());
    }

    #[test]
    fn test_parse_porcelain_skips_bare_entry() {
        let output = "\
worktree /srv/repo.git
bare

worktree /srv/checkouts/dev
HEAD 0a1b2c3d4e5f60718293a4b5c6d7e8f901234567
branch refs/heads/dev
";
        let worktrees = parse_porcelain(output, Path::new("/srv/checkouts/dev"));
        assert_eq!(worktrees.len(), 1);
        assert_eq!(worktrees[0].name, "dev");
        // The bare repository is the main one, not the first checkout.
        assert!(!worktrees[0].is_main);
        assert!(worktrees[0].is_current);
    }

    #[test]
    fn test_parse_porcelain_empty_output() {
        assert!(parse_porcelain("", Path::new("/repo")).is_empty());
    }

    #[test]
    fn test_backend_reports_failure_outside_repository() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = GitWorktreeBackend::new(dir.path());

        let result = backend.delete(&dir.path().join("missing"), false);
        // Without git installed the error is fatal, otherwise git refuses.
        assert!(result.is_err());
        assert!(!result.unwrap_err().message().is_empty());
    }
}
