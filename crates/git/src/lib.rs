//! Git integration for arbor.
//!
//! Provides repository discovery and the git-backed worktree backend.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

use anyhow::{bail, Context, Result};

pub mod worktree;

pub use worktree::{list_worktrees, parse_porcelain, GitWorktreeBackend};

/// Global flag for git availability on system.
static GIT_AVAILABLE: OnceLock<bool> = OnceLock::new();

/// Check if git is available on system.
pub fn is_available() -> bool {
    *GIT_AVAILABLE.get_or_init(|| {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    })
}

/// Find git repository root by walking up from a path.
///
/// Accepts both `.git` directories and `.git` files (linked worktrees).
pub fn find_repo_root(path: &Path) -> Option<PathBuf> {
    let mut current = path;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Top-level directory of the worktree containing `dir`.
pub fn show_toplevel(dir: &Path) -> Result<PathBuf> {
    let output = run_git(dir, &["rev-parse", "--show-toplevel"])?;
    if !output.status.success() {
        bail!("{}", stderr_message(&output));
    }
    let stdout = String::from_utf8(output.stdout).context("git output is not UTF-8")?;
    Ok(PathBuf::from(stdout.trim()))
}

/// Run git with `args` inside `dir`.
pub(crate) fn run_git(dir: &Path, args: &[&str]) -> Result<Output> {
    log::debug!("git -C {} {}", dir.display(), args.join(" "));
    Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .with_context(|| format!("Failed to run git {}", args.join(" ")))
}

/// Trimmed stderr of a failed git command, falling back to the exit status.
pub(crate) fn stderr_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        stderr
    }
}

/// Compare paths after resolving symlinks where possible.
pub(crate) fn same_path(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
