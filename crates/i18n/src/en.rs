use super::Translation;

/// English translation (default/fallback)
pub struct English;

impl Translation for English {
    // Worktree panel
    fn worktrees_title(&self) -> &str {
        "Worktrees"
    }

    fn worktree_detail_title(&self) -> &str {
        "Worktree"
    }

    fn no_worktrees(&self) -> &str {
        "No worktrees"
    }

    fn worktree_path_label(&self) -> &str {
        "Path"
    }

    fn worktree_main_marker(&self) -> &str {
        "(main)"
    }

    fn worktree_current_marker(&self) -> &str {
        "(current)"
    }

    // Binding descriptions
    fn enter_worktree(&self) -> &str {
        "Enter worktree"
    }

    fn delete_worktree(&self) -> &str {
        "Delete worktree"
    }

    fn return_to_previous(&self) -> &str {
        "Return"
    }

    fn quit(&self) -> &str {
        "Quit"
    }

    // Delete flow
    fn delete_worktree_title(&self) -> &str {
        "Delete worktree"
    }

    fn delete_worktree_prompt(&self) -> &str {
        "Are you sure you want to delete worktree '{{worktreeName}}'?"
    }

    fn force_delete_worktree_prompt(&self) -> &str {
        "'{{worktreeName}}' contains modified or untracked files,\nor is locked. Delete it anyway?"
    }

    fn cant_delete_main_worktree(&self) -> &str {
        "You cannot delete the main worktree"
    }

    fn cant_delete_current_worktree(&self) -> &str {
        "You cannot delete the current worktree"
    }

    // Command log
    fn action_delete_worktree(&self) -> &str {
        "Delete worktree"
    }

    // Errors
    fn error_title(&self) -> &str {
        "Error"
    }

    fn git_not_found(&self) -> &str {
        "git not found in PATH"
    }

    fn not_a_repository(&self, path: &str) -> String {
        format!("Not a git repository: {}", path)
    }

    // UI elements
    fn ui_yes(&self) -> &str {
        "Yes"
    }

    fn ui_no(&self) -> &str {
        "No"
    }

    fn ui_ok(&self) -> &str {
        "OK"
    }
}
