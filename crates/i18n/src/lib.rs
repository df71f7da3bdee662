//! Internationalization support for arbor.
//!
//! All user-facing strings go through the [`Translation`] trait. The active
//! translation is chosen once at startup with [`init_with_language`] and
//! read everywhere with [`t`].

use std::sync::OnceLock;

mod detect;
pub mod en;
mod placeholder;
pub mod ru;

pub use detect::{detect_language, normalize_lang};
pub use placeholder::resolve_placeholder_string;

/// Global translation instance
static TRANSLATION: OnceLock<Box<dyn Translation>> = OnceLock::new();

/// Translation trait for all user-facing strings
pub trait Translation: Send + Sync {
    // Worktree panel
    fn worktrees_title(&self) -> &str;
    fn worktree_detail_title(&self) -> &str;
    fn no_worktrees(&self) -> &str;
    fn worktree_path_label(&self) -> &str;
    fn worktree_main_marker(&self) -> &str;
    fn worktree_current_marker(&self) -> &str;

    // Binding descriptions
    fn enter_worktree(&self) -> &str;
    fn delete_worktree(&self) -> &str;
    fn return_to_previous(&self) -> &str;
    fn quit(&self) -> &str;

    // Delete flow
    fn delete_worktree_title(&self) -> &str;
    /// Template with a `{{worktreeName}}` placeholder.
    fn delete_worktree_prompt(&self) -> &str;
    /// Template with a `{{worktreeName}}` placeholder.
    fn force_delete_worktree_prompt(&self) -> &str;
    fn cant_delete_main_worktree(&self) -> &str;
    fn cant_delete_current_worktree(&self) -> &str;

    // Command log
    fn action_delete_worktree(&self) -> &str;

    // Errors
    fn error_title(&self) -> &str;
    fn git_not_found(&self) -> &str;
    fn not_a_repository(&self, path: &str) -> String;

    // UI elements
    fn ui_yes(&self) -> &str;
    fn ui_no(&self) -> &str;
    fn ui_ok(&self) -> &str;
}

/// Initialize translation system with specified language.
///
/// If lang is "auto", detect from environment variables.
pub fn init_with_language(lang: &str) {
    let detected = if lang == "auto" || lang.is_empty() {
        detect_language()
    } else {
        normalize_lang(lang)
    };

    let _ = TRANSLATION.set(translation_for(&detected));
}

fn translation_for(lang: &str) -> Box<dyn Translation> {
    match lang {
        "ru" => Box::new(ru::Russian),
        _ => Box::new(en::English),
    }
}

/// Get the current translation
pub fn t() -> &'static dyn Translation {
    TRANSLATION
        .get()
        .map(|b| b.as_ref())
        .unwrap_or(&en::English)
}
