//! Worktree panel for arbor.
//!
//! Owns the panel's command bindings, the delete confirmation flow and
//! navigation into a worktree. Every effect goes through the host traits
//! from `arbor-core`; the panel itself keeps only the delete flow state.

pub mod bindings;
pub mod controller;
pub mod delete_flow;
pub mod detail;
pub mod guard;
pub mod navigation;

#[cfg(test)]
pub(crate) mod test_support;

pub use bindings::{Binding, BindingTable, WorktreeAction};
pub use controller::WorktreesController;
pub use delete_flow::{DeleteFlow, DeleteFlowState, DeleteMode, DeleteOutcome};
pub use detail::{render_detail, DetailView};
pub use guard::guarded;
pub use navigation::enter;
