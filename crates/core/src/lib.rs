//! Core types and traits for arbor panels.
//!
//! This crate provides the foundational abstractions shared by the
//! worktree panel and its host without coupling either side to the other:
//! the worktree model, the panel error taxonomy, the collaborator traits
//! the panel calls into, and key binding parsing.

pub mod command;
pub mod error;
pub mod event;
pub mod host;
pub mod keys;
pub mod model;

pub use command::{ConfirmAction, ConfirmationRequest, RefreshMode, RefreshScope};
pub use error::{BackendError, PanelError};
pub use event::{Event, EventHandler};
pub use host::{
    ActionLog, ConfirmService, ListContext, NavigationHost, PanelHost, RefreshService,
    WorktreeBackend,
};
pub use keys::{KeyBinding, KeyParseError};
pub use model::Worktree;
