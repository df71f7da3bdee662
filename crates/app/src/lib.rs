//! Application host for arbor.
//!
//! This crate provides:
//! - `App` - event loop and input routing
//! - `AppState` - the host context implementing every panel collaborator
//! - background worktree refresh and screen rendering
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         arbor (bin)                           │
//! │  main.rs - config, repository check, terminal setup           │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//!                                ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                    arbor-app (this crate)                     │
//! │  App, AppState, RefreshWorker, ui                             │
//! └──────────────────────────────────────────────────────────────┘
//!            │                   │                   │
//!            ▼                   ▼                   ▼
//!  ┌──────────────────┐  ┌──────────────┐  ┌──────────────────┐
//!  │ panel-worktrees  │  │    modal     │  │       git        │
//!  └──────────────────┘  └──────────────┘  └──────────────────┘
//! ```

pub mod app;
pub mod keys;
pub mod list;
pub mod refresh;
pub mod state;
pub mod ui;

pub use app::App;
pub use keys::{GlobalAction, GlobalKeys};
pub use list::WorktreeList;
pub use refresh::{Loader, RefreshResult, RefreshWorker};
pub use state::{AppState, Focus};
