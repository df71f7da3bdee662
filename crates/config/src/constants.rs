//! Application-wide constants.

/// Event polling interval (ms)
pub const EVENT_HANDLER_INTERVAL_MS: u64 = 100;

/// Spacing between modal buttons
pub const MODAL_BUTTON_SPACING: u16 = 4;

/// Width of the worktree list relative to the detail pane (percent)
pub const LIST_WIDTH_PERCENT: u16 = 40;
