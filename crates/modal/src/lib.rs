//! Modal dialog system for arbor.
//!
//! Provides themed modal dialogs for user interaction.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{buffer::Buffer, layout::Rect};

use arbor_theme::Theme;

pub mod confirm;
pub mod error;
pub mod layout;

pub use confirm::ConfirmModal;
pub use error::ErrorModal;
pub use layout::{calculate_modal_width, centered_rect_with_size, max_line_width};

/// Modal window result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalResult<T> {
    /// User confirmed the action with a result.
    Confirmed(T),
    /// User cancelled the action.
    Cancelled,
}

/// Active modal window.
#[derive(Debug)]
pub enum ActiveModal {
    /// Confirmation modal (Yes/No)
    Confirm(Box<ConfirmModal>),
    /// Error message modal
    Error(Box<ErrorModal>),
}

/// Trait for all modal windows.
pub trait Modal {
    /// Modal window result type.
    type Result;

    /// Render the modal window with theme.
    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Handle keyboard event.
    /// Returns Some(result) if the modal window should close.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>>;

    /// Handle mouse event.
    /// Returns Some(result) if the modal window should close.
    fn handle_mouse(&mut self, _mouse: MouseEvent) -> Result<Option<ModalResult<Self::Result>>> {
        Ok(None)
    }
}
