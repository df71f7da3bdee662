//! Mouse event handling.

use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use super::App;
use crate::state::Focus;

impl App {
    /// Handle mouse event
    pub(crate) fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.active_modal.is_some() {
            self.handle_modal_mouse(mouse)?;
            self.state.needs_redraw = true;
            return Ok(());
        }

        let pos = Position::new(mouse.column, mouse.row);
        let layout = self.state.layout;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if layout.list.contains(pos) {
                    self.state.focus = Focus::List;
                    if let Some(index) = self.row_at(layout.list, mouse.row) {
                        self.state.worktrees.select(index);
                        if let Err(e) = self.controller.on_click(&mut self.state) {
                            self.state.report_error(&e);
                        }
                    }
                } else if layout.detail.contains(pos) {
                    self.state.focus = Focus::Detail;
                }
            }
            MouseEventKind::ScrollDown if layout.list.contains(pos) => {
                self.state.worktrees.select_next();
            }
            MouseEventKind::ScrollUp if layout.list.contains(pos) => {
                self.state.worktrees.select_prev();
            }
            _ => return Ok(()),
        }

        self.state.needs_redraw = true;
        Ok(())
    }

    /// List index under screen row `row`, inside the bordered list area.
    fn row_at(&self, area: Rect, row: u16) -> Option<usize> {
        let first_row = area.y + 1;
        let last_row = area.y + area.height.saturating_sub(1);
        if row < first_row || row >= last_row {
            return None;
        }
        let index = self.state.worktrees.state.offset() + (row - first_row) as usize;
        (index < self.state.worktrees.len()).then_some(index)
    }
}
