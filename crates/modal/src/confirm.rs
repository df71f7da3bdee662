//! Confirmation modal (Yes/No dialog).

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use arbor_config::constants::MODAL_BUTTON_SPACING;
use arbor_i18n as i18n;
use arbor_theme::Theme;

use crate::{calculate_modal_width, centered_rect_with_size, max_line_width, Modal, ModalResult};

/// Confirmation modal window (Yes/No).
///
/// Defaults to "No" so a stray Enter never confirms a destructive action.
#[derive(Debug)]
pub struct ConfirmModal {
    title: String,
    message: String,
    selected: bool, // true = Yes, false = No
    last_buttons_area: Option<Rect>,
}

impl ConfirmModal {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            selected: false,
            last_buttons_area: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether "Yes" is the highlighted button.
    pub fn yes_selected(&self) -> bool {
        self.selected
    }

    fn button_labels() -> (String, String) {
        let t = i18n::t();
        (format!("[ {} ]", t.ui_yes()), format!("[ {} ]", t.ui_no()))
    }

    fn modal_width(&self, screen_width: u16) -> u16 {
        let (yes, no) = Self::button_labels();
        let title_width = self.title.width() as u16 + 2;
        let message_width = max_line_width(&self.message);
        let buttons_width = (yes.width() + no.width()) as u16 + MODAL_BUTTON_SPACING;

        calculate_modal_width(
            [title_width, message_width, buttons_width].into_iter(),
            screen_width,
        )
    }
}

impl Modal for ConfirmModal {
    type Result = bool;

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let modal_width = self.modal_width(area.width);
        // Border (2) and padding (2) leave this much room for the message.
        let text_width = modal_width.saturating_sub(4).max(1) as usize;
        let message_lines: usize = self
            .message
            .lines()
            .map(|line| line.width().div_ceil(text_width).max(1))
            .sum::<usize>()
            .max(1);

        // Top border + message + blank + buttons + bottom border
        let modal_height = (message_lines + 4) as u16;
        let modal_area = centered_rect_with_size(modal_width, modal_height, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default()
                    .fg(theme.accented_fg)
                    .add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accented_fg))
            .style(Style::default().bg(theme.bg).fg(theme.fg));

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(message_lines as u16),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[0], buf);

        let active = Style::default()
            .fg(theme.selected_fg)
            .bg(theme.selected_bg)
            .add_modifier(Modifier::BOLD);
        let inactive = Style::default().fg(theme.accented_fg);
        let (yes_style, no_style) = if self.selected {
            (active, inactive)
        } else {
            (inactive, active)
        };

        let (yes, no) = Self::button_labels();
        let buttons = Line::from(vec![
            Span::styled(yes, yes_style),
            Span::raw(" ".repeat(MODAL_BUTTON_SPACING as usize)),
            Span::styled(no, no_style),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[2], buf);

        self.last_buttons_area = Some(chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.selected = !self.selected;
                Ok(None)
            }
            KeyCode::Enter => Ok(Some(ModalResult::Confirmed(self.selected))),
            KeyCode::Esc => Ok(Some(ModalResult::Cancelled)),
            KeyCode::Char('y') | KeyCode::Char('Y') => Ok(Some(ModalResult::Confirmed(true))),
            KeyCode::Char('n') | KeyCode::Char('N') => Ok(Some(ModalResult::Confirmed(false))),
            _ => Ok(None),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Option<ModalResult<Self::Result>>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }

        let Some(buttons_area) = self.last_buttons_area else {
            return Ok(None);
        };

        if mouse.row < buttons_area.y
            || mouse.row >= buttons_area.y + buttons_area.height
            || mouse.column < buttons_area.x
            || mouse.column >= buttons_area.x + buttons_area.width
        {
            return Ok(None);
        }

        // Buttons are centered: "[ Yes ]    [ No ]"
        let (yes, no) = Self::button_labels();
        let yes_width = yes.width() as u16;
        let no_width = no.width() as u16;
        let total_width = yes_width + MODAL_BUTTON_SPACING + no_width;

        let start_col = buttons_area.x + buttons_area.width.saturating_sub(total_width) / 2;
        let yes_end = start_col + yes_width;
        let no_start = yes_end + MODAL_BUTTON_SPACING;
        let no_end = no_start + no_width;

        if mouse.column >= start_col && mouse.column < yes_end {
            self.selected = true;
            Ok(Some(ModalResult::Confirmed(true)))
        } else if mouse.column >= no_start && mouse.column < no_end {
            self.selected = false;
            Ok(Some(ModalResult::Confirmed(false)))
        } else {
            Ok(None)
        }
    }
}
