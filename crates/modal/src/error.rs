//! Error message modal.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use arbor_i18n as i18n;
use arbor_theme::Theme;

use crate::{calculate_modal_width, centered_rect_with_size, max_line_width, Modal, ModalResult};

/// Modal showing a single error message with an OK button.
#[derive(Debug, Clone)]
pub struct ErrorModal {
    title: String,
    message: String,
}

impl ErrorModal {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Modal for ErrorModal {
    type Result = ();

    fn render(&mut self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let ok_label = format!("[ {} ]", i18n::t().ui_ok());
        let modal_width = calculate_modal_width(
            [
                self.title.width() as u16 + 2,
                max_line_width(&self.message),
                ok_label.width() as u16,
            ]
            .into_iter(),
            area.width,
        );

        let text_width = modal_width.saturating_sub(4).max(1) as usize;
        let message_lines: usize = self
            .message
            .lines()
            .map(|line| line.width().div_ceil(text_width).max(1))
            .sum::<usize>()
            .max(1);
        let modal_height = (message_lines + 4) as u16;
        let modal_area = centered_rect_with_size(modal_width, modal_height, area);

        Clear.render(modal_area, buf);

        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", self.title),
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error))
            .style(Style::default().bg(theme.bg).fg(theme.fg));

        let mut lines: Vec<Line> = self.message.lines().map(Line::from).collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            ok_label,
            Style::default()
                .fg(theme.selected_fg)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD),
        )));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(modal_area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<Option<ModalResult<Self::Result>>> {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
                Ok(Some(ModalResult::Confirmed(())))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_closes_on_enter_and_esc() {
        let mut modal = ErrorModal::new("Error", "boom");
        for code in [KeyCode::Enter, KeyCode::Esc] {
            assert_eq!(
                modal
                    .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
                    .unwrap(),
                Some(ModalResult::Confirmed(()))
            );
        }
    }

    #[test]
    fn test_ignores_other_keys() {
        let mut modal = ErrorModal::new("Error", "boom");
        let result = modal
            .handle_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE))
            .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_render_shows_message() {
        let mut modal = ErrorModal::new("Error", "worktree is dirty");
        let area = Rect::new(0, 0, 60, 20);
        let mut buf = Buffer::empty(area);
        modal.render(area, &mut buf, &Theme::default());

        let rendered: String = buf.content().iter().map(|cell| cell.symbol()).collect();
        assert!(rendered.contains("worktree is dirty"));
    }
}
