//! Screen rendering: worktree list, detail pane, status bar and dialogs.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use arbor_config::constants::LIST_WIDTH_PERCENT;
use arbor_core::Worktree;
use arbor_i18n as i18n;
use arbor_modal::{ActiveModal, Modal};
use arbor_panel_worktrees::WorktreesController;
use arbor_theme::Theme;

use crate::keys::GlobalKeys;
use crate::state::{AppState, Focus, LayoutInfo};

/// Render the whole screen.
pub fn render(
    frame: &mut Frame<'_>,
    state: &mut AppState,
    controller: &WorktreesController,
    keys: &GlobalKeys,
) {
    let area = frame.area();
    let theme = state.theme;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(LIST_WIDTH_PERCENT),
            Constraint::Percentage(100 - LIST_WIDTH_PERCENT),
        ])
        .split(rows[0]);

    state.layout = LayoutInfo {
        list: panes[0],
        detail: panes[1],
    };

    render_list(frame, panes[0], state);

    let view = controller.detail(&*state, theme);
    let detail = Paragraph::new(view.text)
        .block(pane_block(
            &view.title,
            state.focus == Focus::Detail,
            theme,
        ))
        .wrap(Wrap { trim: false });
    frame.render_widget(detail, panes[1]);

    let hints = status_hints(controller, keys, !state.nav_stack.is_empty());
    render_status_bar(frame.buffer_mut(), rows[1], state, &hints);

    if let Some(modal) = state.active_modal.as_mut() {
        let buf = frame.buffer_mut();
        match modal {
            ActiveModal::Confirm(m) => m.render(area, buf, theme),
            ActiveModal::Error(m) => m.render(area, buf, theme),
        }
    }
}

fn pane_block<'a>(title: &str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused {
        theme.accented_fg
    } else {
        theme.disabled
    };
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.bg).fg(theme.fg))
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &mut AppState) {
    let theme = state.theme;
    let t = i18n::t();

    let items: Vec<ListItem> = state
        .worktrees
        .items()
        .iter()
        .map(|wt| ListItem::new(list_line(wt, theme)))
        .collect();

    let title = format!("{} ({})", t.worktrees_title(), state.worktrees.len());
    let list = List::new(items)
        .block(pane_block(&title, state.focus == Focus::List, theme))
        .highlight_style(
            Style::default()
                .fg(theme.selected_fg)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_stateful_widget(list, area, &mut state.worktrees.state);
}

fn list_line(wt: &Worktree, theme: &Theme) -> Line<'static> {
    let t = i18n::t();
    let mut spans = vec![Span::raw(wt.name.clone())];
    if wt.is_main {
        spans.push(Span::styled(
            format!(" {}", t.worktree_main_marker()),
            Style::default().fg(theme.warning),
        ));
    }
    if wt.is_current {
        spans.push(Span::styled(
            format!(" {}", t.worktree_current_marker()),
            Style::default().fg(theme.warning),
        ));
    }
    Line::from(spans)
}

/// Key hints in display order: panel bindings, then return and quit.
pub fn status_hints(
    controller: &WorktreesController,
    keys: &GlobalKeys,
    can_return: bool,
) -> Vec<(String, &'static str)> {
    let t = i18n::t();
    let mut hints: Vec<(String, &'static str)> = controller
        .bindings()
        .iter()
        .map(|binding| (binding.key.to_string(), binding.description))
        .collect();
    if can_return {
        hints.push((keys.return_key.to_string(), t.return_to_previous()));
    }
    hints.push((keys.quit.to_string(), t.quit()));
    hints
}

fn render_status_bar(buf: &mut Buffer, area: Rect, state: &AppState, hints: &[(String, &str)]) {
    if area.height == 0 {
        return;
    }
    let theme = state.theme;
    buf.set_style(area, Style::default().bg(theme.accented_bg));

    let spans = match &state.status_message {
        Some((message, true)) => vec![Span::styled(
            format!(" {} ", message),
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )],
        _ => {
            let mut spans = Vec::new();
            for (key, description) in hints {
                spans.push(Span::styled(
                    format!(" {} ", key),
                    Style::default()
                        .fg(theme.accented_fg)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::styled(
                    format!("{} ", description),
                    Style::default().fg(theme.fg),
                ));
            }
            spans.push(Span::styled(
                format!(" {}", state.location.display()),
                Style::default().fg(theme.disabled),
            ));
            spans
        }
    };

    buf.set_line(area.x, area.y, &Line::from(spans), area.width);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use arbor_config::Config;
    use ratatui::{backend::TestBackend, Terminal};
    use std::path::{Path, PathBuf};

    fn loader(path: &Path) -> anyhow::Result<Vec<Worktree>> {
        Ok(vec![
            Worktree::new("repo", path).main(),
            Worktree::new("feature", path.join("feature")),
        ])
    }

    fn screen(state: &mut AppState) -> String {
        let controller = WorktreesController::default();
        let keys = GlobalKeys::default();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal
            .draw(|frame| render(frame, state, &controller, &keys))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_status_hints() {
        let controller = WorktreesController::default();
        let keys = GlobalKeys::default();

        let hints = status_hints(&controller, &keys, false);
        assert_eq!(
            hints,
            vec![
                ("<space>".to_string(), "Enter worktree"),
                ("d".to_string(), "Delete worktree"),
                ("q".to_string(), "Quit"),
            ]
        );

        let hints = status_hints(&controller, &keys, true);
        assert_eq!(hints[2], ("<esc>".to_string(), "Return"));
    }

    #[test]
    fn test_render_list_and_detail() {
        let mut state = AppState::with_loader(Config::default(), PathBuf::from("/repo"), loader);
        state.reload().unwrap();
        state.worktrees.select(1);

        let text = screen(&mut state);

        assert!(text.contains("Worktrees (2)"));
        assert!(text.contains("repo (main)"));
        assert!(text.contains("Path: /repo/feature"));
        assert_eq!(state.layout.list.width, 40);
    }

    #[test]
    fn test_render_placeholder_for_empty_list() {
        let mut state = AppState::with_loader(Config::default(), PathBuf::from("/repo"), loader);
        let text = screen(&mut state);
        assert!(text.contains("No worktrees"));
    }
}
