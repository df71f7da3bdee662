//! Detail pane content for the selected worktree.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use arbor_core::Worktree;
use arbor_i18n as i18n;
use arbor_theme::Theme;

/// Title and body of the detail pane.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub text: Text<'static>,
}

impl DetailView {
    /// Body without styling, one line per row.
    pub fn plain(&self) -> String {
        self.text
            .lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Build the detail pane for `selected`.
pub fn render_detail(selected: Option<&Worktree>, theme: &Theme) -> DetailView {
    let t = i18n::t();
    let title = t.worktree_detail_title().to_string();

    let Some(worktree) = selected else {
        return DetailView {
            title,
            text: Text::from(t.no_worktrees().to_string()),
        };
    };

    let mut name_line = vec![Span::styled(
        worktree.name.clone(),
        Style::default()
            .fg(theme.success)
            .add_modifier(Modifier::BOLD),
    )];
    if worktree.is_main {
        name_line.push(Span::raw(" "));
        name_line.push(Span::styled(
            t.worktree_main_marker().to_string(),
            Style::default().fg(theme.warning),
        ));
    }
    if worktree.is_current {
        name_line.push(Span::raw(" "));
        name_line.push(Span::styled(
            t.worktree_current_marker().to_string(),
            Style::default().fg(theme.warning),
        ));
    }

    let path_line = Line::from(format!(
        "{}: {}",
        t.worktree_path_label(),
        worktree.path.display()
    ));

    DetailView {
        title,
        text: Text::from(vec![Line::from(name_line), path_line]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_for_selection() {
        let wt = Worktree::new("feature", "/a/b");
        let view = render_detail(Some(&wt), &Theme::default());

        assert_eq!(view.title, "Worktree");
        assert_eq!(view.plain(), "feature\nPath: /a/b");
    }

    #[test]
    fn test_name_is_green() {
        let wt = Worktree::new("feature", "/a/b");
        let theme = Theme::default();
        let view = render_detail(Some(&wt), &theme);

        let name = &view.text.lines[0].spans[0];
        assert_eq!(name.content, "feature");
        assert_eq!(name.style.fg, Some(theme.success));
    }

    #[test]
    fn test_placeholder_without_selection() {
        let view = render_detail(None, &Theme::default());
        assert_eq!(view.plain(), "No worktrees");
    }

    #[test]
    fn test_markers_for_main_worktree() {
        let wt = Worktree::new("repo", "/repo").main().current();
        let view = render_detail(Some(&wt), &Theme::default());
        assert!(view.plain().starts_with("repo (main) (current)\n"));
    }
}
