//! Modal sizing and positioning.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Minimum modal width.
const MIN_WIDTH: u16 = 30;
/// Maximum width as a share of the screen.
const MAX_WIDTH_PERCENTAGE: f32 = 0.75;
/// Border plus horizontal padding.
const PADDING_WITH_BORDER: u16 = 6;

/// Calculate modal width based on content and screen constraints.
///
/// Takes the widest content, adds padding, then clamps to
/// `[MIN_WIDTH, 75% of screen]` and to the screen itself.
pub fn calculate_modal_width(content_widths: impl Iterator<Item = u16>, screen_width: u16) -> u16 {
    let content_width = content_widths.max().unwrap_or(0);
    let total_width = content_width + PADDING_WITH_BORDER;
    let max_width = (screen_width as f32 * MAX_WIDTH_PERCENTAGE) as u16;

    total_width.max(MIN_WIDTH).min(max_width).min(screen_width)
}

/// Calculate maximum display width over the lines of `text`.
pub fn max_line_width(text: &str) -> u16 {
    text.lines().map(|line| line.width()).max().unwrap_or(0) as u16
}

/// Rectangle of the given size centered in `r`, clamped to `r`.
pub fn centered_rect_with_size(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}
