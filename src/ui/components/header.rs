//! Header component renderer.

use crate::ui::frame::Frame;
use crate::ui::helpers::{display_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar centered across the full width.
///
/// Returns the next free row.
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols);
    let title_len = display_width(&title);
    let padding = cols.saturating_sub(title_len) / 2;

    frame
        .move_to(row, 1)
        .style(Theme::bold())
        .style(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        frame.style(&Theme::bg(bg));
    }

    frame
        .pad(padding)
        .text(&title)
        .pad(cols.saturating_sub(padding + title_len))
        .reset();
    row + 1
}
