//! Footer component renderer.

use crate::ui::frame::Frame;
use crate::ui::helpers::{display_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders centered keybinding hints in the dim text color.
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = display_width(&help_text);
    let padding = cols.saturating_sub(text_len) / 2;

    frame
        .move_to(row, 1)
        .style(&Theme::fg(&theme.colors.text_dim))
        .pad(padding)
        .text(&help_text)
        .pad(cols.saturating_sub(padding + text_len))
        .reset();
    row + 1
}
