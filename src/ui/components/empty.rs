//! Empty state component renderer.

use crate::ui::frame::Frame;
use crate::ui::helpers::{display_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered message with a dimmed subtitle below it, starting at `row`.
pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message = truncate(&empty.message, cols);
    let msg_len = display_width(&message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    frame
        .move_to(row, 1)
        .style(&Theme::fg(&theme.colors.empty_state_fg))
        .pad(msg_padding)
        .text(&message)
        .pad(cols.saturating_sub(msg_padding + msg_len))
        .reset();

    let subtitle = truncate(&empty.subtitle, cols);
    let sub_len = display_width(&subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    frame
        .move_to(row + 1, 1)
        .style(Theme::dim())
        .style(&Theme::fg(&theme.colors.text_dim))
        .pad(sub_padding)
        .text(&subtitle)
        .pad(cols.saturating_sub(sub_padding + sub_len))
        .reset();
}
