//! Blocking notice renderer.
//!
//! Draws a bordered box in the middle of the screen over whatever was
//! rendered before it.

use crate::ui::frame::Frame;
use crate::ui::helpers::{display_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeInfo;

const NOTICE_PADDING: usize = 2;

pub fn render_notice(frame: &mut Frame, notice: &NoticeInfo, theme: &Theme, rows: usize, cols: usize) {
    let widest = display_width(&notice.message).max(display_width(&notice.title));
    let inner = (widest + NOTICE_PADDING * 2).min(cols.saturating_sub(2));
    let left = cols.saturating_sub(inner + 2) / 2 + 1;
    let top = rows.saturating_sub(5) / 2 + 1;
    let border = Theme::fg(&theme.colors.notice_border);

    let title = truncate(&format!(" {} ", notice.title), inner);
    frame
        .move_to(top, left)
        .style(&border)
        .text("┌")
        .style(Theme::bold())
        .style(&Theme::fg(&theme.colors.notice_fg))
        .text(&title)
        .reset()
        .style(&border)
        .text(&"─".repeat(inner.saturating_sub(display_width(&title))))
        .text("┐")
        .reset();

    for (offset, line) in ["", notice.message.as_str(), ""].iter().enumerate() {
        let text = truncate(line, inner.saturating_sub(NOTICE_PADDING * 2));
        let lead = inner.saturating_sub(display_width(&text)) / 2;
        frame
            .move_to(top + 1 + offset, left)
            .style(&border)
            .text("│")
            .style(&Theme::fg(&theme.colors.text_normal))
            .pad(lead)
            .text(&text)
            .pad(inner.saturating_sub(lead + display_width(&text)))
            .style(&border)
            .text("│")
            .reset();
    }

    frame
        .move_to(top + 4, left)
        .style(&border)
        .text(&format!("└{}┘", "─".repeat(inner)))
        .reset();
}
