//! Search bar component renderer.

use crate::ui::frame::Frame;
use crate::ui::helpers::{display_width, keep_tail, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line search input box.
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// A trailing `_` marks the insertion point. When the query is wider than the
/// box, its tail is shown.
pub fn render_search_bar(frame: &mut Frame, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(&theme.colors.search_bar_border);

    frame
        .move_to(row, 1)
        .pad(SEARCH_BOX_MARGIN)
        .style(&border)
        .text(&format!("┌{}┐", "─".repeat(inner_width)))
        .reset();

    let prefix = " Search: ";
    let room = inner_width.saturating_sub(prefix.len() + 1);
    let query = keep_tail(&search.query, room);
    let search_text = truncate(&format!("{prefix}{query}_"), inner_width);
    let padding = inner_width.saturating_sub(display_width(&search_text));

    frame
        .move_to(row + 1, 1)
        .pad(SEARCH_BOX_MARGIN)
        .style(&border)
        .text("│")
        .style(&Theme::fg(&theme.colors.text_normal))
        .text(&search_text)
        .pad(padding)
        .style(&border)
        .text("│")
        .reset();

    frame
        .move_to(row + 2, 1)
        .pad(SEARCH_BOX_MARGIN)
        .style(&border)
        .text(&format!("└{}┘", "─".repeat(inner_width)))
        .reset();

    row + 3
}
