//! Composable UI component renderers.
//!
//! Every component writes into a shared [`Frame`] and returns the next free
//! row where that makes sense.
//!
//! # Components
//!
//! - [`header`]: Title bar with counts and active view controls
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`cards`]: Emoji cards
//! - [`empty`]: Message shown when there is nothing to list
//! - [`spinner`]: Decorative loading ring
//! - [`notice`]: Blocking notice box

mod cards;
mod empty;
mod footer;
mod header;
mod notice;
mod search;
mod spinner;

pub use empty::render_empty_state;
pub use notice::render_notice;
pub use spinner::render_spinner;

use crate::ui::frame::Frame;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use cards::render_cards;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;

/// Renders a horizontal border line, returning the next row.
fn render_border(frame: &mut Frame, row: usize, color: &str, cols: usize) -> usize {
    frame
        .move_to(row, 1)
        .style(&Theme::fg(color))
        .text(&"─".repeat(cols))
        .reset();
    row + 1
}

/// Renders the main layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines, search mode only]
/// [blank line]
/// [Cards, spinner or empty state]
/// [Border]
/// [Footer]
/// ```
///
/// Reserves 6 rows of chrome, 9 with the search bar.
pub fn render_layout(frame: &mut Frame, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(frame, current_row, &vm.header, theme, cols);
    current_row = render_border(frame, current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(frame, current_row, search, theme, cols);
    }
    current_row += 1;

    if let Some(spinner) = &vm.spinner {
        render_spinner(frame, spinner, theme, rows, cols);
    } else if let Some(empty) = &vm.empty_state {
        render_empty_state(frame, current_row + 1, empty, theme, cols);
    } else {
        render_cards(frame, current_row, &vm.cards, theme, cols);
    }

    let footer_row = rows.max(current_row + 2);
    render_border(frame, footer_row - 1, &theme.colors.border, cols);
    render_footer(frame, footer_row, &vm.footer, theme, cols);

    if let Some(notice) = &vm.notice {
        render_notice(frame, notice, theme, rows, cols);
    }
}
