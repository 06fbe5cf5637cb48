//! Emoji card renderer.
//!
//! Each card is [`CARD_HEIGHT`](crate::app::state::CARD_HEIGHT) rows tall:
//!
//! ```text
//!  ╭─ Grinning Face ──────────── Smileys ─╮
//!  │ 😀                                   │
//!  │ A happy face                         │
//!  ╰──────────────────────────────────────╯
//! ```

use crate::ui::frame::Frame;
use crate::ui::helpers::{display_width, truncate, write_highlighted};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

const CARD_MARGIN: usize = 1;

/// Renders cards top to bottom from `row`, returning the next free row.
pub fn render_cards(frame: &mut Frame, row: usize, cards: &[CardItem], theme: &Theme, cols: usize) -> usize {
    cards
        .iter()
        .fold(row, |current, card| render_card(frame, current, card, theme, cols))
}

fn render_card(frame: &mut Frame, row: usize, card: &CardItem, theme: &Theme, cols: usize) -> usize {
    let inner = cols.saturating_sub(CARD_MARGIN * 2 + 2);
    let border = if card.is_selected {
        Theme::fg(&theme.colors.selection_bg)
    } else {
        Theme::fg(&theme.colors.border)
    };
    let title_style = if card.is_selected {
        format!(
            "{}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal))
    };

    // Top edge: "─ " + title + " " ... " " + category + " ─"
    let category = truncate(&card.category, inner / 3);
    let category_len = display_width(&category);
    let title_room = inner.saturating_sub(category_len + 6);
    let title = truncate(&card.title, title_room);
    let title_len = display_width(&title);
    let fill = inner.saturating_sub(title_len + category_len + 6);

    frame
        .move_to(row, 1)
        .pad(CARD_MARGIN)
        .style(&border)
        .text("╭─ ")
        .style(&title_style);
    // Highlight ranges only make sense when the title was not cut.
    let ranges: &[(usize, usize)] = if title == card.title { &card.highlight_ranges } else { &[] };
    write_highlighted(frame, &title, ranges, theme, &title_style, card.is_selected);
    frame
        .reset()
        .style(&border)
        .text(&format!(" {} ", "─".repeat(fill)))
        .style(&Theme::fg(&theme.colors.category_fg))
        .text(&category)
        .style(&border)
        .text(" ─╮")
        .reset();

    render_body_line(frame, row + 1, &card.glyph, &Theme::fg(&theme.colors.text_normal), &border, inner);
    render_body_line(
        frame,
        row + 2,
        &card.description,
        &Theme::fg(&theme.colors.text_dim),
        &border,
        inner,
    );

    frame
        .move_to(row + 3, 1)
        .pad(CARD_MARGIN)
        .style(&border)
        .text(&format!("╰{}╯", "─".repeat(inner)))
        .reset();

    row + 4
}

fn render_body_line(frame: &mut Frame, row: usize, content: &str, style: &str, border: &str, inner: usize) {
    let text = truncate(content, inner.saturating_sub(2));
    let padding = inner.saturating_sub(display_width(&text) + 1);

    frame
        .move_to(row, 1)
        .pad(CARD_MARGIN)
        .style(border)
        .text("│ ")
        .style(style)
        .text(&text)
        .pad(padding)
        .style(border)
        .text("│")
        .reset();
}
