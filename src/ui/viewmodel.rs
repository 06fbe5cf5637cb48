//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//! Every string that originates from the remote catalog has already been
//! passed through [`sanitize`](crate::ui::helpers::sanitize) by the time it
//! lands here.

use crate::domain::EmojiRecord;
use crate::ui::helpers::{find_matches, sanitize};

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Cards visible in the current scroll window.
    pub cards: Vec<CardItem>,

    /// Index of the selected card within `cards`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,

    /// Shown instead of the card list when there is nothing to list.
    pub empty_state: Option<EmptyState>,

    /// Present while the search text is being edited.
    pub search_bar: Option<SearchBarInfo>,

    /// Present while the decorative loading sequence hides the catalog.
    pub spinner: Option<SpinnerInfo>,

    /// Blocking notice drawn on top of everything else.
    pub notice: Option<NoticeInfo>,
}

/// Display information for one emoji card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    /// Emoji name.
    pub title: String,

    /// Decoded glyph, or the character-reference text if it cannot be decoded.
    pub glyph: String,

    /// Category label.
    pub category: String,

    /// Description label.
    pub description: String,

    /// Whether the scroll cursor is on this card.
    pub is_selected: bool,

    /// Character ranges of `title` matching the applied search term.
    pub highlight_ranges: Vec<(usize, usize)>,
}

impl CardItem {
    /// Projects a record into a card.
    ///
    /// `term` is the lower-cased search term currently applied, used only for
    /// highlighting.
    #[must_use]
    pub fn from_record(record: &EmojiRecord, term: &str, is_selected: bool) -> Self {
        let title = sanitize(record.name());
        let glyph = record
            .glyph()
            .map_or_else(|| sanitize(&record.glyph_reference()), |g| sanitize(&g));
        let highlight_ranges = find_matches(&title, term);

        Self {
            title,
            glyph,
            category: sanitize(record.category()),
            description: sanitize(record.description()),
            is_selected,
            highlight_ranges,
        }
    }
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No emojis match").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Text being edited.
    pub query: String,
}

/// Decorative spinner display information.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinnerInfo {
    /// Glyphs with their angle around the center, in degrees.
    pub slots: Vec<(f64, String)>,

    /// Whether the sample is fading out.
    pub fading: bool,
}

/// Blocking notice display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeInfo {
    pub title: String,
    pub message: String,
}
