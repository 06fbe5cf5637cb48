//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of all session state: the catalog data,
//! the loading sequence, the search text, the category selection, the scroll
//! cursor, and the pending notice. The event handler mutates it; the renderer
//! reads it through [`AppState::compute_viewmodel`].
//!
//! # Example
//!
//! ```
//! use emoji_catalog::app::AppState;
//! use emoji_catalog::domain::EmojiRecord;
//!
//! let mut state = AppState::default();
//! state.apply_load(vec![EmojiRecord::new("Apple", "U+1F34E", "Food", "fruit")]);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.cards.len(), 1);
//! ```

use super::catalog::CatalogState;
use super::loading::{slot_angles, LoadingPhase, LoadingSequence, SpinnerTiming};
use super::modes::{InputMode, SortOrder};
use crate::domain::EmojiRecord;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, EmptyState, FooterInfo, HeaderInfo, NoticeInfo, SearchBarInfo, SpinnerInfo,
    UIViewModel,
};

/// Rows taken by one card (top border with title, two content lines, bottom border).
pub const CARD_HEIGHT: usize = 4;

/// Message shown when a catalog fetch fails.
pub const LOAD_FAILURE_MESSAGE: &str = "Could not load data. Check the log and URL.";

/// A blocking, user-visible notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    /// The notice raised for every load failure.
    #[must_use]
    pub fn load_failure() -> Self {
        Self {
            title: "Load failed".to_string(),
            message: LOAD_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Source and view sets.
    pub catalog: CatalogState,

    /// Decorative intro state machine.
    pub loading: LoadingSequence,

    /// Zero-based cursor within the view set.
    ///
    /// Clamped after every view change; wraps during navigation.
    pub selected_index: usize,

    pub input_mode: InputMode,

    /// Text in the search box. Only applied on submit.
    pub search_input: String,

    /// Lower-cased term the current view was filtered by, if any.
    pub applied_term: String,

    /// Index into `catalog.categories()`; `None` means all categories.
    pub category_index: Option<usize>,

    /// Ordering last applied to the view.
    pub sort_order: Option<SortOrder>,

    /// Open notice; keys dismiss it before doing anything else.
    pub notice: Option<Notice>,

    /// Notices raised this session, for diagnostics.
    pub notices_raised: usize,

    /// A catalog request is outstanding; further loads are ignored.
    pub catalog_in_flight: bool,

    /// The host granted permissions and the first load was kicked off.
    pub started: bool,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), LoadingSequence::finished(SpinnerTiming::default()))
    }
}

impl AppState {
    /// Creates an empty state with the given theme and loading sequence.
    #[must_use]
    pub fn new(theme: Theme, loading: LoadingSequence) -> Self {
        Self {
            catalog: CatalogState::new(),
            loading,
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_input: String::new(),
            applied_term: String::new(),
            category_index: None,
            sort_order: None,
            notice: None,
            notices_raised: 0,
            catalog_in_flight: false,
            started: false,
            theme,
        }
    }

    /// Stores freshly fetched records and resets every view control.
    pub fn apply_load(&mut self, records: Vec<EmojiRecord>) {
        self.catalog.load(records);
        self.search_input.clear();
        self.applied_term.clear();
        self.category_index = None;
        self.sort_order = None;
        self.selected_index = 0;
    }

    /// Opens the load-failure notice.
    pub fn raise_load_failure(&mut self) {
        self.notice = Some(Notice::load_failure());
        self.notices_raised += 1;
    }

    /// The selected category label, if one is selected.
    #[must_use]
    pub fn selected_category(&self) -> Option<&str> {
        self.category_index
            .and_then(|i| self.catalog.categories().get(i))
            .map(String::as_str)
    }

    /// Advances the category selection: All → first → … → last → All.
    pub fn select_next_category(&mut self) {
        let count = self.catalog.categories().len();
        self.category_index = match self.category_index {
            None if count > 0 => Some(0),
            Some(i) if i + 1 < count => Some(i + 1),
            _ => None,
        };
    }

    /// Moves the category selection backwards: All → last → … → first → All.
    pub fn select_previous_category(&mut self) {
        let count = self.catalog.categories().len();
        self.category_index = match self.category_index {
            None if count > 0 => Some(count - 1),
            Some(i) if i > 0 => Some(i - 1),
            _ => None,
        };
    }

    /// Moves the cursor down by one card, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let len = self.catalog.view().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the cursor up by one card, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let len = self.catalog.view().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the record under the cursor, if any.
    #[must_use]
    pub fn selected_record(&self) -> Option<&EmojiRecord> {
        self.catalog.view().get(self.selected_index)
    }

    /// Puts the cursor back at the top of the view.
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract UI chrome (header, borders, footer, search bar) from `rows`
    /// 2. Divide by [`CARD_HEIGHT`] to get the number of visible cards (at least one)
    /// 3. Center the window around the cursor, then pull it back from the end
    ///    so the last page is full
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        let mut vm = UIViewModel {
            cards: vec![],
            selected_index: 0,
            header: self.compute_header(),
            footer: self.compute_footer(),
            empty_state: None,
            search_bar: self.compute_search_bar(),
            spinner: None,
            notice: self.notice.as_ref().map(|n| NoticeInfo {
                title: n.title.clone(),
                message: n.message.clone(),
            }),
        };

        if self.loading.is_active() {
            vm.spinner = Some(self.compute_spinner());
            return vm;
        }

        let view = self.catalog.view();
        if view.is_empty() {
            vm.empty_state = Some(self.compute_empty_state());
            return vm;
        }

        let capacity = (self.calculate_available_rows(rows) / CARD_HEIGHT).max(1);

        let mut visible_start = self.selected_index.saturating_sub(capacity / 2);
        let visible_end = (visible_start + capacity).min(view.len());
        if visible_end - visible_start < capacity && view.len() >= capacity {
            visible_start = visible_end.saturating_sub(capacity);
        }

        vm.cards = view[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(offset, record)| {
                let is_selected = visible_start + offset == self.selected_index;
                CardItem::from_record(record, &self.applied_term, is_selected)
            })
            .collect();
        vm.selected_index = self.selected_index.saturating_sub(visible_start);
        vm
    }

    fn compute_header(&self) -> HeaderInfo {
        if self.loading.is_active() {
            return HeaderInfo {
                title: " Emoji Catalog ".to_string(),
            };
        }

        let mut title = format!(
            " Emoji Catalog ({}/{})",
            self.catalog.view().len(),
            self.catalog.source().len()
        );
        if let Some(category) = self.selected_category() {
            title.push_str(&format!(" | {}", crate::ui::helpers::sanitize(category)));
        }
        if !self.applied_term.is_empty() {
            title.push_str(&format!(" | \"{}\"", crate::ui::helpers::sanitize(&self.applied_term)));
        }
        if let Some(order) = self.sort_order {
            title.push_str(&format!(" | {}", order.label()));
        }
        title.push(' ');

        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.notice.is_some() {
            "Any key: dismiss"
        } else if self.loading.is_active() {
            "r: skip intro  q: quit"
        } else {
            match self.input_mode {
                InputMode::Search => "Enter: apply  ESC: cancel  Type to edit search",
                InputMode::Normal => {
                    "r: load  a/d: sort  /: search  c/C: category  j/k: scroll  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search if !self.loading.is_active() => Some(SearchBarInfo {
                query: crate::ui::helpers::sanitize(&self.search_input),
            }),
            _ => None,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        let (message, subtitle) = if self.catalog.is_loaded() {
            ("No emojis match", "Press / to search again or c to change category")
        } else if self.catalog_in_flight {
            ("Loading catalog...", "Waiting for the data source")
        } else if self.catalog.has_loaded() {
            ("The catalog is empty", "Press r to reload the catalog")
        } else {
            ("No catalog loaded", "Press r to load the catalog")
        };

        EmptyState {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
        }
    }

    fn compute_spinner(&self) -> SpinnerInfo {
        let sample = self.loading.sample();
        let slots = slot_angles(sample.len())
            .into_iter()
            .zip(sample)
            .map(|(angle, record)| (angle, CardItem::from_record(record, "", false).glyph))
            .collect();

        SpinnerInfo {
            slots,
            fading: self.loading.phase() == &LoadingPhase::FadingOut,
        }
    }

    /// Rows left for cards after header (2), borders (2) and footer (2),
    /// plus the search bar (3) while it is shown.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search => total_rows.saturating_sub(9),
        }
    }
}
