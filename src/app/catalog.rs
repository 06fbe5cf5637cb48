//! Catalog state: the loaded source set and its current view.
//!
//! [`CatalogState`] owns two sequences. The source set is replaced wholesale
//! by [`CatalogState::load`] and never mutated afterwards. The view set is
//! recomputed from the source by a single filter, or re-ordered in place by a
//! sort. Filters never chain: filtering by term after filtering by category
//! starts again from the full source.
//!
//! All operations are total. Before the first load they operate on empty
//! sequences.

use crate::domain::EmojiRecord;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Authoritative catalog data and the projection shown to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    source: Vec<EmojiRecord>,
    view: Vec<EmojiRecord>,
    categories: Vec<String>,
    has_loaded: bool,
}

impl CatalogState {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the source set and resets the view to all records.
    ///
    /// Also rebuilds the category list: distinct categories in order of first
    /// appearance. Records without a category contribute nothing.
    pub fn load(&mut self, records: Vec<EmojiRecord>) {
        let mut categories: Vec<String> = Vec::new();
        for category in records.iter().filter_map(|r| r.category.as_deref()) {
            if !category.is_empty() && !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }

        tracing::debug!(
            record_count = records.len(),
            category_count = categories.len(),
            "catalog loaded"
        );

        self.view.clone_from(&records);
        self.source = records;
        self.categories = categories;
        self.has_loaded = true;
    }

    /// The full loaded dataset.
    #[must_use]
    pub fn source(&self) -> &[EmojiRecord] {
        &self.source
    }

    /// The current filtered or sorted projection.
    #[must_use]
    pub fn view(&self) -> &[EmojiRecord] {
        &self.view
    }

    /// Distinct categories of the source set, in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns `true` once a load has stored at least one record.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        !self.source.is_empty()
    }

    /// Returns `true` once any load has completed, even one with no records.
    #[must_use]
    pub const fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    /// Sorts the view by name, A to Z.
    pub fn sort_by_name_ascending(&mut self) {
        self.view.sort_unstable_by(|a, b| collate(a.name(), b.name()));
    }

    /// Sorts the view by name, Z to A.
    pub fn sort_by_name_descending(&mut self) {
        self.view.sort_unstable_by(|a, b| collate(b.name(), a.name()));
    }

    /// Filters the source set by a search term.
    ///
    /// The term is trimmed and lower-cased. An empty term restores the full
    /// source set; otherwise a record matches when its name, category, or
    /// description contains the term, ignoring case.
    pub fn filter_by_term(&mut self, term: &str) {
        let needle = term.trim().to_lowercase();

        if needle.is_empty() {
            self.reset_view();
            return;
        }

        self.view = self
            .source
            .iter()
            .filter(|record| matches_term(record, &needle))
            .cloned()
            .collect();

        tracing::debug!(term = %needle, matched = self.view.len(), "filtered by term");
    }

    /// Filters the source set by exact category.
    ///
    /// `None` or an empty category restores the full source set. Matching is
    /// case-sensitive with no normalization.
    pub fn filter_by_category(&mut self, category: Option<&str>) {
        let Some(category) = category.filter(|c| !c.is_empty()) else {
            self.reset_view();
            return;
        };

        self.view = self
            .source
            .iter()
            .filter(|record| record.category() == category)
            .cloned()
            .collect();

        tracing::debug!(category = %category, matched = self.view.len(), "filtered by category");
    }

    fn reset_view(&mut self) {
        self.view.clone_from(&self.source);
    }
}

/// Returns `true` if any searchable field contains the lower-cased needle.
fn matches_term(record: &EmojiRecord, needle: &str) -> bool {
    [record.name(), record.category(), record.description()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Locale-style name comparison.
///
/// The primary key is the name decomposed to NFD with combining marks dropped
/// and lower-cased, so `Åland` sorts with the `A`s and `éclair` before `fig`.
/// Ties are broken by accents (unaccented first), then by case (lowercase
/// first), then by bytes so the order stays total.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| {
            a.nfd()
                .zip(b.nfd())
                .find_map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
                    (true, false) => Some(Ordering::Less),
                    (false, true) => Some(Ordering::Greater),
                    _ => None,
                })
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn scenario() -> Vec<EmojiRecord> {
        vec![
            EmojiRecord::new("Grinning Face", "U+1F600", "Smileys", "happy"),
            EmojiRecord::new("Apple", "U+1F34E", "Food", "fruit"),
        ]
    }

    fn names(records: &[EmojiRecord]) -> Vec<&str> {
        records.iter().map(EmojiRecord::name).collect()
    }

    #[test]
    fn operations_before_load_are_empty_noops() {
        let mut catalog = CatalogState::new();
        catalog.sort_by_name_ascending();
        catalog.filter_by_term("face");
        catalog.filter_by_category(Some("Food"));
        assert!(catalog.view().is_empty());
        assert!(!catalog.is_loaded());
    }

    #[test]
    fn load_resets_view_to_full_source() {
        let mut catalog = CatalogState::new();
        catalog.load(scenario());
        assert_eq!(catalog.view(), catalog.source());
        assert_eq!(catalog.categories(), ["Smileys", "Food"]);
    }

    #[test]
    fn reload_replaces_everything() {
        let mut catalog = CatalogState::new();
        catalog.load(scenario());
        catalog.filter_by_term("fruit");

        catalog.load(vec![EmojiRecord::new("Dog", "U+1F436", "Animals", "pet")]);
        assert_eq!(names(catalog.view()), ["Dog"]);
        assert_eq!(catalog.categories(), ["Animals"]);
    }

    #[test]
    fn filter_by_term_finds_description_match() {
        let mut catalog = CatalogState::new();
        catalog.load(scenario());
        catalog.filter_by_term("fruit");
        assert_eq!(names(catalog.view()), ["Apple"]);
    }

    #[test]
    fn filter_by_term_trims_and_ignores_case() {
        let mut catalog = CatalogState::new();
        catalog.load(scenario());
        catalog.filter_by_term("  SMILEYS ");
        assert_eq!(names(catalog.view()), ["Grinning Face"]);
    }

    #[test]
    fn filters_start_from_source_not_previous_view() {
        let mut catalog = CatalogState::new();
        catalog.load(scenario());
        catalog.filter_by_category(Some("Food"));
        catalog.filter_by_term("happy");
        assert_eq!(names(catalog.view()), ["Grinning Face"]);
    }

    #[test]
    fn sort_ascending_puts_apple_first() {
        let mut catalog = CatalogState::new();
        catalog.load(scenario());
        catalog.sort_by_name_ascending();
        assert_eq!(names(catalog.view()), ["Apple", "Grinning Face"]);
    }

    #[test]
    fn sort_keeps_current_filter() {
        let mut catalog = CatalogState::new();
        catalog.load(vec![
            EmojiRecord::new("Pear", "U+1F350", "Food", "fruit"),
            EmojiRecord::new("Dog", "U+1F436", "Animals", "pet"),
            EmojiRecord::new("Apple", "U+1F34E", "Food", "fruit"),
        ]);
        catalog.filter_by_category(Some("Food"));
        catalog.sort_by_name_ascending();
        assert_eq!(names(catalog.view()), ["Apple", "Pear"]);
    }

    #[test]
    fn missing_names_sort_first() {
        let mut catalog = CatalogState::new();
        catalog.load(vec![
            EmojiRecord::new("Apple", "U+1F34E", "Food", "fruit"),
            EmojiRecord { unicode: Some("U+2753".into()), ..EmojiRecord::default() },
        ]);
        catalog.sort_by_name_ascending();
        assert_eq!(names(catalog.view()), ["", "Apple"]);
    }

    #[test]
    fn category_filter_is_exact_and_case_sensitive() {
        let mut catalog = CatalogState::new();
        catalog.load(scenario());
        catalog.filter_by_category(Some("food"));
        assert!(catalog.view().is_empty());

        catalog.filter_by_category(Some("Food"));
        assert_eq!(names(catalog.view()), ["Apple"]);

        catalog.filter_by_category(Some(""));
        assert_eq!(catalog.view(), catalog.source());
    }

    #[test]
    fn categories_skip_missing_and_duplicates() {
        let mut catalog = CatalogState::new();
        catalog.load(vec![
            EmojiRecord::new("A", "U+41", "Food", ""),
            EmojiRecord { name: Some("B".into()), ..EmojiRecord::default() },
            EmojiRecord::new("C", "U+43", "Food", ""),
            EmojiRecord::new("D", "U+44", "Animals", ""),
        ]);
        assert_eq!(catalog.categories(), ["Food", "Animals"]);
    }

    #[test]
    fn collation_ignores_case_and_prefers_lowercase_on_ties() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
        assert_eq!(collate("apple", "Apple"), Ordering::Less);
        assert_eq!(collate("Apple", "Apple"), Ordering::Equal);
    }

    #[test]
    fn collation_sorts_accented_letters_with_their_base() {
        assert_eq!(collate("Flag: Åland Islands", "Flag: Zambia"), Ordering::Less);
        assert_eq!(collate("éclair", "fig"), Ordering::Less);
        assert_eq!(collate("Éclair", "apple"), Ordering::Greater);
        assert_eq!(collate("resume", "résumé"), Ordering::Less);
        // Precomposed and decomposed spellings differ only in bytes.
        assert_ne!(collate("\u{e9}", "e\u{301}"), Ordering::Equal);
        assert_eq!(collate("\u{e9}", "e"), Ordering::Greater);
    }

    #[test]
    fn sort_places_flags_alphabetically() {
        let mut catalog = CatalogState::new();
        catalog.load(vec![
            EmojiRecord::new("Flag: Zambia", "U+1F1FF U+1F1F2", "Flags", ""),
            EmojiRecord::new("Pizza", "U+1F355", "Food", ""),
            EmojiRecord::new("Flag: Åland Islands", "U+1F1E6 U+1F1FD", "Flags", ""),
            EmojiRecord::new("Piñata", "U+1FA85", "Activities", ""),
            EmojiRecord::new("Pineapple", "U+1F34D", "Food", ""),
        ]);
        catalog.sort_by_name_ascending();
        assert_eq!(
            names(catalog.view()),
            ["Flag: Åland Islands", "Flag: Zambia", "Piñata", "Pineapple", "Pizza"]
        );
    }

    #[test]
    fn empty_load_still_counts_as_loaded() {
        let mut catalog = CatalogState::new();
        assert!(!catalog.has_loaded());
        catalog.load(Vec::new());
        assert!(catalog.has_loaded());
        assert!(!catalog.is_loaded());
    }

    fn record_strategy() -> impl Strategy<Value = EmojiRecord> {
        (
            proptest::option::of("[A-Za-z ]{0,8}"),
            proptest::option::of("[A-Ca-c]{0,3}"),
            proptest::option::of("[a-z ]{0,10}"),
        )
            .prop_map(|(name, category, description)| EmojiRecord {
                name,
                unicode: Some("U+1F600".to_string()),
                category,
                description,
            })
    }

    proptest! {
        #[test]
        fn empty_term_restores_source(records in proptest::collection::vec(record_strategy(), 0..20)) {
            let mut catalog = CatalogState::new();
            catalog.load(records);
            catalog.filter_by_term("a");
            catalog.filter_by_term("   ");
            prop_assert_eq!(catalog.view(), catalog.source());
        }

        #[test]
        fn term_filter_selects_exactly_the_matching_records(
            records in proptest::collection::vec(record_strategy(), 0..20),
            term in "[A-Za-z]{1,3}",
        ) {
            let mut catalog = CatalogState::new();
            catalog.load(records);
            catalog.filter_by_term(&term);

            let needle = term.to_lowercase();
            let expected: Vec<EmojiRecord> = catalog
                .source()
                .iter()
                .filter(|r| {
                    r.name().to_lowercase().contains(&needle)
                        || r.category().to_lowercase().contains(&needle)
                        || r.description().to_lowercase().contains(&needle)
                })
                .cloned()
                .collect();
            prop_assert_eq!(catalog.view(), expected.as_slice());
        }

        #[test]
        fn category_filter_selects_exact_matches(
            records in proptest::collection::vec(record_strategy(), 0..20),
            category in "[A-Ca-c]{1,3}",
        ) {
            let mut catalog = CatalogState::new();
            catalog.load(records);
            catalog.filter_by_category(Some(category.as_str()));
            prop_assert!(catalog.view().iter().all(|r| r.category() == category));
            let expected = catalog.source().iter().filter(|r| r.category() == category).count();
            prop_assert_eq!(catalog.view().len(), expected);

            catalog.filter_by_category(None);
            prop_assert_eq!(catalog.view(), catalog.source());
        }

        #[test]
        fn descending_reverses_ascending_for_distinct_names(
            names in proptest::collection::hash_set("[a-z]{1,6}", 0..15),
        ) {
            let records: Vec<EmojiRecord> = names
                .iter()
                .map(|n| EmojiRecord { name: Some(n.clone()), ..EmojiRecord::default() })
                .collect();
            let mut catalog = CatalogState::new();
            catalog.load(records);

            catalog.sort_by_name_ascending();
            let mut ascending = catalog.view().to_vec();
            catalog.sort_by_name_descending();
            ascending.reverse();
            prop_assert_eq!(catalog.view(), ascending.as_slice());
        }
    }
}
