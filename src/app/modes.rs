//! Input and ordering mode types for the application.
//!
//! The application operates in one of two input modes:
//! - **Normal**: single-key commands (load, sort, category, scroll)
//! - **Search**: keys edit the search text until it is submitted or dismissed

/// Current input handling mode.
///
/// Controls how keys are interpreted and whether the search bar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default command mode.
    ///
    /// Available keybindings: r (load), a/d (sort), / (search),
    /// c/C (category), j/k (scroll), q (quit).
    Normal,

    /// Editing the search text.
    ///
    /// Printable keys append, Backspace deletes, Enter applies the filter,
    /// Esc returns to Normal without touching the view.
    Search,
}

/// Ordering last applied to the view, shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Names A to Z.
    Ascending,
    /// Names Z to A.
    Descending,
}

impl SortOrder {
    /// Short label for the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "A-Z",
            Self::Descending => "Z-A",
        }
    }
}
