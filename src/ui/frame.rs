//! Off-screen frame buffer.
//!
//! Components write ANSI output into a [`Frame`] instead of stdout so a whole
//! screen can be assembled, inspected in tests, and printed in one call.

use std::fmt;

/// Accumulated ANSI output for one screen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Frame {
    buf: String,
}

impl Frame {
    #[must_use]
    pub const fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Positions the cursor (1-indexed) with `\u{1b}[{row};{col}H`.
    pub fn move_to(&mut self, row: usize, col: usize) -> &mut Self {
        self.buf.push_str(&format!("\u{1b}[{row};{col}H"));
        self
    }

    /// Appends visible text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    /// Appends an escape sequence produced by [`crate::ui::Theme`].
    pub fn style(&mut self, sequence: &str) -> &mut Self {
        self.buf.push_str(sequence);
        self
    }

    /// Appends `width` spaces.
    pub fn pad(&mut self, width: usize) -> &mut Self {
        self.buf.extend(std::iter::repeat(' ').take(width));
        self
    }

    pub fn reset(&mut self) -> &mut Self {
        self.style(crate::ui::Theme::reset())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}
