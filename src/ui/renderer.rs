//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from the state, then lay
//! it out into a [`Frame`]. The frame is printed once per host render call.
//!
//! ```
//! use emoji_catalog::app::AppState;
//! use emoji_catalog::ui::render_to_string;
//!
//! let state = AppState::default();
//! let screen = render_to_string(&state, 24, 80);
//! assert!(screen.contains("No catalog loaded"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::frame::Frame;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders the plugin UI into a string of ANSI output.
///
/// Pure with respect to `state`: rendering the same state twice yields the
/// same output.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut frame = Frame::new();
    components::render_layout(&mut frame, &viewmodel, &state.theme, cols, rows);
    frame.into_string()
}
