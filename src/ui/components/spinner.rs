//! Loading ring renderer.
//!
//! Places each sampled glyph on an ellipse around the screen center. Terminal
//! cells are roughly twice as tall as they are wide, so the horizontal radius
//! is doubled to keep the ring round.

use crate::ui::frame::Frame;
use crate::ui::helpers::display_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SpinnerInfo;

const MAX_RADIUS: f64 = 6.0;
const LABEL: &str = "Loading";

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn render_spinner(frame: &mut Frame, spinner: &SpinnerInfo, theme: &Theme, rows: usize, cols: usize) {
    let center_row = (rows / 2).max(1) as f64;
    let center_col = (cols / 2).max(1) as f64;
    let radius = (center_row - 3.0).clamp(1.0, MAX_RADIUS);

    let mut style = Theme::fg(&theme.colors.spinner_fg);
    if spinner.fading {
        style.insert_str(0, Theme::dim());
    }

    for (angle, glyph) in &spinner.slots {
        let theta = angle.to_radians();
        let row = (center_row - radius * theta.cos()).round().max(1.0) as usize;
        let col = (center_col + radius * 2.0 * theta.sin()).round().max(1.0) as usize;
        frame.move_to(row, col).style(&style).text(glyph).reset();
    }

    let label_col = (center_col as usize).saturating_sub(display_width(LABEL) / 2).max(1);
    frame
        .move_to(center_row as usize, label_col)
        .style(&Theme::fg(&theme.colors.text_dim))
        .text(LABEL)
        .reset();
}
