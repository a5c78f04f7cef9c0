//! Footer component renderer.

use crate::ui::helpers::{center_padding, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centred and dimmed at `row`.
///
/// Hints wider than the pane are truncated. Returns the next free row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let padding = center_padding(&footer.keybindings, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{}", fit(&footer.keybindings, cols - padding));
    print!("{}", Theme::reset());
    row + 1
}
