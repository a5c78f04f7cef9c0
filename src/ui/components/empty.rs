//! Empty state component renderer.

use crate::ui::helpers::{center_padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centred two-line empty message starting at `row`.
///
/// Shown in place of the listing table when the store is empty or the search
/// matches nothing.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(center_padding(&empty.message, cols)));
    print!("{}", empty.message);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(center_padding(&empty.subtitle, cols)));
    print!("{}", empty.subtitle);
    print!("{}", Theme::reset());
}
