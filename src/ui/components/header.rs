//! Header component: centred title and the view tab strip.

use crate::ui::helpers::{center_padding, char_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title at `row` and the tabs on the row below.
///
/// Returns the next free row.
///
/// ```text
///                  Car Dealer · 3 of 3 cars
///  1 Marketplace   2 Mint   3 Wallet
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = char_width(&header.title);
    let padding = center_padding(&header.title, cols);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(cols.saturating_sub(padding + title_len)));
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    let mut used = 0;
    for tab in &header.tabs {
        let label = format!(" {} ", tab.label);
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.tab_active_fg));
            print!("{}", Theme::bg(&theme.colors.tab_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{label}");
        print!("{} ", Theme::reset());
        used += char_width(&label) + 1;
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    row + 2
}
