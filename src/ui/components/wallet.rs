//! Wallet component renderer.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::WalletInfo;

const LEFT_MARGIN: usize = 4;

/// Renders address, balance and as much of the activity feed as fits
/// between `row` and `last_row` (inclusive).
pub fn render_wallet(row: usize, last_row: usize, wallet: &WalletInfo, theme: &Theme, cols: usize) {
    let margin = " ".repeat(LEFT_MARGIN);

    position_cursor(row, 1);
    print!("{margin}{}", Theme::fg(&theme.colors.text_dim));
    print!("Address  {}", Theme::reset());
    print!("{}{}", Theme::fg(&theme.colors.text_normal), wallet.address);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{margin}{}", Theme::fg(&theme.colors.text_dim));
    print!("Proceeds {}", Theme::reset());
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.price_fg));
    print!("{}", wallet.balance);
    print!("{}", Theme::reset());

    position_cursor(row + 3, 1);
    print!("{margin}{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("Recent activity");
    print!("{}", Theme::reset());

    let first_entry_row = row + 4;
    if wallet.activity.is_empty() {
        position_cursor(first_entry_row, 1);
        print!("{margin}{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("Nothing yet. Mint or buy a car to get started.");
        print!("{}", Theme::reset());
        return;
    }

    let description_width = cols.saturating_sub(LEFT_MARGIN + 12 + 10).max(10);
    let capacity = (last_row + 1).saturating_sub(first_entry_row);

    for (offset, entry) in wallet.activity.iter().take(capacity).enumerate() {
        position_cursor(first_entry_row + offset, 1);
        print!("{margin}{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", fit(&entry.description, description_width));
        print!("{}{}", Theme::fg(&theme.colors.price_fg), fit(&entry.amount, 12));
        print!("{}{}", Theme::fg(&theme.colors.text_dim), entry.time_ago);
        print!("{}", Theme::reset());
    }
}
