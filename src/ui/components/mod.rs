//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title and view tabs
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`table`]: Listing table (NAME, MODEL, YEAR, PRICE, STATUS)
//! - [`empty`]: Message shown instead of an empty table
//! - [`form`]: Mint form fields and validation summary
//! - [`wallet`]: Balance and activity feed
//! - [`dialog`]: Confirmation box and success notice
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header title]
//! [Tabs]
//! [Border]
//! [Body: search bar + table | mint form | wallet]
//! [Detail or notice line]
//! [Border]
//! [Footer]
//! ```
//!
//! The confirmation dialog is drawn last, on top of the body.

mod dialog;
mod empty;
mod footer;
mod form;
mod header;
mod search;
mod table;
mod wallet;

pub use dialog::{render_dialog, render_notice};

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MarketplaceInfo, MintFormInfo, UIViewModel, WalletInfo};

use empty::render_empty_state;
use footer::render_footer;
use form::render_mint_form;
use header::render_header;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// First row below the header, tabs and border.
const BODY_START_ROW: usize = 5;

/// Renders a horizontal border line at `row`. Returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders header, tabs and the border beneath them.
pub fn render_chrome_top(vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let row = render_header(2, &vm.header, theme, cols);
    render_border(row, &theme.colors.border, cols)
}

/// Renders the detail/notice line, bottom border and footer.
pub fn render_chrome_bottom(
    vm: &UIViewModel,
    detail: Option<&str>,
    theme: &Theme,
    rows: usize,
    cols: usize,
) {
    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);
    let detail_row = border_row.saturating_sub(1);

    if let Some(notice) = &vm.notice {
        render_notice(detail_row, notice, theme, cols);
    } else if let Some(detail) = detail {
        position_cursor(detail_row, 1);
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("  {}", fit(detail, cols.saturating_sub(2)));
        print!("{}", Theme::reset());
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Search bar (when visible) followed by the listing table or empty state.
pub fn render_marketplace(vm: &UIViewModel, market: &MarketplaceInfo, theme: &Theme, cols: usize) {
    let mut current_row = BODY_START_ROW;

    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    if let Some(empty) = &market.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
        return;
    }

    current_row = render_table_headers(current_row, theme, cols);
    render_table_rows(current_row, &market.items, theme, cols);
}

pub fn render_mint(form: &MintFormInfo, theme: &Theme, cols: usize) {
    render_mint_form(BODY_START_ROW + 1, form, theme, cols);
}

/// Wallet body, bounded above the detail line.
pub fn render_wallet_view(wallet_info: &WalletInfo, theme: &Theme, rows: usize, cols: usize) {
    let last_row = rows.saturating_sub(4);
    wallet::render_wallet(BODY_START_ROW + 1, last_row, wallet_info, theme, cols);
}
