//! Listing table component renderer.
//!
//! Five columns: NAME (flexible), MODEL, YEAR, PRICE and STATUS. The selected
//! row is drawn with the selection colors across the full pane width.

use crate::domain::ListingStatus;
use crate::ui::helpers::{self, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const MARKER_WIDTH: usize = 2;
const MODEL_WIDTH: usize = 14;
const YEAR_WIDTH: usize = 6;
const PRICE_WIDTH: usize = 12;
const STATUS_WIDTH: usize = 10;
const MIN_NAME_WIDTH: usize = 8;

fn name_width(cols: usize) -> usize {
    cols.saturating_sub(MARKER_WIDTH + MODEL_WIDTH + YEAR_WIDTH + PRICE_WIDTH + STATUS_WIDTH)
        .max(MIN_NAME_WIDTH)
}

/// Renders the column headings at `row`. Returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(
        "{}{}{}{}{}{}",
        " ".repeat(MARKER_WIDTH),
        fit("NAME", name_width(cols)),
        fit("MODEL", MODEL_WIDTH),
        fit("YEAR", YEAR_WIDTH),
        fit("PRICE", PRICE_WIDTH),
        fit("STATUS", STATUS_WIDTH),
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders `items` one per row from `row`. Returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(row, 1);
    print!("{base}");
    print!("{}", if item.is_selected { "▶ " } else { "  " });

    let name_col = name_width(cols);
    let name = fit(&item.name, name_col);
    if item.highlight_ranges.is_empty() {
        print!("{name}");
    } else {
        helpers::render_highlighted_text(&name, &item.highlight_ranges, theme, item.is_selected);
    }

    print!("{}", fit(&item.model, MODEL_WIDTH));
    print!("{}", fit(&item.year, YEAR_WIDTH));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{}", fit(&item.price, PRICE_WIDTH));

    if !item.is_selected {
        let status_color = match item.status {
            ListingStatus::Sold => &theme.colors.status_sold_fg,
            ListingStatus::Available | ListingStatus::Pending => &theme.colors.status_available_fg,
        };
        print!("{}", Theme::fg(status_color));
    }
    print!("{}", fit(item.status.label(), STATUS_WIDTH));

    let line_len = MARKER_WIDTH + name_col + MODEL_WIDTH + YEAR_WIDTH + PRICE_WIDTH + STATUS_WIDTH;
    print!("{base}{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());

    row + 1
}
