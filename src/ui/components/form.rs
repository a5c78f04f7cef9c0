//! Mint form component renderer.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::MintFormInfo;

const LABEL_WIDTH: usize = 12;
const LEFT_MARGIN: usize = 4;

/// Renders one row per field plus the validation summary, starting at `row`.
///
/// ```text
///     Car Name    [ BMW M4▏                    ]
///   ✗ Year        [ 20x4                       ]
/// ```
///
/// Returns the next free row.
pub fn render_mint_form(row: usize, form: &MintFormInfo, theme: &Theme, cols: usize) -> usize {
    let input_width = cols
        .saturating_sub(LEFT_MARGIN + LABEL_WIDTH + 6)
        .clamp(10, 48);
    let mut current_row = row;

    for field in &form.fields {
        position_cursor(current_row, 1);

        if field.is_invalid {
            print!("  {}✗ {}", Theme::fg(&theme.colors.invalid_fg), Theme::reset());
        } else {
            print!("{}", " ".repeat(LEFT_MARGIN));
        }

        if field.is_focused {
            print!("{}", Theme::bold());
        }
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{}", fit(field.label, LABEL_WIDTH));
        print!("{}", Theme::reset());

        let value = if field.is_focused {
            format!("{}▏", field.value)
        } else {
            field.value.clone()
        };

        let frame = if field.is_invalid {
            &theme.colors.invalid_fg
        } else {
            &theme.colors.border
        };
        print!("{}[ ", Theme::fg(frame));
        if field.is_focused {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}", fit(&value, input_width));
        print!("{}{} ]{}", Theme::reset(), Theme::fg(frame), Theme::reset());

        current_row += 2;
    }

    position_cursor(current_row, 1);
    print!("{}", " ".repeat(LEFT_MARGIN));
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("Year is a whole number, price a non-negative amount, image a path or URL.");
    print!("{}", Theme::reset());
    current_row += 1;

    if let Some(error) = &form.error {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(LEFT_MARGIN));
        print!("{}", Theme::fg(&theme.colors.invalid_fg));
        print!("{error}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
