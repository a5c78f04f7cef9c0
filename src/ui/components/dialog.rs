//! Confirmation dialog and transient notice renderers.

use crate::ui::helpers::{center_padding, char_width, fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DialogInfo, NoticeInfo};

/// Draws the dialog as a bordered box centred over whatever is below it.
///
/// ```text
/// ╭─ Confirm purchase ─────────────╮
/// │                                │
/// │  Buy 2024 Tesla Model S for …  │
/// │  y: buy  n: cancel             │
/// ╰────────────────────────────────╯
/// ```
pub fn render_dialog(dialog: &DialogInfo, theme: &Theme, rows: usize, cols: usize) {
    let content_width = char_width(&dialog.message)
        .max(char_width(&dialog.hint))
        .max(char_width(&dialog.title) + 2);
    let inner_width = (content_width + 4).min(cols.saturating_sub(4));
    let left = cols.saturating_sub(inner_width + 2) / 2 + 1;
    let top = rows.saturating_sub(5) / 2 + 1;
    let border = Theme::fg(&theme.colors.dialog_border);

    let title = fit(&dialog.title, inner_width.saturating_sub(1));
    position_cursor(top, left);
    print!("{border}╭─{}", Theme::bold());
    print!("{title}{}{border}", Theme::reset());
    print!(
        "{}╮{}",
        "─".repeat(inner_width.saturating_sub(char_width(&title) + 1)),
        Theme::reset()
    );

    let body = [
        (String::new(), &theme.colors.text_normal),
        (dialog.message.clone(), &theme.colors.text_normal),
        (dialog.hint.clone(), &theme.colors.text_dim),
    ];
    for (offset, (line, color)) in body.iter().enumerate() {
        position_cursor(top + 1 + offset, left);
        print!("{border}│{}", Theme::fg(color));
        print!("  {}", fit(line, inner_width.saturating_sub(2)));
        print!("{border}│{}", Theme::reset());
    }

    position_cursor(top + 4, left);
    print!("{border}╰{}╯{}", "─".repeat(inner_width), Theme::reset());
}

/// Draws the notice centred on `row`, clearing the rest of the line.
pub fn render_notice(row: usize, notice: &NoticeInfo, theme: &Theme, cols: usize) {
    let padding = center_padding(&notice.message, cols);

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.notice_fg));
    print!("{}", notice.message);
    print!("{}", Theme::reset());
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(padding + char_width(&notice.message)))
    );
}
