//! Shared rendering utilities.
//!
//! All widths here are counted in characters, not bytes, so names such as
//! `Citroën DS` line up in the table.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row`/`col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates or right-pads `text` to exactly `width` characters.
///
/// Truncated text ends in `…`.
///
/// ```
/// use cardealer::ui::helpers::fit;
///
/// assert_eq!(fit("BMW", 5), "BMW  ");
/// assert_eq!(fit("Porsche 911", 6), "Porsc…");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = char_width(text);
    if len <= width {
        return format!("{text}{}", " ".repeat(width - len));
    }
    if width == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

/// Left padding that centres `text` in `cols`.
#[must_use]
pub fn center_padding(text: &str, cols: usize) -> usize {
    cols.saturating_sub(char_width(text)) / 2
}

/// Prints `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive. Selected rows
/// keep their selection colors after each highlight.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    let chars: Vec<char> = text.chars().collect();
    let restore = if is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    let mut current_pos = 0;
    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if start >= end {
            continue;
        }

        let plain: String = chars[current_pos..start].iter().collect();
        print!("{plain}");

        print!("{}", Theme::underline());
        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let matched: String = chars[start..end].iter().collect();
        print!("{matched}");
        print!("{}{restore}", Theme::reset());

        current_pos = end;
    }

    let remaining: String = chars[current_pos..].iter().collect();
    print!("{remaining}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_counts_characters() {
        assert_eq!(fit("Citroën", 8), "Citroën ");
        assert_eq!(char_width(&fit("Citroën DS", 4)), 4);
        assert_eq!(fit("anything", 0), "");
    }

    #[test]
    fn center_padding_splits_evenly() {
        assert_eq!(center_padding("abcd", 10), 3);
        assert_eq!(center_padding("too wide", 4), 0);
    }
}
