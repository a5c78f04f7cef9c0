//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute a [`UIViewModel`] from `AppState`, then
//! hand its parts to the components. Nothing here reads `AppState` directly
//! apart from the theme.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{UIViewModel, ViewBody};

/// Renders the plugin UI to stdout for a `rows` × `cols` pane.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    components::render_chrome_top(vm, theme, cols);

    let detail = match &vm.body {
        ViewBody::Marketplace(market) => {
            components::render_marketplace(vm, market, theme, cols);
            market.selected_image.as_deref()
        }
        ViewBody::Mint(form) => {
            components::render_mint(form, theme, cols);
            None
        }
        ViewBody::Wallet(wallet) => {
            components::render_wallet_view(wallet, theme, rows, cols);
            None
        }
    };

    components::render_chrome_bottom(vm, detail, theme, rows, cols);

    if let Some(dialog) = &vm.dialog {
        components::render_dialog(dialog, theme, rows, cols);
    }
}
