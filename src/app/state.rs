//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for the plugin:
//! the listing store, the derived search results, the cursor, the mint form, the
//! workflow controller and the wallet.
//!
//! # Architecture
//!
//! Core data (the store, the wallet) is kept apart from derived state (filtered
//! listings, selected index). Every mutation of the store is followed by
//! [`AppState::apply_search_filter`] so the derived state never goes stale.
//! View models are computed on demand from state snapshots.
//!
//! # Example
//!
//! ```rust
//! use cardealer::app::AppState;
//! use cardealer::storage::{seed_demo_listings, MemoryStore};
//! use cardealer::ui::theme::Theme;
//!
//! let mut store = MemoryStore::default();
//! seed_demo_listings(&mut store);
//! let mut state = AppState::new(store, Theme::default());
//! state.search_query = "porsche".to_string();
//! state.apply_search_filter();
//! assert_eq!(state.filtered_listings.len(), 1);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! # let _ = viewmodel;
//! ```

use super::filter::filter_listings;
use super::form::MintForm;
use super::modes::{FormField, InputMode, ViewMode};
use super::workflow::{FlowKind, WorkflowController};
use crate::domain::{Listing, Wallet};
use crate::infrastructure::strip_host_prefix;
use crate::storage::{ListingStore, MemoryStore};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ActivityLine, DialogInfo, DisplayItem, EmptyState, FooterInfo, FormFieldInfo, HeaderInfo,
    MarketplaceInfo, MintFormInfo, NoticeInfo, SearchBarInfo, TabInfo, UIViewModel, ViewBody,
    WalletInfo,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonical listing collection.
    pub store: MemoryStore,

    /// Listings matching `search_query`, in store order.
    ///
    /// Recomputed by `apply_search_filter()`.
    pub filtered_listings: Vec<Listing>,

    /// Zero-based cursor within `filtered_listings`.
    pub selected_index: usize,

    pub input_mode: InputMode,

    pub view_mode: ViewMode,

    /// Marketplace search query.
    pub search_query: String,

    pub form: MintForm,

    /// Delete and purchase confirmation workflows.
    pub workflow: WorkflowController,

    pub wallet: Wallet,

    pub theme: Theme,

    /// Delay before the purchase notice is dismissed, in seconds.
    pub dismiss_after_secs: f64,

    /// Currency label appended to prices.
    pub currency: String,

    /// Fee logged against every mint.
    pub mint_fee: f64,
}

impl AppState {
    /// Creates a new state over `store` with default wallet and timing settings.
    ///
    /// Starts on the marketplace view in normal mode with the filter applied.
    #[must_use]
    pub fn new(store: MemoryStore, theme: Theme) -> Self {
        let mut state = Self {
            store,
            filtered_listings: vec![],
            selected_index: 0,
            input_mode: InputMode::Normal,
            view_mode: ViewMode::Marketplace,
            search_query: String::new(),
            form: MintForm::default(),
            workflow: WorkflowController::default(),
            wallet: Wallet::new(crate::DEFAULT_WALLET_ADDRESS),
            theme,
            dismiss_after_secs: crate::DEFAULT_DISMISS_SECS,
            currency: crate::DEFAULT_CURRENCY.to_string(),
            mint_fee: crate::DEFAULT_MINT_FEE,
        };
        state.apply_search_filter();
        state
    }

    /// Moves the cursor down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.filtered_listings.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.filtered_listings.len();
    }

    /// Moves the cursor up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.filtered_listings.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.filtered_listings.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Listing under the cursor, if any.
    #[must_use]
    pub fn selected_listing(&self) -> Option<&Listing> {
        self.filtered_listings.get(self.selected_index)
    }

    /// Recomputes `filtered_listings` from the store and clamps the cursor.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_listings = self.store.len(),
            query_len = self.search_query.len()
        )
        .entered();

        self.filtered_listings = filter_listings(&self.search_query, self.store.listings())
            .into_iter()
            .cloned()
            .collect();

        if self.filtered_listings.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.filtered_listings.len() - 1);
        }

        tracing::debug!(
            filtered_count = self.filtered_listings.len(),
            "search filter applied"
        );
    }

    /// Formats an amount with the configured currency label.
    #[must_use]
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{amount:.2} {}", self.currency)
    }

    /// Computes a renderable UI view model for a `rows` × `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match self.view_mode {
            ViewMode::Marketplace => ViewBody::Marketplace(self.compute_marketplace(rows, cols)),
            ViewMode::Mint => ViewBody::Mint(self.compute_mint_form()),
            ViewMode::Wallet => ViewBody::Wallet(self.compute_wallet()),
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            search_bar: self.compute_search_bar(),
            dialog: self.compute_dialog(),
            notice: self.compute_notice(),
            footer: self.compute_footer(),
        }
    }

    /// Windows the filtered listings around the cursor.
    ///
    /// The window is centred on the selection and shifted back when close to
    /// the end so the table stays full.
    fn compute_marketplace(&self, rows: usize, cols: usize) -> MarketplaceInfo {
        if self.filtered_listings.is_empty() {
            let empty_state = if self.store.is_empty() {
                EmptyState {
                    message: "No cars listed yet".to_string(),
                    subtitle: "Press 2 to mint the first one".to_string(),
                }
            } else {
                EmptyState {
                    message: format!("No cars match \"{}\"", self.search_query),
                    subtitle: "Esc clears the search".to_string(),
                }
            };
            return MarketplaceInfo {
                items: vec![],
                selected_index: 0,
                empty_state: Some(empty_state),
                selected_image: None,
            };
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.filtered_listings.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && self.filtered_listings.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let matcher = if self.search_query.is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default().ignore_case())
        };

        let items = self.filtered_listings[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, listing)| {
                let absolute_idx = visible_start + relative_idx;
                self.compute_display_item(listing, absolute_idx, cols, matcher.as_ref())
            })
            .collect();

        MarketplaceInfo {
            items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            empty_state: None,
            selected_image: self
                .selected_listing()
                .map(|listing| strip_host_prefix(listing.image.as_str())),
        }
    }

    fn compute_display_item(
        &self,
        listing: &Listing,
        absolute_idx: usize,
        cols: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        const FIXED_COLUMNS_WIDTH: usize = 50;

        let max_name = cols.saturating_sub(FIXED_COLUMNS_WIDTH).clamp(8, 30);
        let name = if listing.name.chars().count() > max_name {
            let kept: String = listing.name.chars().take(max_name - 3).collect();
            format!("{kept}...")
        } else {
            listing.name.clone()
        };

        let highlight_ranges =
            matcher.map_or_else(Vec::new, |m| self.compute_highlight_ranges(&name, m));

        DisplayItem {
            name,
            model: listing.model.clone(),
            year: listing.year.to_string(),
            price: self.format_amount(listing.price),
            status: listing.status,
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    /// Char range of the query inside the displayed name.
    ///
    /// Only a literal, case-insensitive substring is highlighted. Rows that
    /// matched on model or status get nothing. The matcher's best hit is kept
    /// when it is one contiguous run, otherwise the first occurrence is used.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let needle = self.search_query.to_lowercase();
        let haystack = text.to_lowercase();
        let Some(byte_start) = haystack.find(&needle) else {
            return vec![];
        };
        let len = needle.chars().count();

        if let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.search_query) {
            let contiguous = indices.len() == len && indices.windows(2).all(|w| w[1] == w[0] + 1);
            match indices.first() {
                Some(&start) if contiguous => return vec![(start, start + len)],
                _ => {}
            }
        }

        let start = haystack[..byte_start].chars().count();
        vec![(start, start + len)]
    }

    fn compute_mint_form(&self) -> MintFormInfo {
        let focused = match self.input_mode {
            InputMode::Form(field) => Some(field),
            _ => None,
        };

        let fields = FormField::ALL
            .iter()
            .map(|&field| FormFieldInfo {
                label: field.label(),
                value: self.form.value(field).to_string(),
                is_focused: focused == Some(field),
                is_invalid: !self.form.is_valid(field),
            })
            .collect();

        let invalid = self.form.validity.invalid_fields();
        let error = (!invalid.is_empty()).then(|| format!("Please fix: {}", invalid.join(", ")));

        MintFormInfo { fields, error }
    }

    fn compute_wallet(&self) -> WalletInfo {
        let now = chrono::Utc::now().timestamp();
        let activity = self
            .wallet
            .activity
            .iter()
            .map(|entry| ActivityLine {
                description: format!("{} {}", entry.kind.label(), entry.subject),
                amount: self.format_amount(entry.amount),
                time_ago: entry.time_ago(now),
            })
            .collect();

        WalletInfo {
            address: self.wallet.address.clone(),
            balance: self.format_amount(self.wallet.proceeds),
            activity,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let tabs = ViewMode::ALL
            .iter()
            .enumerate()
            .map(|(idx, &view)| TabInfo {
                label: format!("{} {}", idx + 1, view.title()),
                is_active: view == self.view_mode,
            })
            .collect();

        let title = match self.view_mode {
            ViewMode::Marketplace => format!(
                " Car Dealer · {} of {} cars ",
                self.filtered_listings.len(),
                self.store.len()
            ),
            ViewMode::Mint => " Car Dealer · Mint Car NFT ".to_string(),
            ViewMode::Wallet => " Car Dealer · My Wallet ".to_string(),
        };

        HeaderInfo { title, tabs }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.workflow.is_confirming() {
            "y/Enter: confirm  n/Esc: cancel"
        } else {
            match (self.view_mode, self.input_mode) {
                (_, InputMode::Search) => "Esc: clear  Enter: done  Type to filter",
                (_, InputMode::Form(_)) => "Tab/↓: next field  ↑: previous  Enter: mint  Esc: back",
                (ViewMode::Marketplace, InputMode::Normal) => {
                    "j/k: navigate  /: search  b: buy  d: delete  Tab: views  q: quit"
                }
                (ViewMode::Mint, InputMode::Normal) => "Tab: views  q: quit",
                (ViewMode::Wallet, InputMode::Normal) => "w: withdraw proceeds  Tab: views  q: quit",
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        let is_editing = self.input_mode == InputMode::Search;
        let visible = self.view_mode == ViewMode::Marketplace
            && (is_editing || !self.search_query.is_empty());

        visible.then(|| SearchBarInfo {
            query: self.search_query.clone(),
            is_editing,
        })
    }

    fn compute_dialog(&self) -> Option<DialogInfo> {
        let (kind, id) = self.workflow.active_dialog()?;
        let listing = self.store.get(id)?;

        let dialog = match kind {
            FlowKind::Delete => DialogInfo {
                title: " Delete listing ".to_string(),
                message: format!("Remove {} {} from the marketplace?", listing.year, listing.name),
                hint: "y: delete  n: keep".to_string(),
            },
            FlowKind::Purchase => DialogInfo {
                title: " Confirm purchase ".to_string(),
                message: format!(
                    "Buy {} {} for {}?",
                    listing.year,
                    listing.name,
                    self.format_amount(listing.price)
                ),
                hint: "y: buy  n: cancel".to_string(),
            },
        };
        Some(dialog)
    }

    fn compute_notice(&self) -> Option<NoticeInfo> {
        let id = self.workflow.notice()?;
        let name = self
            .store
            .get(id)
            .map_or_else(|| "Car".to_string(), |listing| listing.name.clone());
        Some(NoticeInfo {
            message: format!("✔ Purchase successful! {name} is yours."),
        })
    }

    /// Rows left for table items after header, tabs, borders, column headings,
    /// detail line and footer; the search bar takes three more.
    fn calculate_available_rows(&self, total_rows: usize) -> usize {
        let chrome = 9;
        if self.compute_search_bar().is_some() {
            total_rows.saturating_sub(chrome + 3)
        } else {
            total_rows.saturating_sub(chrome)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed_demo_listings;

    fn seeded_state() -> AppState {
        let mut store = MemoryStore::default();
        seed_demo_listings(&mut store);
        AppState::new(store, Theme::default())
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = seeded_state();
        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn filter_clamps_selection() {
        let mut state = seeded_state();
        state.selected_index = 2;
        state.search_query = "tesla".to_string();
        state.apply_search_filter();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_listing().map(|l| l.name.as_str()), Some("Tesla Model S"));
    }

    #[test]
    fn marketplace_viewmodel_highlights_matches() {
        let mut state = seeded_state();
        state.search_query = "911".to_string();
        state.apply_search_filter();

        let vm = state.compute_viewmodel(24, 100);
        let ViewBody::Marketplace(market) = vm.body else {
            panic!("expected marketplace body");
        };
        assert_eq!(market.items.len(), 1);
        assert_eq!(market.items[0].highlight_ranges, vec![(8, 11)]);
        assert_eq!(market.items[0].price, "2.80 ETH");
        assert!(vm.search_bar.is_some());
    }

    #[test]
    fn status_only_match_leaves_name_plain() {
        let mut state = seeded_state();
        state.search_query = "le".to_string();
        state.apply_search_filter();

        let ViewBody::Marketplace(market) = state.compute_viewmodel(24, 100).body else {
            panic!("expected marketplace body");
        };
        assert_eq!(market.items.len(), 3);
        for item in &market.items {
            assert!(item.highlight_ranges.is_empty(), "{}: {:?}", item.name, item.highlight_ranges);
        }
    }

    #[test]
    fn highlight_is_one_contiguous_substring() {
        let mut state = seeded_state();
        state.search_query = "EL".to_string();
        state.apply_search_filter();

        let ViewBody::Marketplace(market) = state.compute_viewmodel(24, 100).body else {
            panic!("expected marketplace body");
        };
        assert_eq!(market.items.len(), 1);
        assert_eq!(market.items[0].name, "Tesla Model S");
        assert_eq!(market.items[0].highlight_ranges, vec![(9, 11)]);
    }

    #[test]
    fn model_only_match_leaves_name_plain() {
        let mut state = seeded_state();
        state.search_query = "plaid".to_string();
        state.apply_search_filter();

        let ViewBody::Marketplace(market) = state.compute_viewmodel(24, 100).body else {
            panic!("expected marketplace body");
        };
        assert_eq!(market.items.len(), 1);
        assert!(market.items[0].highlight_ranges.is_empty());
    }

    #[test]
    fn window_follows_selection() {
        let mut store = MemoryStore::default();
        for _ in 0..6 {
            seed_demo_listings(&mut store);
        }
        let mut state = AppState::new(store, Theme::default());
        state.selected_index = 17;

        let vm = state.compute_viewmodel(14, 100);
        let ViewBody::Marketplace(market) = vm.body else {
            panic!("expected marketplace body");
        };
        assert_eq!(market.items.len(), 5);
        assert_eq!(market.selected_index, 4);
        assert!(market.items[4].is_selected);
    }

    #[test]
    fn empty_marketplace_explains_itself() {
        let state = AppState::new(MemoryStore::default(), Theme::default());
        let ViewBody::Marketplace(market) = state.compute_viewmodel(24, 80).body else {
            panic!("expected marketplace body");
        };
        assert!(market.empty_state.is_some());
    }
}
