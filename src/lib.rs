//! Car Dealer: a terminal marketplace for car NFTs, shipped as a Zellij plugin.
//!
//! The plugin offers three views:
//! - **Marketplace**: browse, search, buy and delete listings
//! - **Mint**: list a new car through a validated form
//! - **Wallet**: sale proceeds, withdrawal and recent activity
//!
//! All state lives in memory for the lifetime of the plugin instance. There is
//! no chain, no network and no persistence.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, timers
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, actions                          │
//! │  - Search filter, mint form                         │
//! │  - Confirm / cancel / dismiss workflows             │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                              │
//! ┌───────────────────┐        ┌───────────────────────┐
//! │ UI Layer (ui/)    │        │ Storage Layer         │
//! │ - ANSI rendering  │        │ (storage/)            │
//! │ - Theming         │        │ - ListingStore trait  │
//! │ - Components      │        │ - In-memory store     │
//! └───────────────────┘        └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Listing, validation, wallet, errors (domain/)    │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry spans exported to a rotating file  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/cardealer.wasm" {
//!         theme "catppuccin-mocha"
//!         dismiss_after "2"
//!         seed_listings "true"
//!         currency "ETH"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use cardealer::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::RequestPurchase)?;
//! let (_, actions) = handle_event(&mut state, &Event::Confirm)?;
//! assert!(matches!(actions.as_slice(), [Action::ScheduleDismiss { .. }]));
//! # Ok::<(), cardealer::CarDealerError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputMode, ViewMode};
pub use domain::{CarDealerError, Listing, ListingId, ListingStatus, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use storage::{seed_demo_listings, MemoryStore};

/// Seconds the purchase success notice stays visible.
pub const DEFAULT_DISMISS_SECS: f64 = 2.0;

/// Address shown in the wallet view when none is configured.
pub const DEFAULT_WALLET_ADDRESS: &str = "0x742d...E5A8";

/// Label appended to prices.
pub const DEFAULT_CURRENCY: &str = "ETH";

/// Fee shown against each mint in the wallet activity feed.
pub const DEFAULT_MINT_FEE: f64 = 0.05;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// ```kdl
/// plugin location="file:/path/to/cardealer.wasm" {
///     theme "catppuccin-latte"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
///     dismiss_after "3.5"
///     seed_listings "false"
///     wallet_address "0xabc...123"
///     currency "MATIC"
///     mint_fee "0.1"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing filter (`trace` … `error`), `info` when unset.
    pub trace_level: Option<String>,

    /// Seconds before the purchase notice is dismissed. Always positive.
    pub dismiss_after_secs: f64,

    /// Whether a fresh store starts with the demo cars.
    pub seed_listings: bool,

    pub wallet_address: String,

    pub currency: String,

    /// Fee logged for each mint. Finite and non-negative.
    pub mint_fee: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: None,
            theme_file: None,
            trace_level: None,
            dismiss_after_secs: DEFAULT_DISMISS_SECS,
            seed_listings: true,
            wallet_address: DEFAULT_WALLET_ADDRESS.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            mint_fee: DEFAULT_MINT_FEE,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparseable values fall back to their defaults:
    ///
    /// - `dismiss_after`: finite, positive `f64`
    /// - `seed_listings`: `true`/`false`
    /// - `mint_fee`: finite, non-negative `f64`
    /// - `wallet_address`, `currency`: non-empty after trimming
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use cardealer::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("dismiss_after".to_string(), "0".to_string());
    /// map.insert("seed_listings".to_string(), "false".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.dismiss_after_secs, 2.0);
    /// assert!(!config.seed_listings);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let dismiss_after_secs = config
            .get("dismiss_after")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .unwrap_or(DEFAULT_DISMISS_SECS);

        let mint_fee = config
            .get("mint_fee")
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|fee| fee.is_finite() && *fee >= 0.0)
            .unwrap_or(DEFAULT_MINT_FEE);

        let seed_listings = config
            .get("seed_listings")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(true);

        Self {
            theme_name: non_empty("theme"),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level"),
            dismiss_after_secs,
            seed_listings,
            wallet_address: non_empty("wallet_address")
                .unwrap_or_else(|| DEFAULT_WALLET_ADDRESS.to_string()),
            currency: non_empty("currency").unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            mint_fee,
        }
    }

    /// Resolves the configured theme: file first, then name, then default.
    ///
    /// Load failures are logged and fall back to the default theme.
    #[must_use]
    pub fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            return Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds the initial [`AppState`] from configuration.
///
/// Loads the theme, seeds the demo listings when enabled and applies the
/// wallet and timing settings. Tracing is initialised separately by the
/// plugin shim.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(seed = config.seed_listings, "initializing car dealer plugin");

    let mut store = MemoryStore::default();
    if config.seed_listings {
        seed_demo_listings(&mut store);
    }

    let mut state = AppState::new(store, config.load_theme());
    state.dismiss_after_secs = config.dismiss_after_secs;
    state.wallet.address.clone_from(&config.wallet_address);
    state.currency.clone_from(&config.currency);
    state.mint_fee = config.mint_fee;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn invalid_dismiss_falls_back() {
        for raw in ["-1", "0", "soon", "NaN", "inf"] {
            let config = Config::from_zellij(&map(&[("dismiss_after", raw)]));
            assert!((config.dismiss_after_secs - DEFAULT_DISMISS_SECS).abs() < f64::EPSILON, "{raw}");
        }
        let config = Config::from_zellij(&map(&[("dismiss_after", " 3.5 ")]));
        assert!((config.dismiss_after_secs - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn initialize_applies_settings() {
        let config = Config::from_zellij(&map(&[
            ("seed_listings", "false"),
            ("currency", "MATIC"),
            ("wallet_address", "0xabc"),
            ("theme", "catppuccin-latte"),
            ("mint_fee", "0.1"),
        ]));
        let state = initialize(&config);
        assert!((state.mint_fee - 0.1).abs() < f64::EPSILON);
        assert!(state.filtered_listings.is_empty());
        assert_eq!(state.currency, "MATIC");
        assert_eq!(state.wallet.address, "0xabc");
        assert_eq!(state.theme.name, "catppuccin-latte");
    }

    #[test]
    fn negative_mint_fee_falls_back() {
        let config = Config::from_zellij(&map(&[("mint_fee", "-0.5")]));
        assert!((config.mint_fee - DEFAULT_MINT_FEE).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_theme_uses_default() {
        let config = Config::from_zellij(&map(&[("theme", "neon")]));
        assert_eq!(config.load_theme(), Theme::default());
    }
}
