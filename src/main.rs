//! Zellij plugin wrapper and entry point.
//!
//! Thin layer between the `cardealer` library and the Zellij plugin API: it
//! turns key presses and timers into library [`Event`]s and library
//! [`Action`]s into host calls. No marketplace logic lives here.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialise tracing, build `AppState`
//! 2. **Subscribe**: Key, Timer, `BeforeClose`, permission results
//! 3. **Update**: Map event, delegate to `handle_event`, run actions
//! 4. **Render**: Call the library renderer
//!
//! # Timers
//!
//! `set_timeout` fires a bare `Timer` event with no identifier. Every
//! `ScheduleDismiss` action queues its token and arms one timeout of the same
//! length, so timers fire in the order they were queued and each `Timer` pops
//! the oldest token. The library ignores tokens it no longer cares about.
//!
//! # Keybindings
//!
//! Any view, normal mode:
//! - `Tab`: Next view
//! - `1`/`2`/`3`: Marketplace / Mint / Wallet
//! - `q`: Close plugin
//!
//! Marketplace:
//! - `j`/`Down`, `k`/`Up`: Move selection
//! - `/`: Search (`Enter` keeps the filter, `Esc` clears it)
//! - `b`: Buy selected car
//! - `d`: Delete selected listing
//!
//! Dialog open:
//! - `y`/`Enter`: Confirm
//! - `n`/`Esc`: Cancel
//!
//! Mint form:
//! - Type to edit the focused field
//! - `Tab`/`Down`: Next field, `Shift+Tab`/`Up`: Previous field
//! - `Enter`: Mint
//! - `Esc`: Back to the marketplace
//!
//! Wallet:
//! - `w`: Withdraw proceeds

#![allow(clippy::multiple_crate_versions)]

use std::collections::{BTreeMap, VecDeque};
use zellij_tile::prelude::*;

use cardealer::app::DismissToken;
use cardealer::{handle_event, Action, Config, Event, InputMode, ViewMode};

register_plugin!(State);

/// Plugin state wrapper.
struct State {
    /// Core application state from library layer.
    app: cardealer::AppState,

    /// Tokens of armed dismiss timers, oldest first.
    pending_timers: VecDeque<DismissToken>,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: cardealer::initialize(&Config::default()),
            pending_timers: VecDeque::new(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        cardealer::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(
            dismiss_after = config.dismiss_after_secs,
            seed_listings = config.seed_listings,
            theme = ?config.theme_name,
            "parsed configuration"
        );
        self.app = cardealer::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::BeforeClose,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!(listings = self.app.filtered_listings.len(), "plugin load complete");
    }

    /// Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let _guard =
            tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(elapsed) => {
                let Some(token) = self.pending_timers.pop_front() else {
                    tracing::debug!(elapsed, "timer fired with no pending dismiss");
                    return false;
                };
                Event::DismissElapsed(token)
            }
            zellij_tile::prelude::Event::BeforeClose => {
                self.pending_timers.clear();
                Event::Teardown
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                tracing::debug!(granted = matches!(status, PermissionStatus::Granted), "permission result");
                return false;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render,
                    "event handled"
                );
                for action in &actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        cardealer::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::BeforeClose => "BeforeClose".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps a key press to a library event for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if self.app.workflow.is_confirming() {
            return match key.bare_key {
                BareKey::Char('y') | BareKey::Enter => Some(Event::Confirm),
                BareKey::Char('n') | BareKey::Esc => Some(Event::Cancel),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Search => Some(match key.bare_key {
                BareKey::Esc => Event::Escape,
                BareKey::Enter => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Form(_) => Some(match key.bare_key {
                BareKey::Esc => Event::Escape,
                BareKey::Enter => Event::SubmitMint,
                BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::PrevField,
                BareKey::Tab | BareKey::Down => Event::NextField,
                BareKey::Up => Event::PrevField,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Normal => self.map_normal_key(key),
        }
    }

    fn map_normal_key(&self, key: &KeyWithModifier) -> Option<Event> {
        let view = self.app.view_mode;
        Some(match key.bare_key {
            BareKey::Tab => Event::ShowView(view.next()),
            BareKey::Char('1') => Event::ShowView(ViewMode::Marketplace),
            BareKey::Char('2') => Event::ShowView(ViewMode::Mint),
            BareKey::Char('3') => Event::ShowView(ViewMode::Wallet),
            BareKey::Char('q') => Event::CloseFocus,
            BareKey::Down | BareKey::Char('j') if view == ViewMode::Marketplace => Event::KeyDown,
            BareKey::Up | BareKey::Char('k') if view == ViewMode::Marketplace => Event::KeyUp,
            BareKey::Char('/') if view == ViewMode::Marketplace => Event::SearchMode,
            BareKey::Char('b') if view == ViewMode::Marketplace => Event::RequestPurchase,
            BareKey::Char('d') if view == ViewMode::Marketplace => Event::RequestDelete,
            BareKey::Esc if view == ViewMode::Marketplace => Event::Escape,
            BareKey::Char('w') if view == ViewMode::Wallet => Event::Withdraw,
            _ => return None,
        })
    }

    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleDismiss { token, after_secs } => {
                tracing::debug!(?token, after_secs, "scheduling notice dismiss");
                self.pending_timers.push_back(*token);
                set_timeout(*after_secs);
            }
        }
    }
}
