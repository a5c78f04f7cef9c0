//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that happens to
//! the plugin: key presses already translated by the Zellij shim, elapsed
//! timers and lifecycle notifications. It mutates [`AppState`] and returns
//! whether a re-render is needed plus the side effects to run.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `ShowView`
//! - **Search**: `SearchMode`, `ExitSearch`, `Char`, `Backspace`, `Escape`
//! - **Mint form**: `Char`, `Backspace`, `NextField`, `PrevField`, `SubmitMint`
//! - **Workflow**: `RequestPurchase`, `RequestDelete`, `Confirm`, `Cancel`,
//!   `DismissElapsed`
//! - **Wallet**: `Withdraw`
//! - **Lifecycle**: `CloseFocus`, `Teardown`
//!
//! Workflow refusals (busy dialog, sold listing, vanished listing) are logged
//! and otherwise ignored; they never surface as errors to the caller.
//!
//! # Example
//!
//! ```rust
//! use cardealer::app::{handle_event, AppState, Event};
//! use cardealer::storage::{seed_demo_listings, MemoryStore};
//! use cardealer::ui::theme::Theme;
//!
//! let mut store = MemoryStore::default();
//! seed_demo_listings(&mut store);
//! let mut state = AppState::new(store, Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(should_render);
//! assert!(actions.is_empty());
//! # Ok::<(), cardealer::CarDealerError>(())
//! ```

use super::modes::{FormField, InputMode, ViewMode};
use super::workflow::{Commit, DismissToken};
use crate::app::{Action, AppState};
use crate::domain::error::{CarDealerError, Result};
use crate::domain::ActivityKind;
use crate::infrastructure::expand_tilde;
use crate::storage::ListingStore;

/// Events delivered to [`handle_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the marketplace cursor down (wraps to top).
    KeyDown,
    /// Moves the marketplace cursor up (wraps to bottom).
    KeyUp,
    /// Switches to a view. Ignored while a dialog is open.
    ShowView(ViewMode),
    /// Starts editing a fresh marketplace search query.
    SearchMode,
    /// Stops editing the search query but keeps the filter applied.
    ExitSearch,
    /// Typed character for the search bar or the focused form field.
    Char(char),
    Backspace,
    /// Clears the search, or leaves the mint form for the marketplace.
    Escape,
    NextField,
    PrevField,
    /// Validates the mint form and lists the car on success.
    SubmitMint,
    /// Opens the purchase prompt for the selected listing.
    RequestPurchase,
    /// Opens the delete prompt for the selected listing.
    RequestDelete,
    /// Applies the open prompt.
    Confirm,
    /// Closes the open prompt.
    Cancel,
    /// A scheduled dismiss timer fired.
    DismissElapsed(DismissToken),
    /// Moves wallet proceeds out.
    Withdraw,
    /// Hides the plugin pane.
    CloseFocus,
    /// Plugin is unloading; drops pending timers.
    Teardown,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the UI must be redrawn.
///
/// # Errors
///
/// Only unexpected store failures propagate. Validation failures are written
/// to the mint form and workflow refusals are swallowed after logging.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown | Event::KeyUp => {
            if state.view_mode != ViewMode::Marketplace || state.workflow.is_confirming() {
                return Ok((false, vec![]));
            }
            if *event == Event::KeyDown {
                state.move_selection_down();
            } else {
                state.move_selection_up();
            }
            Ok((true, vec![]))
        }
        Event::ShowView(view) => {
            if state.workflow.is_confirming() || state.view_mode == *view {
                return Ok((false, vec![]));
            }
            tracing::debug!(from = ?state.view_mode, to = ?view, "switching view");
            state.view_mode = *view;
            state.input_mode = if *view == ViewMode::Mint {
                InputMode::Form(FormField::Name)
            } else {
                InputMode::Normal
            };
            Ok((true, vec![]))
        }
        Event::SearchMode => {
            if state.view_mode != ViewMode::Marketplace || state.workflow.is_confirming() {
                return Ok((false, vec![]));
            }
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search;
            state.search_query = String::new();
            state.apply_search_filter();
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            tracing::debug!(query = %state.search_query, "search committed");
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search => {
                state.search_query.push(*c);
                tracing::trace!(query = %state.search_query, "search query updated");
                state.apply_search_filter();
                Ok((true, vec![]))
            }
            InputMode::Form(field) => {
                state.form.push(field, *c);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search => {
                state.search_query.pop();
                state.apply_search_filter();
                Ok((true, vec![]))
            }
            InputMode::Form(field) => {
                state.form.pop(field);
                Ok((true, vec![]))
            }
            InputMode::Normal => Ok((false, vec![])),
        },
        Event::Escape => {
            if state.workflow.is_confirming() {
                return handle_event(state, &Event::Cancel);
            }
            match state.input_mode {
                InputMode::Form(_) => {
                    state.view_mode = ViewMode::Marketplace;
                    state.input_mode = InputMode::Normal;
                    Ok((true, vec![]))
                }
                InputMode::Search | InputMode::Normal => {
                    if state.input_mode == InputMode::Normal && state.search_query.is_empty() {
                        return Ok((false, vec![]));
                    }
                    state.input_mode = InputMode::Normal;
                    state.search_query = String::new();
                    state.apply_search_filter();
                    Ok((true, vec![]))
                }
            }
        }
        Event::NextField | Event::PrevField => {
            let InputMode::Form(field) = state.input_mode else {
                return Ok((false, vec![]));
            };
            let next = if *event == Event::NextField {
                field.next()
            } else {
                field.prev()
            };
            state.input_mode = InputMode::Form(next);
            Ok((true, vec![]))
        }
        Event::SubmitMint => submit_mint(state),
        Event::RequestPurchase | Event::RequestDelete => {
            if state.view_mode != ViewMode::Marketplace || state.input_mode != InputMode::Normal {
                return Ok((false, vec![]));
            }
            let Some(listing) = state.selected_listing().cloned() else {
                tracing::debug!("no listing selected");
                return Ok((false, vec![]));
            };

            let requested = if *event == Event::RequestPurchase {
                state.workflow.request_purchase(&listing)
            } else {
                state.workflow.request_delete(&listing)
            };

            match requested {
                Ok(()) => Ok((true, vec![])),
                Err(err) => {
                    tracing::debug!(listing_id = %listing.id, error = %err, "request refused");
                    Ok((false, vec![]))
                }
            }
        }
        Event::Confirm => confirm(state),
        Event::Cancel => match state.workflow.cancel() {
            Ok(_) => Ok((true, vec![])),
            Err(err) => {
                tracing::debug!(error = %err, "nothing to cancel");
                Ok((false, vec![]))
            }
        },
        Event::DismissElapsed(token) => {
            let dismissed = state.workflow.dismiss_elapsed(*token);
            Ok((dismissed, vec![]))
        }
        Event::Withdraw => {
            if state.view_mode != ViewMode::Wallet {
                return Ok((false, vec![]));
            }
            match state.wallet.withdraw() {
                Some(amount) => {
                    tracing::debug!(amount, "proceeds withdrawn");
                    Ok((true, vec![]))
                }
                None => Ok((false, vec![])),
            }
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Teardown => {
            state.workflow.teardown();
            Ok((false, vec![]))
        }
    }
}

fn submit_mint(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if !matches!(state.input_mode, InputMode::Form(_)) {
        return Ok((false, vec![]));
    }

    let mut fields = state.form.fields.clone();
    fields.image = expand_tilde(fields.image.trim());

    match state.store.create(&fields) {
        Ok(id) => {
            if let Some(listing) = state.store.get(id) {
                state
                    .wallet
                    .record(ActivityKind::Minted, listing.name.clone(), state.mint_fee);
            }
            tracing::debug!(listing_id = %id, "listing minted");

            state.form.clear();
            state.view_mode = ViewMode::Marketplace;
            state.input_mode = InputMode::Normal;
            state.apply_search_filter();
            if let Some(pos) = state.filtered_listings.iter().position(|l| l.id == id) {
                state.selected_index = pos;
            }
            Ok((true, vec![]))
        }
        Err(CarDealerError::Validation(report)) => {
            tracing::debug!(invalid = ?report.invalid_fields(), "mint rejected");
            state.form.validity = report;
            Ok((true, vec![]))
        }
        Err(err) => Err(err),
    }
}

fn confirm(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if !state.workflow.is_confirming() {
        return Ok((false, vec![]));
    }

    let outcome = state.workflow.confirm(&mut state.store);
    let actions = match outcome {
        Ok(Commit::Deleted(listing)) => {
            state
                .wallet
                .record(ActivityKind::Removed, listing.name, listing.price);
            vec![]
        }
        Ok(Commit::Purchased { listing, dismiss }) => {
            state.wallet.record_sale(listing.name, listing.price);
            vec![Action::ScheduleDismiss {
                token: dismiss,
                after_secs: state.dismiss_after_secs,
            }]
        }
        Err(err) => {
            tracing::debug!(error = %err, "confirmation had no effect");
            vec![]
        }
    };

    state.apply_search_filter();
    Ok((true, actions))
}
