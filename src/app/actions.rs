//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after each event. Actions are the
//! boundary between pure state transitions and host calls such as timers.
//!
//! # Example
//!
//! ```rust
//! use cardealer::app::Action;
//!
//! let actions = vec![Action::CloseFocus];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::app::workflow::DismissToken;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Starts a one-shot timer; when it fires, deliver
    /// [`Event::DismissElapsed`](crate::app::Event::DismissElapsed) with `token`.
    ScheduleDismiss {
        /// Token to hand back when the timer fires.
        token: DismissToken,
        /// Delay in seconds.
        after_secs: f64,
    },
}
