//! Input and view mode state types for the application.
//!
//! These enums decide which keybindings are active and which screen is drawn.
//!
//! # State Machine
//!
//! Views:
//! - **Marketplace**: Browse, search, buy and delete listings
//! - **Mint**: Fill in and submit the mint form
//! - **Wallet**: Balance, withdrawal and recent activity
//!
//! Input modes:
//! - **Normal**: Navigation and single-key commands
//! - **Search**: Typing into the marketplace search bar
//! - **Form**: Typing into one of the mint form fields
//!
//! # Example
//!
//! ```rust
//! use cardealer::app::modes::{FormField, InputMode, ViewMode};
//!
//! let input_mode = InputMode::Form(FormField::Name);
//! assert_eq!(ViewMode::Marketplace.next(), ViewMode::Mint);
//! ```

/// Mint form input fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Model,
    Year,
    Price,
    Image,
}

impl FormField {
    pub const ALL: [Self; 5] = [Self::Name, Self::Model, Self::Year, Self::Price, Self::Image];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Car Name",
            Self::Model => "Model",
            Self::Year => "Year",
            Self::Price => "Price",
            Self::Image => "Image",
        }
    }

    /// Next field, wrapping from the last to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Model,
            Self::Model => Self::Year,
            Self::Year => Self::Price,
            Self::Price => Self::Image,
            Self::Image => Self::Name,
        }
    }

    /// Previous field, wrapping from the first to the last.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Image,
            Self::Model => Self::Name,
            Self::Year => Self::Model,
            Self::Price => Self::Year,
            Self::Image => Self::Price,
        }
    }
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Navigation and command keys.
    Normal,

    /// Characters go to the marketplace search query.
    Search,

    /// Characters go to the focused mint form field.
    Form(FormField),
}

/// Screen currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Marketplace,
    Mint,
    Wallet,
}

impl ViewMode {
    pub const ALL: [Self; 3] = [Self::Marketplace, Self::Mint, Self::Wallet];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Marketplace => "Marketplace",
            Self::Mint => "Mint",
            Self::Wallet => "Wallet",
        }
    }

    /// Next view in tab order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Marketplace => Self::Mint,
            Self::Mint => Self::Wallet,
            Self::Wallet => Self::Marketplace,
        }
    }
}
