//! Wallet model: display address, sale proceeds and the recent activity feed.

use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// Maximum number of entries retained in the activity feed.
pub const MAX_ACTIVITY: usize = 50;

/// What happened in an activity feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    Minted,
    Sold,
    Removed,
    Withdrew,
}

impl ActivityKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Minted => "Minted",
            Self::Sold => "Sold",
            Self::Removed => "Removed",
            Self::Withdrew => "Withdrew",
        }
    }
}

/// One entry in the wallet activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub kind: ActivityKind,
    /// Listing name, or a description for wallet-level entries.
    pub subject: String,
    pub amount: f64,
    /// Unix timestamp of the entry.
    pub at: i64,
}

impl Activity {
    /// Returns a human-readable description of how long ago this happened.
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    ///
    /// # Examples
    ///
    /// ```
    /// use cardealer::domain::{Activity, ActivityKind};
    ///
    /// let entry = Activity { kind: ActivityKind::Sold, subject: "BMW M4".into(), amount: 1.9, at: 1_000 };
    /// assert_eq!(entry.time_ago(1_030), "just now");
    /// assert_eq!(entry.time_ago(1_000 + 7_200), "2h ago");
    /// ```
    #[must_use]
    pub fn time_ago(&self, now: i64) -> String {
        let diff = now - self.at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        }
    }
}

/// The demo wallet shown in the Wallet view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    /// Sale proceeds not yet withdrawn.
    pub proceeds: f64,
    /// Most recent first, capped at [`MAX_ACTIVITY`].
    pub activity: Vec<Activity>,
}

impl Wallet {
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            proceeds: 0.0,
            activity: Vec::new(),
        }
    }

    /// Prepends an activity entry, dropping the oldest beyond the cap.
    pub fn record(&mut self, kind: ActivityKind, subject: impl Into<String>, amount: f64) {
        self.activity.insert(
            0,
            Activity {
                kind,
                subject: subject.into(),
                amount,
                at: chrono::Utc::now().timestamp(),
            },
        );
        self.activity.truncate(MAX_ACTIVITY);
    }

    /// Credits a sale to the proceeds balance and logs it.
    pub fn record_sale(&mut self, subject: impl Into<String>, price: f64) {
        self.proceeds += price;
        self.record(ActivityKind::Sold, subject, price);
    }

    /// Withdraws the whole proceeds balance.
    ///
    /// Returns the withdrawn amount, or `None` when there is nothing to withdraw.
    pub fn withdraw(&mut self) -> Option<f64> {
        if self.proceeds <= 0.0 {
            return None;
        }
        let amount = std::mem::take(&mut self.proceeds);
        self.record(ActivityKind::Withdrew, "proceeds", amount);
        Some(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sale_then_withdraw_moves_balance_to_zero() {
        let mut wallet = Wallet::new("0xabc");
        wallet.record_sale("Tesla Model S", 1.5);
        wallet.record_sale("BMW M4", 1.9);
        assert!((wallet.proceeds - 3.4).abs() < 1e-9);

        let withdrawn = wallet.withdraw().expect("balance is positive");
        assert!((withdrawn - 3.4).abs() < 1e-9);
        assert!(wallet.proceeds.abs() < f64::EPSILON);
        assert_eq!(wallet.activity[0].kind, ActivityKind::Withdrew);
        assert_eq!(wallet.activity.len(), 3);
    }

    #[test]
    fn withdraw_with_empty_balance_is_noop() {
        let mut wallet = Wallet::new("0xabc");
        assert_eq!(wallet.withdraw(), None);
        assert!(wallet.activity.is_empty());
    }

    #[test]
    fn activity_feed_is_capped() {
        let mut wallet = Wallet::new("0xabc");
        for i in 0..(MAX_ACTIVITY + 5) {
            wallet.record(ActivityKind::Minted, format!("car {i}"), 0.1);
        }
        assert_eq!(wallet.activity.len(), MAX_ACTIVITY);
        assert_eq!(wallet.activity[0].subject, format!("car {}", MAX_ACTIVITY + 4));
    }

    #[test]
    fn time_ago_buckets() {
        let entry = Activity {
            kind: ActivityKind::Minted,
            subject: "x".into(),
            amount: 0.0,
            at: 0,
        };
        assert_eq!(entry.time_ago(300), "5m ago");
        assert_eq!(entry.time_ago(3 * SECONDS_PER_DAY), "3d ago");
    }
}
