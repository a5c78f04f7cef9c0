//! Listing domain model and mint validation.
//!
//! A [`Listing`] is one car offered on the marketplace. Listings are created from
//! a validated [`MintFields`] submission and afterwards only change status
//! (`Available` → `Sold`) or disappear entirely.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque, stable listing identifier.
///
/// Issued by the store from a monotonic counter, so two listings minted within
/// the same clock tick still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListingId(u64);

impl ListingId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Sale status of a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListingStatus {
    #[default]
    Available,
    Pending,
    Sold,
}

impl ListingStatus {
    /// Lower-case label used for display and search matching.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Reference to a locally previewed image.
///
/// The marketplace never reads the referenced bytes; this is only carried
/// through to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A car offered on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub image: ImageRef,
    pub status: ListingStatus,
    /// Unix timestamp of creation. Informational only, never used as identity.
    pub created_at: i64,
}

/// Raw mint form input, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MintFields {
    pub name: String,
    pub model: String,
    pub year: String,
    pub price: String,
    pub image: String,
}

/// Fields of a mint submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedMint {
    pub name: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub image: ImageRef,
}

/// Per-field validity of a mint submission. `true` means the field is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityReport {
    pub name: bool,
    pub model: bool,
    pub year: bool,
    pub price: bool,
    pub image: bool,
}

impl Default for ValidityReport {
    fn default() -> Self {
        Self::all_valid()
    }
}

impl ValidityReport {
    #[must_use]
    pub const fn all_valid() -> Self {
        Self {
            name: true,
            model: true,
            year: true,
            price: true,
            image: true,
        }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.name && self.model && self.year && self.price && self.image
    }

    /// Names of the fields that failed validation, in form order.
    #[must_use]
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name),
            ("model", self.model),
            ("year", self.year),
            ("price", self.price),
            ("image", self.image),
        ]
        .into_iter()
        .filter_map(|(field, valid)| (!valid).then_some(field))
        .collect()
    }
}

impl MintFields {
    /// Validates every field and returns either the parsed values or a report.
    ///
    /// Rules: name, model and image must be non-empty after trimming; year must
    /// parse as an integer; price must parse as a finite, non-negative number.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidityReport`] when any field is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardealer::domain::MintFields;
    ///
    /// let fields = MintFields {
    ///     name: String::new(),
    ///     model: "M4".into(),
    ///     year: "2024".into(),
    ///     price: "1.9".into(),
    ///     image: "bmw.png".into(),
    /// };
    /// let report = fields.validate().unwrap_err();
    /// assert_eq!(report.invalid_fields(), vec!["name"]);
    /// ```
    pub fn validate(&self) -> std::result::Result<ValidatedMint, ValidityReport> {
        let name = self.name.trim();
        let model = self.model.trim();
        let image = self.image.trim();
        let year = self.year.trim().parse::<i32>().ok();
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p >= 0.0);

        let report = ValidityReport {
            name: !name.is_empty(),
            model: !model.is_empty(),
            year: year.is_some(),
            price: price.is_some(),
            image: !image.is_empty(),
        };

        match (year, price) {
            (Some(year), Some(price)) if report.is_valid() => Ok(ValidatedMint {
                name: name.to_string(),
                model: model.to_string(),
                year,
                price,
                image: ImageRef::new(image),
            }),
            _ => Err(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, model: &str, year: &str, price: &str, image: &str) -> MintFields {
        MintFields {
            name: name.into(),
            model: model.into(),
            year: year.into(),
            price: price.into(),
            image: image.into(),
        }
    }

    #[test]
    fn validate_accepts_complete_form() {
        let mint = fields(" Porsche 911 ", "Carrera", "2023", "2.8", "911.png")
            .validate()
            .expect("form is complete");
        assert_eq!(mint.name, "Porsche 911");
        assert_eq!(mint.year, 2023);
        assert!((mint.price - 2.8).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_reports_every_bad_field() {
        let report = fields("  ", "", "twenty", "-1", "").validate().unwrap_err();
        assert_eq!(
            report.invalid_fields(),
            vec!["name", "model", "year", "price", "image"]
        );
        assert!(!report.is_valid());
    }

    #[test]
    fn validate_rejects_non_finite_price() {
        let report = fields("a", "b", "2020", "NaN", "img").validate().unwrap_err();
        assert_eq!(report.invalid_fields(), vec!["price"]);
    }

    #[test]
    fn status_labels_are_lowercase() {
        assert_eq!(ListingStatus::Sold.to_string(), "sold");
        assert_eq!(ListingStatus::default(), ListingStatus::Available);
    }
}
