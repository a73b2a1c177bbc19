//! Property model, search filters and money/rating value types

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Property row from the `properties` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Nightly cost in minor currency units (cents)
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// A property joined with the average of its review ratings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<Decimal>,
}

/// Create property request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProperty {
    pub owner_id: i32,
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Thumbnail photo URL is required"))]
    pub thumbnail_photo_url: String,
    #[validate(length(min = 1, max = 255, message = "Cover photo URL is required"))]
    pub cover_photo_url: String,
    /// Nightly cost, given in currency units
    pub cost_per_night: Price,
    #[validate(range(min = 0, message = "Parking spaces cannot be negative"))]
    pub parking_spaces: i32,
    #[validate(range(min = 0, message = "Number of bathrooms cannot be negative"))]
    pub number_of_bathrooms: i32,
    #[validate(range(min = 0, message = "Number of bedrooms cannot be negative"))]
    pub number_of_bedrooms: i32,
    #[validate(length(min = 1, max = 255, message = "Country is required"))]
    pub country: String,
    #[validate(length(min = 1, max = 255, message = "Street is required"))]
    pub street: String,
    #[validate(length(min = 1, max = 255, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, max = 255, message = "Province is required"))]
    pub province: String,
    #[validate(length(min = 1, max = 255, message = "Post code is required"))]
    pub post_code: String,
}

/// A non-negative amount stored in minor currency units.
///
/// Built from a decimal amount of currency units; `25.50` becomes `2550`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Price(i64);

impl Price {
    pub fn from_minor_units(minor_units: i64) -> AppResult<Self> {
        if minor_units < 0 {
            return Err(AppError::Validation("Price cannot be negative".to_string()));
        }
        Ok(Self(minor_units))
    }

    pub fn minor_units(self) -> i64 {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = AppError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        if amount < Decimal::ZERO {
            return Err(AppError::Validation(format!("Price cannot be negative: {}", amount)));
        }
        let minor = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .ok_or_else(|| AppError::Validation(format!("Price is out of range: {}", amount)))?;
        if !minor.fract().is_zero() {
            return Err(AppError::Validation(format!(
                "Price has more than two decimal places: {}",
                amount
            )));
        }
        minor
            .to_i64()
            .map(Price)
            .ok_or_else(|| AppError::Validation(format!("Price is out of range: {}", amount)))
    }
}

/// Review rating on the 1-5 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct Rating(Decimal);

impl Rating {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 5;

    pub fn value(self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Rating {
    type Error = AppError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value < Decimal::from(Self::MIN) || value > Decimal::from(Self::MAX) {
            return Err(AppError::Validation(format!(
                "Rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )));
        }
        Ok(Self(value))
    }
}

/// Typed property search filters. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FilterOptions {
    /// Free-text city search; the first character is a sigil and is not searched for
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<Price>,
    pub maximum_price_per_night: Option<Price>,
    pub minimum_rating: Option<Rating>,
}

impl FilterOptions {
    /// Reject a price window whose minimum exceeds its maximum
    pub fn check_price_range(&self) -> AppResult<()> {
        if let (Some(min), Some(max)) =
            (self.minimum_price_per_night, self.maximum_price_per_night)
        {
            if min > max {
                return Err(AppError::Validation(
                    "minimum_price_per_night cannot exceed maximum_price_per_night".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Raw search input as submitted by a form or query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyQuery {
    pub city: Option<String>,
    pub owner_id: Option<String>,
    pub minimum_price_per_night: Option<String>,
    pub maximum_price_per_night: Option<String>,
    pub minimum_rating: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_decimal(field: &str, raw: &str) -> AppResult<Decimal> {
    Decimal::from_str(raw)
        .map_err(|_| AppError::Validation(format!("{} must be a number, got '{}'", field, raw)))
}

impl TryFrom<&PropertyQuery> for FilterOptions {
    type Error = AppError;

    fn try_from(query: &PropertyQuery) -> Result<Self, Self::Error> {
        let owner_id = present(&query.owner_id)
            .map(|raw| {
                raw.parse::<i32>().map_err(|_| {
                    AppError::Validation(format!("owner_id must be an integer, got '{}'", raw))
                })
            })
            .transpose()?;

        let minimum_price_per_night = present(&query.minimum_price_per_night)
            .map(|raw| parse_decimal("minimum_price_per_night", raw).and_then(Price::try_from))
            .transpose()?;

        let maximum_price_per_night = present(&query.maximum_price_per_night)
            .map(|raw| parse_decimal("maximum_price_per_night", raw).and_then(Price::try_from))
            .transpose()?;

        let minimum_rating = present(&query.minimum_rating)
            .map(|raw| parse_decimal("minimum_rating", raw).and_then(Rating::try_from))
            .transpose()?;

        let options = FilterOptions {
            city: present(&query.city).map(str::to_string),
            owner_id,
            minimum_price_per_night,
            maximum_price_per_night,
            minimum_rating,
        };
        options.check_price_range()?;
        Ok(options)
    }
}
