//! Reservation model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::property::Property;

/// A guest's reservation joined with the reserved property and its average rating
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct GuestReservation {
    pub reservation_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guest_id: i32,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_flat_property_fields() {
        let reservation = GuestReservation {
            reservation_id: 1,
            start_date: NaiveDate::from_ymd_opt(2018, 9, 11).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2018, 9, 26).unwrap(),
            guest_id: 1,
            property: Property {
                id: 1,
                owner_id: 1,
                title: "Speed lamp".to_string(),
                description: Some("description".to_string()),
                thumbnail_photo_url: String::new(),
                cover_photo_url: String::new(),
                cost_per_night: 93061,
                parking_spaces: 6,
                number_of_bathrooms: 4,
                number_of_bedrooms: 8,
                country: "Canada".to_string(),
                street: "536 Namsub Highway".to_string(),
                city: "Sotboske".to_string(),
                province: "Quebec".to_string(),
                post_code: "28142".to_string(),
                active: true,
            },
            average_rating: None,
        };
        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["reservation_id"], 1);
        assert_eq!(json["title"], "Speed lamp");
    }
}
