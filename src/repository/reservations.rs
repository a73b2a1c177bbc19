//! Reservations repository

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::reservation::GuestReservation};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationStore: Send + Sync {
    /// Completed reservations of a guest, oldest first
    async fn list_past_for_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> AppResult<Vec<GuestReservation>>;
}

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationStore for ReservationsRepository {
    async fn list_past_for_guest(
        &self,
        guest_id: i32,
        limit: i64,
    ) -> AppResult<Vec<GuestReservation>> {
        let rows = sqlx::query_as::<_, GuestReservation>(
            r#"
            SELECT properties.*,
                   reservations.id AS reservation_id,
                   reservations.start_date,
                   reservations.end_date,
                   reservations.guest_id,
                   avg(property_reviews.rating) AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
              AND reservations.end_date < now()::date
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
