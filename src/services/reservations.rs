//! Reservations service

use std::sync::Arc;

use super::resolve_limit;
use crate::{
    config::SearchConfig,
    error::AppResult,
    models::reservation::GuestReservation,
    repository::ReservationStore,
};

#[derive(Clone)]
pub struct ReservationsService {
    store: Arc<dyn ReservationStore>,
    config: SearchConfig,
}

impl ReservationsService {
    pub fn new(store: Arc<dyn ReservationStore>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    /// Past reservations of a guest
    pub async fn list_past_for_guest(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> AppResult<Vec<GuestReservation>> {
        let limit = resolve_limit(&self.config, limit)?;
        self.store.list_past_for_guest(guest_id, limit).await
    }
}
