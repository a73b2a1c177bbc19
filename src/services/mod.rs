//! Business logic services

pub mod properties;
pub mod reservations;
pub mod users;

use std::sync::Arc;

use crate::{
    config::SearchConfig,
    error::{AppError, AppResult},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub properties: properties::PropertiesService,
    pub reservations: reservations::ReservationsService,
}

impl Services {
    /// Create all services backed by the given repository
    pub fn new(repository: &Repository, search: SearchConfig) -> Self {
        Self {
            users: users::UsersService::new(Arc::new(repository.users.clone())),
            properties: properties::PropertiesService::new(
                Arc::new(repository.properties.clone()),
                search.clone(),
            ),
            reservations: reservations::ReservationsService::new(
                Arc::new(repository.reservations.clone()),
                search,
            ),
        }
    }
}

/// Apply the configured default and reject limits outside `1..=max_limit`
fn resolve_limit(config: &SearchConfig, limit: Option<i64>) -> AppResult<i64> {
    let limit = limit.unwrap_or(config.default_limit);
    if limit < 1 || limit > config.max_limit {
        tracing::warn!(limit, max = config.max_limit, "Rejected result limit");
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {}, got {}",
            config.max_limit, limit
        )));
    }
    Ok(limit)
}
