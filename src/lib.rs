//! LightBnB data-access layer
//!
//! Fetches users, reservations and property listings from PostgreSQL and
//! inserts new users and properties.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared by all callers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Repository,
    pub services: Arc<Services>,
}

impl AppState {
    /// Connect to the database and wire up services
    pub async fn connect(config: AppConfig) -> AppResult<Self> {
        let repository = Repository::connect(&config.database).await?;
        let services = Services::new(&repository, config.search.clone());

        Ok(Self {
            config: Arc::new(config),
            repository,
            services: Arc::new(services),
        })
    }
}
