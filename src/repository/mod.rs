//! Repository layer for database operations

pub mod properties;
pub mod property_query;
pub mod reservations;
pub mod users;

use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::{config::DatabaseConfig, error::AppResult};

pub use properties::{PropertiesRepository, PropertyStore};
pub use reservations::{ReservationStore, ReservationsRepository};
pub use users::{UserStore, UsersRepository};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: UsersRepository,
    pub properties: PropertiesRepository,
    pub reservations: ReservationsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: UsersRepository::new(pool.clone()),
            properties: PropertiesRepository::new(pool.clone()),
            reservations: ReservationsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Open a connection pool from configuration
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        Ok(Self::new(pool))
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Verify the database answers queries
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
