//! Properties repository: listing search and inserts

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use super::property_query;
use crate::{
    error::{AppError, AppResult},
    models::property::{CreateProperty, FilterOptions, Property, PropertyListing},
};

/// Search and insert access to the `properties` table
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyStore: Send + Sync {
    /// List properties matching `options`, cheapest first
    async fn search(&self, options: &FilterOptions, limit: i64) -> AppResult<Vec<PropertyListing>>;

    /// Insert a new property and return the stored row
    async fn create(&self, property: &CreateProperty) -> AppResult<Property>;
}

#[derive(Clone)]
pub struct PropertiesRepository {
    pool: Pool<Postgres>,
}

impl PropertiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyStore for PropertiesRepository {
    async fn search(&self, options: &FilterOptions, limit: i64) -> AppResult<Vec<PropertyListing>> {
        let query = property_query::build(options, limit);
        tracing::debug!(sql = %query.sql, params = query.params.len(), "Searching properties");

        let mut builder = sqlx::query_as::<_, PropertyListing>(&query.sql);
        for param in &query.params {
            builder = param.bind_to(builder);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn create(&self, property: &CreateProperty) -> AppResult<Property> {
        let cost_per_night = i32::try_from(property.cost_per_night.minor_units())
            .map_err(|_| AppError::Validation("cost_per_night is out of range".to_string()))?;

        let row = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14
            ) RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(property_id = row.id, owner_id = row.owner_id, "Created property");
        Ok(row)
    }
}
