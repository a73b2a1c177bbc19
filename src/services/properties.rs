//! Property search and listing service

use std::sync::Arc;

use validator::Validate;

use super::resolve_limit;
use crate::{
    config::SearchConfig,
    error::AppResult,
    models::property::{CreateProperty, FilterOptions, Property, PropertyListing, PropertyQuery},
    repository::PropertyStore,
};

#[derive(Clone)]
pub struct PropertiesService {
    store: Arc<dyn PropertyStore>,
    config: SearchConfig,
}

impl PropertiesService {
    pub fn new(store: Arc<dyn PropertyStore>, config: SearchConfig) -> Self {
        Self { store, config }
    }

    /// Search from raw form input; malformed numeric filters fail before any query runs
    pub async fn search(
        &self,
        query: &PropertyQuery,
        limit: Option<i64>,
    ) -> AppResult<Vec<PropertyListing>> {
        let options = FilterOptions::try_from(query).map_err(|e| {
            tracing::warn!(error = %e, "Rejected property search filters");
            e
        })?;
        self.search_with_options(&options, limit).await
    }

    pub async fn search_with_options(
        &self,
        options: &FilterOptions,
        limit: Option<i64>,
    ) -> AppResult<Vec<PropertyListing>> {
        options.check_price_range()?;
        let limit = resolve_limit(&self.config, limit)?;

        let listings = self.store.search(options, limit).await?;
        tracing::debug!(count = listings.len(), limit, "Property search completed");
        Ok(listings)
    }

    /// Validate and insert a new property listing
    pub async fn create_property(&self, property: CreateProperty) -> AppResult<Property> {
        property.validate()?;
        self.store.create(&property).await
    }
}
