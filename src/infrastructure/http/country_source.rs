//! HTTP-backed implementation of [`CountrySource`].

use super::fetch_client::FetchClient;
use super::parser::parse_countries;
use crate::domain::entities::CountryRecord;
use crate::domain::repositories::CountrySource;
use crate::error::FetchError;
use async_trait::async_trait;
use tracing::info;

/// Fetches the feed over HTTP and decodes it.
pub struct HttpCountrySource {
    client: FetchClient,
}

impl HttpCountrySource {
    pub fn new(client: FetchClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CountrySource for HttpCountrySource {
    async fn fetch_countries(&self, url: &str) -> Result<Vec<CountryRecord>, FetchError> {
        let body = self.client.fetch(url).await?;
        let countries = parse_countries(&body)?;

        info!(count = countries.len(), "Countries loaded");
        Ok(countries)
    }
}
