//! Data source trait for the countries feed.

use crate::domain::entities::CountryRecord;
use crate::error::FetchError;
use async_trait::async_trait;

/// Source of country records.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpCountrySource`] - HTTP fetch followed by JSON parsing
/// - Test mocks available with `cfg(test)`
///
/// # Cancellation
///
/// Callers cancel a fetch by dropping the returned future. Implementations
/// must not turn that into an error value.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetches and parses the full list from `url`, preserving feed order.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`] on a non-success status,
    /// [`FetchError::EmptyBody`] on an empty body,
    /// [`FetchError::Io`] on transport failures and
    /// [`FetchError::Parse`] / [`FetchError::InvalidShape`] on malformed JSON.
    async fn fetch_countries(&self, url: &str) -> Result<Vec<CountryRecord>, FetchError>;
}
