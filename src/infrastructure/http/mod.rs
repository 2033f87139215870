//! HTTP access to the countries feed.
//!
//! - [`FetchClient`] - GET with connect/read timeouts, raw bytes out
//! - [`parse_countries`] - Lenient JSON decoding into [`crate::domain::entities::CountryRecord`]
//! - [`HttpCountrySource`] - Both of the above behind [`crate::domain::repositories::CountrySource`]

mod country_source;
mod fetch_client;
mod parser;

pub use country_source::HttpCountrySource;
pub use fetch_client::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT, FetchClient, HttpTimeouts};
pub use parser::parse_countries;
