//! # Countries List
//!
//! Fetches a static JSON list of countries, caches it in memory for the
//! lifetime of a controller and renders it with loading/error/retry states.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Country records, view state and the source trait
//! - **Application Layer** ([`application`]) - The state holder owning the view state
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP fetch, JSON parsing, connectivity probes
//! - **Presentation Layer** ([`presentation`]) - Screen model and screen controller
//!
//! ## Flow
//!
//! state holder → country source (fetch → parse) → state holder publishes a
//! new [`domain::entities::ViewState`] → observers render it and forward retries.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: point at another feed
//! export COUNTRIES_URL="https://example.com/countries.json"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

pub use error::FetchError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CountriesService;
    pub use crate::domain::entities::{CountryRecord, ViewState};
    pub use crate::domain::repositories::CountrySource;
    pub use crate::error::FetchError;
    pub use crate::infrastructure::http::{FetchClient, HttpCountrySource, HttpTimeouts};
}
