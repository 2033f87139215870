//! Application layer services.
//!
//! This layer orchestrates the country source and owns the observable view
//! state. Services consume domain traits and provide a small API for the
//! presentation layer.
//!
//! # Available Services
//!
//! - [`services::countries_service::CountriesService`] - Load/retry/refresh and state observation

pub mod services;
