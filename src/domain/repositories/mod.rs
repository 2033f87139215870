//! Data source trait definitions for the domain layer.
//!
//! Traits define the contract for obtaining country data; implementations
//! live in `crate::infrastructure`. Mock implementations are auto-generated
//! via `mockall` for testing.

pub mod country_source;

pub use country_source::CountrySource;

#[cfg(test)]
pub use country_source::MockCountrySource;
