//! Services for the application layer.

pub mod countries_service;

pub use countries_service::CountriesService;
