//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`http`] - Countries feed client and JSON parser
//! - [`connectivity`] - Network availability probes

pub mod connectivity;
pub mod http;
