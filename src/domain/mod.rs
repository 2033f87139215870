//! Domain layer containing the country model and the data source contract.
//!
//! # Architecture
//!
//! - [`entities`] - Country records and the observable view state
//! - [`repositories`] - Data source trait definitions
//!
//! The domain layer has no dependencies on HTTP or rendering. Sources are
//! implemented in [`crate::infrastructure`] and orchestrated by
//! [`crate::application::services`].

pub mod entities;
pub mod repositories;
