//! Core domain entities.
//!
//! - [`CountryRecord`] - One parsed entry of the countries feed
//! - [`ViewState`] - Immutable snapshot of loading/result/error status

pub mod country;
pub mod view_state;

pub use country::CountryRecord;
pub use view_state::ViewState;
