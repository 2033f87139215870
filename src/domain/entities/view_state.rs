//! Observable snapshot of the countries screen.

use super::CountryRecord;

/// Loading/result/error status shown to the user.
///
/// By convention only one of `is_loading`, non-empty `countries` and
/// `error_message` is active at a time, but the type does not enforce it.
/// The state holder replaces the whole value on every transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub is_loading: bool,
    pub countries: Vec<CountryRecord>,
    pub error_message: Option<String>,
}

impl ViewState {
    /// A fetch is in flight; previous results are discarded.
    pub fn loading() -> Self {
        Self {
            is_loading: true,
            ..Self::default()
        }
    }

    /// A fetch succeeded.
    pub fn loaded(countries: Vec<CountryRecord>) -> Self {
        Self {
            is_loading: false,
            countries,
            error_message: None,
        }
    }

    /// A fetch failed.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            is_loading: false,
            countries: Vec::new(),
            error_message: Some(message.into()),
        }
    }

    /// Copy of this state with the error cleared and everything else kept.
    pub fn without_error(&self) -> Self {
        Self {
            error_message: None,
            ..self.clone()
        }
    }

    /// Returns true if a list has been cached.
    pub fn has_countries(&self) -> bool {
        !self.countries.is_empty()
    }

    /// Returns true if a load request must be ignored.
    pub fn suppresses_load(&self) -> bool {
        self.is_loading || self.has_countries()
    }
}
