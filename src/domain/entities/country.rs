//! Country entity parsed from the countries feed.

use serde::Serialize;

/// A country record from the JSON feed.
///
/// Records are never mutated after parsing; a new fetch replaces the whole
/// list. Missing feed fields are represented as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct CountryRecord {
    /// Display name of the country.
    pub name: String,
    /// Geographic region code from the feed.
    pub region: String,
    /// ISO-like country code.
    pub code: String,
    /// Capital city name.
    pub capital: String,
}

impl CountryRecord {
    /// Creates a new CountryRecord instance.
    pub fn new(
        name: impl Into<String>,
        region: impl Into<String>,
        code: impl Into<String>,
        capital: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            code: code.into(),
            capital: capital.into(),
        }
    }

    /// Returns true if both records describe the same list item.
    ///
    /// Item identity is the `(code, name)` pair; use `==` to compare contents.
    pub fn same_item(&self, other: &Self) -> bool {
        self.code == other.code && self.name == other.name
    }
}
