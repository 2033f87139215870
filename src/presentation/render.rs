//! Screen model derived from a [`ViewState`].

use crate::domain::entities::{CountryRecord, ViewState};
use colored::Colorize;
use serde::Serialize;
use std::fmt::Write;

/// Header line of the error banner.
pub const ERROR_TITLE: &str = "Failed to load countries.";

/// Footer line of the error banner.
pub const RETRY_HINT: &str = "Press enter to retry";

/// One list row: `"<name>, <region>"` with the code on the right and the
/// capital underneath.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRow {
    pub title: String,
    pub code: String,
    pub capital: String,
}

impl From<&CountryRecord> for CountryRow {
    fn from(country: &CountryRecord) -> Self {
        Self {
            title: format!("{}, {}", country.name, country.region),
            code: country.code.clone(),
            capital: country.capital.clone(),
        }
    }
}

/// Everything the screen shows for one state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenModel {
    pub show_spinner: bool,
    pub error_text: Option<String>,
    pub rows: Vec<CountryRow>,
}

impl ScreenModel {
    pub fn from_state(state: &ViewState) -> Self {
        Self {
            show_spinner: state.is_loading,
            error_text: state
                .error_message
                .as_ref()
                .map(|message| format!("{ERROR_TITLE}\n{message}\n{RETRY_HINT}")),
            rows: state.countries.iter().map(CountryRow::from).collect(),
        }
    }

    /// Plain-text rendering, one country per two lines.
    ///
    /// Titles are padded to the widest one so codes share a column.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        if self.show_spinner {
            let _ = writeln!(out, "{}", "Loading countries...".dimmed());
        }

        if let Some(error) = &self.error_text {
            let _ = writeln!(out, "{}", error.red());
        }

        let width = self
            .rows
            .iter()
            .map(|row| row.title.chars().count())
            .max()
            .unwrap_or(0);

        for row in &self.rows {
            let title = format!("{:<width$}", row.title, width = width);
            let _ = writeln!(out, "{}  {}", title.bold(), row.code.cyan());
            let _ = writeln!(out, "  {}", row.capital);
        }

        out
    }

    /// JSON rendering of the rows.
    pub fn rows_to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.rows)
    }
}
