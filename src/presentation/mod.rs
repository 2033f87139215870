//! Presentation layer for the countries screen.
//!
//! - [`render`] - [`render::ScreenModel`] built from a view state, text and JSON output
//! - [`screen`] - [`screen::ScreenController`] wiring connectivity checks to load/retry

pub mod render;
pub mod screen;

pub use render::{CountryRow, ScreenModel};
pub use screen::{NO_NETWORK_MESSAGE, Prompt, ScreenController};
