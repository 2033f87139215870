//! Screen controller: connectivity checks around load and retry.

use super::render::ScreenModel;
use crate::application::services::CountriesService;
use crate::domain::entities::ViewState;
use crate::domain::repositories::CountrySource;
use crate::infrastructure::connectivity::ConnectivityProbe;
use std::sync::Arc;
use tracing::info;

/// Text of the no-network prompt.
pub const NO_NETWORK_MESSAGE: &str =
    "No network available. Please check your connection and try again.";

/// Prompt the screen must show in addition to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    None,
    NoNetwork,
}

/// Drives a [`CountriesService`] the way the countries screen does.
///
/// Loads are only started when the probe reports a usable network; otherwise
/// the caller is asked to show [`Prompt::NoNetwork`]. While an error is on
/// screen the no-network prompt is raised at most once, and re-armed when the
/// error clears.
pub struct ScreenController<S: CountrySource + 'static, P: ConnectivityProbe> {
    service: Arc<CountriesService<S>>,
    probe: P,
    no_network_shown: bool,
}

impl<S: CountrySource + 'static, P: ConnectivityProbe> ScreenController<S, P> {
    pub fn new(service: Arc<CountriesService<S>>, probe: P) -> Self {
        Self {
            service,
            probe,
            no_network_shown: false,
        }
    }

    pub fn service(&self) -> &Arc<CountriesService<S>> {
        &self.service
    }

    /// First load when the screen opens.
    pub async fn start(&mut self) -> Prompt {
        if !self.probe.is_network_available().await {
            info!("No network at startup, skipping initial load");
            self.no_network_shown = true;
            return Prompt::NoNetwork;
        }

        self.service.load();
        Prompt::None
    }

    /// User asked to retry.
    pub async fn retry_requested(&mut self) -> Prompt {
        if !self.probe.is_network_available().await {
            self.no_network_shown = true;
            return Prompt::NoNetwork;
        }

        self.service.retry();
        Prompt::None
    }

    /// Builds the model for a published state and decides on prompts.
    pub async fn observe(&mut self, state: &ViewState) -> (ScreenModel, Prompt) {
        let model = ScreenModel::from_state(state);

        if model.error_text.is_none() {
            self.no_network_shown = false;
            return (model, Prompt::None);
        }

        if !self.no_network_shown && !self.probe.is_network_available().await {
            self.no_network_shown = true;
            return (model, Prompt::NoNetwork);
        }

        (model, Prompt::None)
    }
}
