//! Connectivity probe trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur while setting up a probe.
#[derive(Debug)]
pub enum ProbeError {
    InvalidUrl(String),
    MissingHost(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidUrl(e) => write!(f, "Invalid probe URL: {}", e),
            Self::MissingHost(url) => write!(f, "Probe URL has no host: {}", url),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Trait for checking whether the network is reachable before fetching.
///
/// # Implementations
///
/// - [`crate::infrastructure::connectivity::TcpProbe`] - TCP connect to the feed host
/// - [`crate::infrastructure::connectivity::AlwaysOnline`] - Reports the network as always available
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    /// Returns true if the network looks usable.
    ///
    /// Never fails: an unreachable host and a probe timeout both report `false`.
    async fn is_network_available(&self) -> bool;
}
