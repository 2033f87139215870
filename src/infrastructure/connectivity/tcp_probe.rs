//! TCP reachability probe.

use super::service::{ConnectivityProbe, ProbeError};
use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;
use url::Url;

/// Probes connectivity by opening a TCP connection to the feed host.
///
/// The connection is closed immediately; no request is sent.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    /// Creates a probe targeting the host and port of `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::InvalidUrl`] if `url` cannot be parsed and
    /// [`ProbeError::MissingHost`] if it has no host or known port.
    pub fn for_url(url: &str, timeout: Duration) -> Result<Self, ProbeError> {
        let parsed = Url::parse(url).map_err(|e| ProbeError::InvalidUrl(e.to_string()))?;

        let host = parsed
            .host_str()
            .ok_or_else(|| ProbeError::MissingHost(url.to_string()))?
            .trim_start_matches('[')
            .trim_end_matches(']')
            .to_string();
        let port = parsed
            .port_or_known_default()
            .ok_or_else(|| ProbeError::MissingHost(url.to_string()))?;

        Ok(Self {
            host,
            port,
            timeout,
        })
    }

    pub fn target(&self) -> (&str, u16) {
        (&self.host, self.port)
    }
}

#[async_trait]
impl ConnectivityProbe for TcpProbe {
    async fn is_network_available(&self) -> bool {
        let connect = TcpStream::connect((self.host.as_str(), self.port));

        match timeout(self.timeout, connect).await {
            Ok(Ok(_stream)) => true,
            Ok(Err(e)) => {
                debug!(host = %self.host, port = self.port, error = %e, "Connectivity probe failed");
                false
            }
            Err(_) => {
                debug!(host = %self.host, port = self.port, "Connectivity probe timed out");
                false
            }
        }
    }
}
