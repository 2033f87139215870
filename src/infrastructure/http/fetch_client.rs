//! Single-shot HTTP GET client for the countries feed.

use crate::error::{FetchError, FetchResult};
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default time allowed to establish a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Default time allowed between reads of the response.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(20);

/// Connect and read timeouts applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub connect: Duration,
    pub read: Duration,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self {
            connect: DEFAULT_CONNECT_TIMEOUT,
            read: DEFAULT_READ_TIMEOUT,
        }
    }
}

/// HTTP client returning raw response bodies.
///
/// Cancellation is cooperative: dropping the future returned by
/// [`FetchClient::fetch`] aborts the request and closes the connection. No
/// error is produced for it, so a cancelled fetch never reaches the view state.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    timeouts: HttpTimeouts,
}

impl FetchClient {
    /// Builds a client with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Io`] if the TLS backend cannot be initialized.
    pub fn new(timeouts: HttpTimeouts) -> FetchResult<Self> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .read_timeout(timeouts.read)
            .build()?;

        Ok(Self { client, timeouts })
    }

    pub fn timeouts(&self) -> HttpTimeouts {
        self.timeouts
    }

    /// Issues one GET to `url` and returns the body bytes.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Http`] if the status is not 2xx
    /// - [`FetchError::EmptyBody`] if the body is empty
    /// - [`FetchError::Io`] on connect, timeout or read failures
    pub async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>> {
        debug!(url = %url, "Fetching countries feed");

        let start = Instant::now();
        let response = self.client.get(url).send().await.inspect_err(|e| {
            warn!(url = %url, error = %e, "Countries request failed");
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Countries feed returned error status");
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let latency_ms = start.elapsed().as_millis();

        if body.is_empty() {
            warn!(url = %url, latency_ms, "Countries feed returned an empty body");
            return Err(FetchError::EmptyBody);
        }

        debug!(
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            latency_ms,
            "Countries feed fetched"
        );

        Ok(body.to_vec())
    }
}
