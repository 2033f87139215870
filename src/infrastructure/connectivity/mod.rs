//! Network availability checks.
//!
//! Provides a [`ConnectivityProbe`] trait with two implementations:
//! - [`TcpProbe`] - Connects to the feed host to confirm reachability
//! - [`AlwaysOnline`] - No-op implementation for disabled checks

mod always_online;
mod service;
mod tcp_probe;

pub use always_online::AlwaysOnline;
pub use service::{ConnectivityProbe, ProbeError};
pub use tcp_probe::TcpProbe;

#[cfg(test)]
pub use service::MockConnectivityProbe;
