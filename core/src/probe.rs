//! The **capability** used by the scan engine to classify a single address.
//!
//! The engine only ever talks to [`ProbeClient`]. Which implementation runs
//! is decided by whoever builds the [`ScanService`](crate::ScanService):
//! [`TcpProbe`] for live sweeps, [`DemoProbe`] for demos, or any test double.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rigscan_common::network::miner::Status;

mod demo;
mod tcp;

pub use demo::DemoProbe;
pub use tcp::TcpProbe;

/// Decides whether something is listening at `ip` within `timeout`.
///
/// Implementations must always answer. Connection failures of any kind are
/// an [`Status::Offline`] answer, never an error.
#[async_trait]
pub trait ProbeClient: Send + Sync {
    async fn check_status(&self, ip: &str, timeout: Duration) -> Status;
}

#[async_trait]
impl<P: ProbeClient + ?Sized> ProbeClient for Arc<P> {
    async fn check_status(&self, ip: &str, timeout: Duration) -> Status {
        (**self).check_status(ip, timeout).await
    }
}

#[async_trait]
impl<P: ProbeClient + ?Sized> ProbeClient for Box<P> {
    async fn check_status(&self, ip: &str, timeout: Duration) -> Status {
        (**self).check_status(ip, timeout).await
    }
}
