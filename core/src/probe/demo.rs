use std::time::Duration;

use async_trait::async_trait;
use rigscan_common::network::miner::Status;

use super::{ProbeClient, TcpProbe};

pub const DEMO_ADDRESS: &str = "127.0.0.1";

/// Demo probe: one designated address is always online, everything else
/// goes to the wrapped probe.
#[derive(Debug, Clone)]
pub struct DemoProbe<P = TcpProbe> {
    online: String,
    inner: P,
}

impl DemoProbe<TcpProbe> {
    pub fn new() -> Self {
        Self::wrap(DEMO_ADDRESS, TcpProbe::new())
    }
}

impl Default for DemoProbe<TcpProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ProbeClient> DemoProbe<P> {
    pub fn wrap(online: impl Into<String>, inner: P) -> Self {
        Self {
            online: online.into(),
            inner,
        }
    }

    pub fn online_address(&self) -> &str {
        &self.online
    }
}

#[async_trait]
impl<P: ProbeClient> ProbeClient for DemoProbe<P> {
    async fn check_status(&self, ip: &str, timeout: Duration) -> Status {
        if ip == self.online {
            return Status::Online;
        }
        self.inner.check_status(ip, timeout).await
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
