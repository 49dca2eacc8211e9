use std::time::Duration;

use async_trait::async_trait;
use rigscan_common::network::miner::{MINER_PORT, Status};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::trace;

use super::ProbeClient;

/// Live probe: a full TCP handshake against the miner API port.
#[derive(Debug, Clone, Copy)]
pub struct TcpProbe {
    port: u16,
}

impl TcpProbe {
    pub fn new() -> Self {
        Self { port: MINER_PORT }
    }

    pub fn with_port(port: u16) -> Self {
        Self { port }
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProbeClient for TcpProbe {
    async fn check_status(&self, ip: &str, probe_timeout: Duration) -> Status {
        let address: String = format!("{ip}:{}", self.port);

        match timeout(probe_timeout, TcpStream::connect(address.as_str())).await {
            Ok(Ok(stream)) => {
                drop(stream);
                Status::Online
            }
            Ok(Err(e)) => {
                trace!("{address} refused: {e}");
                Status::Offline
            }
            Err(_elapsed) => {
                trace!("{address} timed out after {probe_timeout:?}");
                Status::Offline
            }
        }
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
