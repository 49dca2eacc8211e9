use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use rigscan_common::network::miner::{Miner, Status};
use rigscan_core::ProbeClient;

/// Deterministic probe: online for even last octets, offline for odd ones.
/// Sleeps a little, pseudo-randomly per address, so completion order varies.
#[derive(Default)]
pub struct ParityProbe {
    calls: AtomicUsize,
}

impl ParityProbe {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProbeClient for ParityProbe {
    async fn check_status(&self, ip: &str, _timeout: Duration) -> Status {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let octet: u64 = last_octet(ip);
        tokio::time::sleep(Duration::from_millis((octet * 7) % 5)).await;
        if octet % 2 == 0 { Status::Online } else { Status::Offline }
    }
}

pub fn last_octet(ip: &str) -> u64 {
    ip.rsplit('.')
        .next()
        .and_then(|octet| octet.parse().ok())
        .unwrap_or(0)
}

pub fn as_set(miners: &[Miner]) -> HashSet<Miner> {
    miners.iter().cloned().collect()
}
