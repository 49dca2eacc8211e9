use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use rigscan_common::network::miner::{Miner, Status};
use tokio::sync::mpsc;
use tracing::warn;

use super::Probed;
use super::dispatcher;
use super::validator::ValidatedRequest;

/// Everything the collector hands back to the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    /// One miner per target, ascending by last octet.
    pub miners: Vec<Miner>,
    /// From `started` to the arrival of the final result.
    pub elapsed: Duration,
}

/// Gathers exactly one result per target of `req`.
///
/// Stops as soon as `req.total()` distinct targets have reported, without
/// waiting for the stream to close. If the stream closes first, the
/// targets that never reported are recorded as offline.
pub async fn collect(
    req: &ValidatedRequest,
    mut results: mpsc::Receiver<Probed>,
    started: Instant,
) -> Collected {
    let total: usize = req.total();
    let mut by_octet: BTreeMap<u8, Miner> = BTreeMap::new();

    while by_octet.len() < total {
        let Some(probed) = results.recv().await else {
            break;
        };
        by_octet
            .entry(probed.target.octet)
            .or_insert_with(|| Miner::new(probed.target.ip, probed.status));
    }
    let elapsed: Duration = started.elapsed();

    if by_octet.len() < total {
        warn!(
            "Result stream closed with {} of {total} results, marking the rest offline",
            by_octet.len()
        );
        for target in dispatcher::targets(req) {
            by_octet
                .entry(target.octet)
                .or_insert_with(|| Miner::new(target.ip, Status::Offline));
        }
    }

    Collected {
        miners: by_octet.into_values().collect(),
        elapsed,
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
