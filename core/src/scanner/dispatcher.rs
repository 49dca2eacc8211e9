use rigscan_common::network::target::Target;
use tokio::sync::mpsc;
use tracing::debug;

use super::validator::ValidatedRequest;

/// Expands a request into its targets, in ascending octet order.
pub fn targets(req: &ValidatedRequest) -> impl Iterator<Item = Target> + '_ {
    (req.start()..=req.end()).map(|octet| Target::new(req.base(), octet))
}

/// Sole producer of the job queue.
///
/// Sends every target exactly once, waiting for free capacity, and closes
/// the queue by dropping `jobs` on return. Returns the number of targets
/// handed over.
pub async fn dispatch(req: &ValidatedRequest, jobs: mpsc::Sender<Target>) -> usize {
    let mut sent: usize = 0;
    for target in targets(req) {
        if jobs.send(target).await.is_err() {
            // Every worker is gone; nothing left to feed.
            break;
        }
        sent += 1;
    }
    debug!("Dispatched {sent} targets, closing job queue");
    sent
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
