//! # Scan Service
//!
//! Implements the core "Scan" use case: validate the request, sweep every
//! target through the worker pool, and assemble the response.

use std::sync::Arc;
use std::time::Instant;

use rigscan_common::ScanError;
use rigscan_common::scan::{ScanRequest, ScanResponse};
use tokio::sync::mpsc;
use tracing::{Instrument, error, info, info_span};

use crate::probe::ProbeClient;
use crate::scanner::collector::{self, Collected};
use crate::scanner::dispatcher;
use crate::scanner::pool::{JOB_QUEUE_CAPACITY, WorkerPool};
use crate::scanner::validator::{self, ValidatedRequest};

/// Application service for subnet scans.
///
/// Holds nothing but the injected probe, so one instance can serve any
/// number of concurrent callers.
#[derive(Clone)]
pub struct ScanService {
    probe: Arc<dyn ProbeClient>,
}

impl ScanService {
    pub fn new(probe: impl ProbeClient + 'static) -> Self {
        Self {
            probe: Arc::new(probe),
        }
    }

    pub fn from_arc(probe: Arc<dyn ProbeClient>) -> Self {
        Self { probe }
    }

    /// Runs one scan end to end.
    ///
    /// The only possible error is a validation error, returned before any
    /// probe is sent. Unreachable hosts are reported as offline miners.
    pub async fn scan(&self, raw: ScanRequest) -> Result<ScanResponse, ScanError> {
        let req: ValidatedRequest = validator::validate(raw)?;
        Ok(self.scan_validated(req).await)
    }

    /// Runs a scan for a request that already passed
    /// [`validate`](crate::validate). Cannot fail.
    pub async fn scan_validated(&self, req: ValidatedRequest) -> ScanResponse {
        let span = info_span!("scan", base = %req.base(), start = req.start(), end = req.end());
        let collected: Collected = self.sweep(&req).instrument(span).await;

        let response = ScanResponse {
            base: req.base().to_string(),
            start: req.start(),
            end: req.end(),
            timeout_ms: req.timeout_ms(),
            workers: req.workers(),
            elapsed_ms: u64::try_from(collected.elapsed.as_millis()).unwrap_or(u64::MAX),
            miners: collected.miners,
        };

        info!(
            "Scanned {} hosts on {}.{}-{}: {} online in {}ms",
            response.miners.len(),
            response.base,
            response.start,
            response.end,
            response.online_count(),
            response.elapsed_ms
        );

        response
    }

    /// Dispatch, probe and collect. Every task it spawns has finished
    /// by the time it returns.
    async fn sweep(&self, req: &ValidatedRequest) -> Collected {
        let total: usize = req.total();
        let (jobs_tx, jobs_rx) = mpsc::channel(JOB_QUEUE_CAPACITY);
        let (results_tx, results_rx) = mpsc::channel(total);

        let started: Instant = Instant::now();
        let pool = WorkerPool::spawn(
            req.workers(),
            self.probe.clone(),
            req.timeout(),
            jobs_rx,
            results_tx,
        );

        let producer_req: ValidatedRequest = req.clone();
        let supervisor = tokio::spawn(
            async move {
                dispatcher::dispatch(&producer_req, jobs_tx).await;
                pool.join().await
            }
            .in_current_span(),
        );

        let collected: Collected = collector::collect(req, results_rx, started).await;

        if let Err(e) = supervisor.await {
            error!("Scan supervisor failed: {e}");
        }

        collected
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
