//! Request and response shapes for a single scan.

use serde::{Deserialize, Serialize};

use crate::network::miner::Miner;

pub const DEFAULT_BASE: &str = "192.168.1";
pub const DEFAULT_START: i64 = 100;
pub const DEFAULT_END: i64 = 110;
pub const DEFAULT_TIMEOUT_MS: i64 = 500;
pub const DEFAULT_WORKERS: i64 = 30;

/// A scan request as received from a caller, before validation.
///
/// Integers are signed so that negative or zero values survive until the
/// validator decides whether to reject or default them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRequest {
    pub base: String,
    pub start: i64,
    pub end: i64,
    pub timeout_ms: i64,
    pub workers: i64,
}

impl ScanRequest {
    pub fn new(base: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            base: base.into(),
            start,
            end,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            workers: DEFAULT_WORKERS,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: i64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_workers(mut self, workers: i64) -> Self {
        self.workers = workers;
        self
    }
}

impl Default for ScanRequest {
    fn default() -> Self {
        Self::new(DEFAULT_BASE, DEFAULT_START, DEFAULT_END)
    }
}

/// Result of a completed scan.
///
/// Echoes the validated request. `miners` holds one entry per target,
/// ordered by ascending last octet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub base: String,
    pub start: u8,
    pub end: u8,
    pub timeout_ms: u64,
    pub workers: usize,
    pub elapsed_ms: u64,
    pub miners: Vec<Miner>,
}

impl ScanResponse {
    pub fn online(&self) -> impl Iterator<Item = &Miner> {
        self.miners.iter().filter(|miner| miner.status.is_online())
    }

    pub fn online_count(&self) -> usize {
        self.online().count()
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
