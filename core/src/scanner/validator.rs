use std::time::Duration;

use rigscan_common::{ScanError, scan::ScanRequest};

pub const MIN_OCTET: i64 = 1;
pub const MAX_OCTET: i64 = 254;

pub const DEFAULT_TIMEOUT_MS: u64 = 500;
pub const MIN_TIMEOUT_MS: u64 = 50;
pub const MAX_TIMEOUT_MS: u64 = 5000;

pub const DEFAULT_WORKERS: usize = 30;
pub const MAX_WORKERS: usize = 200;

/// A request that has passed [`validate`]; the only kind the engine runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    base: String,
    start: u8,
    end: u8,
    timeout_ms: u64,
    workers: usize,
}

impl ValidatedRequest {
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Number of targets in the range, i.e. the number of results to expect.
    pub fn total(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }
}

/// Normalizes and bounds a raw request.
///
/// Rejects a missing base or an out-of-range octet span. Timeout and worker
/// count are never rejected, only defaulted and clamped.
pub fn validate(raw: ScanRequest) -> Result<ValidatedRequest, ScanError> {
    if raw.base.is_empty() {
        return Err(ScanError::MissingBase);
    }

    let (start, end) = (raw.start, raw.end);
    let in_bounds = |octet: i64| (MIN_OCTET..=MAX_OCTET).contains(&octet);
    if !in_bounds(start) || !in_bounds(end) || start > end {
        return Err(ScanError::InvalidRange { start, end });
    }

    Ok(ValidatedRequest {
        base: raw.base,
        // Both bounds are within 1..=254 here.
        start: start as u8,
        end: end as u8,
        timeout_ms: clamp_timeout(raw.timeout_ms),
        workers: clamp_workers(raw.workers),
    })
}

fn clamp_timeout(timeout_ms: i64) -> u64 {
    if timeout_ms <= 0 {
        return DEFAULT_TIMEOUT_MS;
    }
    (timeout_ms as u64).clamp(MIN_TIMEOUT_MS, MAX_TIMEOUT_MS)
}

fn clamp_workers(workers: i64) -> usize {
    if workers <= 0 {
        return DEFAULT_WORKERS;
    }
    usize::try_from(workers).map_or(MAX_WORKERS, |w| w.min(MAX_WORKERS))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
