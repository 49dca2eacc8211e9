use thiserror::Error;

/// Reasons a scan is rejected before any probe is sent.
///
/// Unreachable hosts never show up here; they are reported as
/// [`Status::Offline`](crate::network::miner::Status::Offline) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("base is required")]
    MissingBase,
    #[error("invalid range: require 1<=start<=end<=254")]
    InvalidRange { start: i64, end: i64 },
}
