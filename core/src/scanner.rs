//! The scan **pipeline**: validation, dispatch, the worker pool and the
//! collector.
//!
//! A scan moves through these stages strictly in order and all state is
//! created per call:
//!
//! 1. [`validator`] turns a raw request into a [`ValidatedRequest`](validator::ValidatedRequest).
//! 2. [`dispatcher`] feeds every target exactly once into the job queue, then closes it.
//! 3. [`pool`] runs a fixed number of workers that each probe and emit one result per job.
//! 4. [`collector`] waits for exactly one result per target and orders them.

use rigscan_common::network::{miner::Status, target::Target};

pub mod collector;
pub mod dispatcher;
pub mod pool;
pub mod validator;

/// What a worker emits for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Probed {
    pub target: Target,
    pub status: Status,
}
