use std::sync::Arc;
use std::time::Duration;

use rigscan_common::network::{miner::Status, target::Target};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, error};

use super::Probed;
use crate::probe::ProbeClient;

/// Jobs are handed over one at a time so dispatch is paced by the workers.
pub const JOB_QUEUE_CAPACITY: usize = 1;

type JobQueue = Arc<Mutex<mpsc::Receiver<Target>>>;

/// A fixed set of probe workers sharing one job queue and one result stream.
pub struct WorkerPool {
    workers: JoinSet<usize>,
}

impl WorkerPool {
    /// Starts `size` workers.
    ///
    /// The pool owns `results`: once every worker has exited the last
    /// sender is gone and the result stream closes on its own.
    pub fn spawn(
        size: usize,
        probe: Arc<dyn ProbeClient>,
        timeout: Duration,
        jobs: mpsc::Receiver<Target>,
        results: mpsc::Sender<Probed>,
    ) -> Self {
        let queue: JobQueue = Arc::new(Mutex::new(jobs));
        let mut workers = JoinSet::new();

        for id in 0..size {
            let queue = queue.clone();
            let probe = probe.clone();
            let results = results.clone();
            workers.spawn(run_worker(id, queue, probe, timeout, results));
        }

        Self { workers }
    }

    /// Join barrier: waits for every worker to exit.
    ///
    /// Returns the number of jobs the workers completed. Probe panics are
    /// contained per target, so a worker only fails here on a bug in the
    /// worker loop itself; it is logged and counted as zero.
    pub async fn join(mut self) -> usize {
        let mut handled: usize = 0;
        while let Some(joined) = self.workers.join_next().await {
            match joined {
                Ok(count) => handled += count,
                Err(e) => error!("Probe worker failed: {e}"),
            }
        }
        handled
    }
}

async fn run_worker(
    id: usize,
    queue: JobQueue,
    probe: Arc<dyn ProbeClient>,
    timeout: Duration,
    results: mpsc::Sender<Probed>,
) -> usize {
    let mut handled: usize = 0;

    loop {
        // The lock is released before probing so other workers can pick up jobs.
        let next: Option<Target> = queue.lock().await.recv().await;
        let Some(target) = next else {
            break;
        };

        let status = check_isolated(&probe, &target, timeout).await;
        if results.send(Probed { target, status }).await.is_err() {
            break;
        }
        handled += 1;
    }

    debug!("Worker {id} exiting after {handled} probes");
    handled
}

/// Runs one status check on its own task, so a panic costs only that
/// target. The target is reported offline and the worker keeps going.
async fn check_isolated(
    client: &Arc<dyn ProbeClient>,
    target: &Target,
    timeout: Duration,
) -> Status {
    let client = client.clone();
    let ip = target.ip.clone();

    match tokio::spawn(async move { client.check_status(&ip, timeout).await }).await {
        Ok(status) => status,
        Err(e) => {
            error!("Status check of {target} failed, reporting it offline: {e}");
            Status::Offline
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

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Records the peak number of probes running at once.
    #[derive(Default)]
    struct GaugeProbe {
        running: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl ProbeClient for GaugeProbe {
        async fn check_status(&self, _ip: &str, _timeout: Duration) -> Status {
            let now = self.running.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(5)).await;
            self.running.fetch_sub(1, Ordering::SeqCst);
            Status::Online
        }
    }

    #[tokio::test]
    async fn pool_probes_every_job_once_and_closes_results() {
        let probe = Arc::new(GaugeProbe::default());
        let (jobs_tx, jobs_rx) = mpsc::channel(JOB_QUEUE_CAPACITY);
        let (results_tx, mut results_rx) = mpsc::channel(32);

        let timeout = Duration::from_millis(50);
        let pool = WorkerPool::spawn(4, probe.clone(), timeout, jobs_rx, results_tx);

        let producer = tokio::spawn(async move {
            for octet in 1..=20 {
                jobs_tx.send(Target::new("10.0.0", octet)).await.unwrap();
            }
        });

        let mut seen = HashSet::new();
        while let Some(probed) = results_rx.recv().await {
            assert!(seen.insert(probed.target.octet), "duplicate result");
        }

        producer.await.unwrap();
        assert_eq!(pool.join().await, 20);
        assert_eq!(seen.len(), 20);
        assert!(probe.peak.load(Ordering::SeqCst) <= 4);
    }

    #[tokio::test]
    async fn single_worker_never_overlaps_probes() {
        let probe = Arc::new(GaugeProbe::default());
        let (jobs_tx, jobs_rx) = mpsc::channel(JOB_QUEUE_CAPACITY);
        let (results_tx, mut results_rx) = mpsc::channel(8);

        let timeout = Duration::from_millis(50);
        let pool = WorkerPool::spawn(1, probe.clone(), timeout, jobs_rx, results_tx);
        for octet in 1..=5 {
            jobs_tx.send(Target::new("10.0.0", octet)).await.unwrap();
        }
        drop(jobs_tx);

        assert_eq!(pool.join().await, 5);

        let mut count = 0;
        while results_rx.recv().await.is_some() {
            count += 1;
        }
        assert_eq!(count, 5);
        assert_eq!(probe.peak.load(Ordering::SeqCst), 1);
    }

    /// Panics on one address, online everywhere else.
    struct CrashingClient;

    #[async_trait]
    impl ProbeClient for CrashingClient {
        async fn check_status(&self, ip: &str, _timeout: Duration) -> Status {
            if ip == "10.0.0.2" {
                panic!("connection handler crashed");
            }
            Status::Online
        }
    }

    #[tokio::test]
    async fn worker_survives_a_panicking_status_check() {
        let (jobs_tx, jobs_rx) = mpsc::channel(JOB_QUEUE_CAPACITY);
        let (results_tx, mut results_rx) = mpsc::channel(8);

        let timeout = Duration::from_millis(50);
        let pool = WorkerPool::spawn(1, Arc::new(CrashingClient), timeout, jobs_rx, results_tx);
        for octet in 1..=4 {
            jobs_tx.send(Target::new("10.0.0", octet)).await.unwrap();
        }
        drop(jobs_tx);

        assert_eq!(pool.join().await, 4);

        let mut statuses = Vec::new();
        while let Some(result) = results_rx.recv().await {
            statuses.push((result.target.octet, result.status));
        }
        statuses.sort_by_key(|(octet, _)| *octet);
        assert_eq!(
            statuses,
            vec![
                (1, Status::Online),
                (2, Status::Offline),
                (3, Status::Online),
                (4, Status::Online),
            ]
        );
    }
}
