use std::collections::HashSet;
use std::sync::Arc;

use rigscan_common::ScanError;
use rigscan_common::network::miner::{Miner, Status};
use rigscan_common::scan::ScanRequest;
use rigscan_core::ScanService;

use super::support::{ParityProbe, as_set, last_octet};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn scan_covers_every_target_exactly_once() {
    let service = ScanService::new(ParityProbe::default());

    for (start, end) in [(1, 1), (1, 254), (100, 110), (250, 254)] {
        let resp = service.scan(ScanRequest::new("10.1.2", start, end)).await.unwrap();

        let expected: HashSet<String> = (start..=end).map(|i| format!("10.1.2.{i}")).collect();
        let actual: HashSet<String> = resp.miners.iter().map(|m| m.ip.clone()).collect();

        assert_eq!(resp.miners.len(), (end - start + 1) as usize);
        assert_eq!(actual, expected, "range {start}-{end}");
    }
}

#[tokio::test]
async fn statuses_follow_the_probe() {
    let service = ScanService::new(ParityProbe::default());

    let resp = service.scan(ScanRequest::new("10.0.0", 1, 4)).await.unwrap();

    let expected: HashSet<Miner> = [
        Miner::new("10.0.0.1", Status::Offline),
        Miner::new("10.0.0.2", Status::Online),
        Miner::new("10.0.0.3", Status::Offline),
        Miner::new("10.0.0.4", Status::Online),
    ]
    .into_iter()
    .collect();
    assert_eq!(as_set(&resp.miners), expected);
}

#[tokio::test]
async fn rejected_requests_make_zero_probe_calls() {
    let probe = Arc::new(ParityProbe::default());
    let service = ScanService::from_arc(probe.clone());

    let invalid = [(0, 10), (5, 4), (1, 255), (-1, -1), (300, 301)];
    for (start, end) in invalid {
        let err = service.scan(ScanRequest::new("10.0.0", start, end)).await.unwrap_err();
        assert_eq!(err, ScanError::InvalidRange { start, end });
    }

    let err = service.scan(ScanRequest::new("", 1, 10)).await.unwrap_err();
    assert_eq!(err, ScanError::MissingBase);
    assert_eq!(err.to_string(), "base is required");

    assert_eq!(probe.calls(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn repeated_scans_are_identical() {
    let service = ScanService::new(ParityProbe::default());
    let req = ScanRequest::new("172.16.0", 20, 80).with_workers(13);

    let first = service.scan(req.clone()).await.unwrap();
    let second = service.scan(req).await.unwrap();

    assert_eq!(first.miners, second.miners);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn worker_count_never_changes_the_result() {
    let service = ScanService::new(ParityProbe::default());

    let baseline = service
        .scan(ScanRequest::new("10.0.0", 1, 60).with_workers(1))
        .await
        .unwrap();

    for workers in [2, 7, 30, 50] {
        let resp = service
            .scan(ScanRequest::new("10.0.0", 1, 60).with_workers(workers))
            .await
            .unwrap();
        assert_eq!(resp.miners, baseline.miners, "workers={workers}");
        assert_eq!(resp.workers, workers as usize);
    }
}

#[tokio::test]
async fn miners_are_ordered_by_numeric_octet() {
    let service = ScanService::new(ParityProbe::default());

    let resp = service.scan(ScanRequest::new("10.0.0", 95, 105)).await.unwrap();
    let octets: Vec<u64> = resp.miners.iter().map(|m| last_octet(&m.ip)).collect();

    assert_eq!(octets, (95..=105).collect::<Vec<u64>>());
}

#[tokio::test]
async fn concurrent_callers_do_not_share_state() {
    let service = ScanService::new(ParityProbe::default());

    let (a, b) = tokio::join!(
        service.scan(ScanRequest::new("10.0.0", 1, 30)),
        service.scan(ScanRequest::new("10.0.1", 31, 40)),
    );
    let (a, b) = (a.unwrap(), b.unwrap());

    assert_eq!(a.miners.len(), 30);
    assert_eq!(b.miners.len(), 10);
    assert!(a.miners.iter().all(|m| m.ip.starts_with("10.0.0.")));
    assert!(b.miners.iter().all(|m| m.ip.starts_with("10.0.1.")));
}
