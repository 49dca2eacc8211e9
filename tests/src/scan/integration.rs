//! End-to-end scans over the loopback network with the live TCP probe.

use std::time::Duration;

use rigscan_common::network::miner::Status;
use rigscan_common::scan::ScanRequest;
use rigscan_core::{DemoProbe, ScanService, TcpProbe};
use tokio::net::TcpListener;

/// Binds a listener on `addr` with an OS-assigned port.
async fn listen_on(addr: &str) -> anyhow::Result<(TcpListener, u16)> {
    let listener = TcpListener::bind(format!("{addr}:0")).await?;
    let port = listener.local_addr()?.port();
    Ok((listener, port))
}

#[tokio::test]
async fn live_probe_finds_loopback_listener() -> anyhow::Result<()> {
    let (_listener, port) = listen_on("127.0.0.1").await?;
    let service = ScanService::new(TcpProbe::with_port(port));

    let resp = service
        .scan(ScanRequest::new("127.0.0", 1, 1).with_timeout_ms(500))
        .await?;

    assert_eq!(resp.miners.len(), 1);
    assert_eq!(resp.miners[0].ip, "127.0.0.1");
    assert_eq!(resp.miners[0].status, Status::Online);
    Ok(())
}

#[tokio::test]
async fn live_probe_marks_closed_port_offline() -> anyhow::Result<()> {
    let (listener, port) = listen_on("127.0.0.1").await?;
    drop(listener);
    let service = ScanService::new(TcpProbe::with_port(port));

    let resp = service
        .scan(ScanRequest::new("127.0.0", 1, 1).with_timeout_ms(200))
        .await?;

    assert_eq!(resp.miners[0].status, Status::Offline);
    Ok(())
}

#[tokio::test]
#[cfg(target_os = "linux")]
async fn live_probe_sweeps_loopback_range() -> anyhow::Result<()> {
    // Linux routes the whole 127.0.0.0/8 to lo, so 127.0.0.2 is bindable.
    let (_listener, port) = listen_on("127.0.0.2").await?;
    let service = ScanService::new(TcpProbe::with_port(port));

    let resp = service
        .scan(ScanRequest::new("127.0.0", 1, 3).with_timeout_ms(200).with_workers(3))
        .await?;

    let statuses: Vec<Status> = resp.miners.iter().map(|m| m.status).collect();
    assert_eq!(statuses, vec![Status::Offline, Status::Online, Status::Offline]);
    Ok(())
}

#[tokio::test]
async fn demo_probe_reports_loopback_online() -> anyhow::Result<()> {
    let (listener, port) = listen_on("127.0.0.1").await?;
    drop(listener);
    let service = ScanService::new(DemoProbe::wrap("127.0.0.1", TcpProbe::with_port(port)));

    let resp = service
        .scan(ScanRequest::new("127.0.0", 1, 1).with_timeout_ms(100))
        .await?;

    assert_eq!(resp.miners[0].status, Status::Online);
    Ok(())
}

#[tokio::test]
async fn elapsed_time_is_bounded_by_probe_deadline() -> anyhow::Result<()> {
    let (listener, port) = listen_on("127.0.0.1").await?;
    drop(listener);
    let service = ScanService::new(TcpProbe::with_port(port));

    let resp = service
        .scan(ScanRequest::new("127.0.0", 1, 1).with_timeout_ms(100))
        .await?;

    assert!(Duration::from_millis(resp.elapsed_ms) < Duration::from_secs(5));
    Ok(())
}
