use colored::*;
use rigscan_common::scan::{ScanRequest, ScanResponse};
use rigscan_core::ValidatedRequest;
use std::time::Duration;

use crate::commands::{ScanArgs, build_service};
use crate::terminal::{print, spinner};

pub async fn scan(args: ScanArgs) -> anyhow::Result<()> {
    let request: ScanRequest = args.to_request()?;
    let service = build_service(args.demo);

    let validated: ValidatedRequest = rigscan_core::validate(request)?;

    if args.json {
        let response: ScanResponse = service.scan_validated(validated).await;
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    print::header("starting scan");
    let spinner = spinner::start_scan_spinner(validated.total(), validated.workers());

    let response: ScanResponse = service.scan_validated(validated).await;
    spinner.finish_and_clear();

    scan_ends(&response);
    Ok(())
}

fn scan_ends(response: &ScanResponse) {
    print::header("scan results");
    print::aligned_line("Base", response.base.normal(), 7);
    print::aligned_line("Range", format!("{}-{}", response.start, response.end).normal(), 7);
    print::aligned_line("Timeout", format!("{}ms", response.timeout_ms).normal(), 7);
    print::aligned_line("Workers", response.workers.to_string().normal(), 7);
    print::miners(&response.miners);
    print::summary(
        response.online_count(),
        response.miners.len(),
        Duration::from_millis(response.elapsed_ms),
    );
}
