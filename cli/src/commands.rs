pub mod scan;
pub mod serve;

use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};
use rigscan_common::config::{DEFAULT_BIND, ServerConfig};
use rigscan_common::network::interface;
use rigscan_common::scan::{
    DEFAULT_BASE, DEFAULT_END, DEFAULT_START, DEFAULT_TIMEOUT_MS, DEFAULT_WORKERS, ScanRequest,
};
use rigscan_core::{DemoProbe, ScanService, TcpProbe};

/// Keyword that resolves the base from the primary LAN interface.
const LAN_KEYWORD: &str = "lan";

#[derive(Parser)]
#[command(name = "rigscan")]
#[command(about = "Finds mining rigs on a local subnet.", version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sweep a range once and print every host
    #[command(alias = "s")]
    Scan(ScanArgs),
    /// Serve the scan API over HTTP
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ScanArgs {
    /// Subnet prefix such as 192.168.1, or "lan" to detect it
    #[arg(short, long, env = "SCAN_BASE", default_value = DEFAULT_BASE)]
    pub base: String,
    /// First last-octet to probe
    #[arg(long, default_value_t = DEFAULT_START, allow_negative_numbers = true)]
    pub start: i64,
    /// Last last-octet to probe
    #[arg(long, default_value_t = DEFAULT_END, allow_negative_numbers = true)]
    pub end: i64,
    /// Per-probe deadline in milliseconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_MS, allow_negative_numbers = true)]
    pub timeout_ms: i64,
    /// Number of concurrent probes
    #[arg(short, long, default_value_t = DEFAULT_WORKERS, allow_negative_numbers = true)]
    pub workers: i64,
    /// Treat 127.0.0.1 as an online rig without probing it
    #[arg(long)]
    pub demo: bool,
    /// Print the raw JSON response instead of the table
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "RIGSCAN_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,
    /// Subnet prefix used when a request omits `base`, or "lan"
    #[arg(short, long, env = "SCAN_BASE", default_value = DEFAULT_BASE)]
    pub base: String,
    /// Treat 127.0.0.1 as an online rig without probing it
    #[arg(long)]
    pub demo: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl ScanArgs {
    pub fn to_request(&self) -> anyhow::Result<ScanRequest> {
        Ok(ScanRequest {
            base: resolve_base(&self.base)?,
            start: self.start,
            end: self.end,
            timeout_ms: self.timeout_ms,
            workers: self.workers,
        })
    }
}

impl ServeArgs {
    pub fn to_config(&self) -> anyhow::Result<ServerConfig> {
        Ok(ServerConfig {
            bind: self.bind,
            default_base: resolve_base(&self.base)?,
            demo: self.demo,
        })
    }
}

/// Expands the `lan` keyword; any other value is used as given.
pub fn resolve_base(base: &str) -> anyhow::Result<String> {
    if base.eq_ignore_ascii_case(LAN_KEYWORD) {
        return interface::get_lan_base();
    }
    Ok(base.to_string())
}

/// Picks the probe implementation. This is the only place that choice is made.
pub fn build_service(demo: bool) -> ScanService {
    if demo {
        ScanService::new(DemoProbe::new())
    } else {
        ScanService::new(TcpProbe::new())
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
