//! # Scan Target Model
//!
//! A target is one address inside the scanned subnet, built from a dotted
//! base prefix (e.g. `192.168.1`) and a last octet.

use std::fmt;

/// One address to probe. Only lives for the duration of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    pub octet: u8,
    pub ip: String,
}

impl Target {
    pub fn new(base: &str, octet: u8) -> Self {
        Self {
            octet,
            ip: format!("{base}.{octet}"),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ip)
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
