use std::fmt;

use serde::{Deserialize, Serialize};

/// Port the cgminer/bmminer API listens on.
pub const MINER_PORT: u16 = 4028;

/// Outcome of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Online,
    Offline,
}

impl Status {
    pub fn is_online(self) -> bool {
        matches!(self, Status::Online)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Online => write!(f, "online"),
            Status::Offline => write!(f, "offline"),
        }
    }
}

/// A probed host, as reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Miner {
    pub ip: String,
    pub status: Status,
}

impl Miner {
    pub fn new(ip: impl Into<String>, status: Status) -> Self {
        Self {
            ip: ip.into(),
            status,
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

    #[test]
    fn status_serializes_lowercase() {
        let miner = Miner::new("10.0.0.7", Status::Online);
        let json = serde_json::to_string(&miner).unwrap();
        assert_eq!(json, r#"{"ip":"10.0.0.7","status":"online"}"#);

        let offline: Status = serde_json::from_str(r#""offline""#).unwrap();
        assert_eq!(offline, Status::Offline);
    }

    #[test]
    fn status_display_matches_wire_format() {
        assert_eq!(Status::Online.to_string(), "online");
        assert_eq!(Status::Offline.to_string(), "offline");
        assert!(Status::Online.is_online());
        assert!(!Status::Offline.is_online());
    }
}
