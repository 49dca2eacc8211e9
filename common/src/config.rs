use std::net::SocketAddr;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

pub struct ServerConfig {
    /// Address the HTTP transport listens on.
    pub bind: SocketAddr,
    /// Subnet prefix used when a request does not name one.
    pub default_base: String,
    /// Swaps the live probe for the demo probe, which reports the loopback
    /// address as online without touching the network.
    pub demo: bool,
}
