//! Local interface inspection, used to guess the subnet base when the
//! operator asks for `lan` instead of typing a prefix.

use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ViabilityError {
    /// The interface is operationally down.
    IsDown,
    /// Loopback interfaces never carry rigs.
    IsLoopback,
    /// The interface is a point-to-point link (e.g., a VPN).
    IsPointToPoint,
    /// The interface has no private IPv4 address.
    NoPrivateIpv4,
}

/// Finds the primary LAN interface and returns its private IPv4 address.
pub fn get_lan_ipv4() -> anyhow::Result<Ipv4Addr> {
    let interfaces: Vec<NetworkInterface> = pnet::datalink::interfaces()
        .into_iter()
        .filter(|interface| is_viable_lan_interface(interface).is_ok())
        .collect();

    let Some(interface) = select_best_lan_interface(&interfaces) else {
        anyhow::bail!("No interfaces available for LAN discovery");
    };

    private_ipv4(interface)
        .ok_or_else(|| anyhow::anyhow!("Interface {} has no private IPv4 address", interface.name))
}

/// Derives a `/24` scan base (`a.b.c`) from the primary LAN address.
pub fn get_lan_base() -> anyhow::Result<String> {
    let ip = get_lan_ipv4()?;
    tracing::debug!("Using LAN address {ip} as scan base");
    Ok(base_of(ip))
}

/// The first three octets of `ip`, dotted.
pub fn base_of(ip: Ipv4Addr) -> String {
    let [a, b, c, _] = ip.octets();
    format!("{a}.{b}.{c}")
}

fn private_ipv4(interface: &NetworkInterface) -> Option<Ipv4Addr> {
    interface.ips.iter().find_map(|net| match net {
        IpNetwork::V4(v4) if v4.ip().is_private() => Some(v4.ip()),
        _ => None,
    })
}

fn is_viable_lan_interface(interface: &NetworkInterface) -> Result<(), ViabilityError> {
    if !interface.is_up() {
        return Err(ViabilityError::IsDown);
    }
    if interface.is_loopback() {
        return Err(ViabilityError::IsLoopback);
    }
    if interface.is_point_to_point() {
        return Err(ViabilityError::IsPointToPoint);
    }
    if private_ipv4(interface).is_none() {
        return Err(ViabilityError::NoPrivateIpv4);
    }

    Ok(())
}

/// Wired interfaces win; otherwise the first viable one.
fn select_best_lan_interface(interfaces: &[NetworkInterface]) -> Option<&NetworkInterface> {
    interfaces
        .iter()
        .find(|interface| is_wired(interface))
        .or_else(|| interfaces.first())
}

fn is_wired(interface: &NetworkInterface) -> bool {
    interface.name.starts_with("en") || interface.name.starts_with("eth")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
