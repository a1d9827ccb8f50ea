//! Network lookup helpers.

use anyhow::{Context, Result, anyhow};
use regex::Regex;
use std::net::{IpAddr, UdpSocket};
use std::sync::OnceLock;

/// The non-loopback IPv4 address this host would use for outbound traffic.
///
/// Uses a UDP socket to determine the local interface; no packets are
/// actually sent.
pub fn local_ip() -> Result<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").context("Failed to bind probe socket")?;
    socket
        .connect("8.8.8.8:80")
        .context("No route available for local address discovery")?;
    let addr = socket
        .local_addr()
        .context("Failed to read probe socket address")?;
    if addr.ip().is_loopback() || addr.ip().is_unspecified() {
        return Err(anyhow!("effective address not found"));
    }
    Ok(addr.ip())
}

fn mac_address_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new("^([[:xdigit:]]{2}[:.-]?){5}[[:xdigit:]]{2}$")
            .expect("MAC address pattern is valid")
    })
}

/// Whether the given string is a well-formed MAC address.
pub fn is_valid_mac_address(mac: &str) -> bool {
    mac_address_pattern().is_match(mac)
}
