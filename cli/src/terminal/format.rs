use std::net::{IpAddr, Ipv6Addr};

use colored::*;
use pingsweep_common::probe::outcome::ProbeOutcome;

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn ipv6_to_type_str(ipv6_addr: &Ipv6Addr) -> &'static str {
    let first_byte = ipv6_addr.octets()[0];
    if (0x20..=0x3F).contains(&first_byte) {
        return "GUA";
    }
    if ipv6_addr.is_unique_local() {
        return "ULA";
    }
    if ipv6_addr.is_unicast_link_local() {
        return "LLA";
    }
    "IPv6"
}

pub fn ip_to_detail(ip: &IpAddr) -> Detail {
    match ip {
        IpAddr::V4(ipv4_addr) => {
            let value = ipv4_addr.to_string().color(colors::IPV4_ADDR);
            (String::from("IPv4"), value)
        }
        IpAddr::V6(ipv6_addr) => {
            let ipv6_type = ipv6_to_type_str(ipv6_addr);
            let value = ipv6_addr.to_string().color(colors::IPV6_ADDR);
            (String::from(ipv6_type), value)
        }
    }
}

/// Tree details for an alive outcome: address or hostname, then the signal.
pub fn outcome_to_details(outcome: &ProbeOutcome) -> Vec<Detail> {
    let mut details: Vec<Detail> = Vec::new();
    let target = outcome.target();

    if let Some(hostname) = target.hostname() {
        details.push(("Host".to_string(), hostname.color(colors::PRIMARY)));
    }
    if let Some(addr) = target.address() {
        details.push(ip_to_detail(&addr));
    }
    if let Some(signal) = outcome.signal() {
        details.push(("Signal".to_string(), signal.color(colors::SIGNAL)));
    }

    details
}

/// One plain report line: hostname, address and signal, whichever are present.
pub fn report_line(outcome: &ProbeOutcome) -> String {
    let target = outcome.target();
    let address: Option<String> = target.address().map(|addr| addr.to_string());

    [target.hostname(), address.as_deref(), outcome.signal()]
        .into_iter()
        .flatten()
        .collect::<Vec<&str>>()
        .join(" ")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
