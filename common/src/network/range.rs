//! # CIDR Block Expansion
//!
//! Turns a block like `192.168.1.0/30` into every address it admits, in
//! ascending order. Blocks are taken literally: a `/31` yields two addresses,
//! a `/32` one, and nothing is reserved for network or broadcast.
//!
//! The walk treats an address as a fixed-width big-endian integer, so the same
//! code serves IPv4 and IPv6.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use pnet::ipnetwork::IpNetwork;

use crate::error::SweepError;

/// A validated `address/prefix` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrBlock {
    network: IpNetwork,
}

impl CidrBlock {
    pub fn new(addr: IpAddr, prefix: u8) -> Result<Self, SweepError> {
        let network = IpNetwork::new(addr, prefix)
            .map_err(|e| SweepError::invalid_range(&format!("{addr}/{prefix}"), e.to_string()))?;
        Ok(Self { network })
    }

    /// The block's address with all host bits cleared.
    pub fn base(&self) -> IpAddr {
        self.network.network()
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    /// Number of addresses in the block, saturating at `u128::MAX` for `::/0`.
    pub fn size(&self) -> u128 {
        let width: u32 = match self.network {
            IpNetwork::V4(_) => 32,
            IpNetwork::V6(_) => 128,
        };
        let host_bits = width - u32::from(self.prefix());
        1u128.checked_shl(host_bits).unwrap_or(u128::MAX)
    }

    /// Lazily walks every address of the block, starting at [`Self::base`].
    pub fn hosts(&self) -> Hosts {
        let (current, width) = to_octets(self.base());
        let (mask, _) = to_octets(self.network.mask());
        Hosts {
            network: current,
            current,
            mask,
            width,
            exhausted: false,
        }
    }

    /// Collects the block, refusing blocks larger than `limit`.
    pub fn expand(&self, limit: usize) -> Result<Vec<IpAddr>, SweepError> {
        let size: u128 = self.size();
        if size > limit as u128 {
            return Err(SweepError::RangeTooLarge {
                block: self.to_string(),
                size,
                limit,
            });
        }
        Ok(self.hosts().collect())
    }
}

impl FromStr for CidrBlock {
    type Err = SweepError;

    /// Parses `"<address>/<prefix>"`. A bare address is not a block.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((ip_str, prefix_str)) = s.trim().split_once('/') else {
            return Err(SweepError::invalid_range(s, "expected <address>/<prefix>"));
        };

        let addr = ip_str
            .parse::<IpAddr>()
            .map_err(|e| SweepError::invalid_range(s, format!("bad address '{ip_str}': {e}")))?;

        let prefix = prefix_str
            .parse::<u8>()
            .map_err(|e| SweepError::invalid_range(s, format!("bad prefix '{prefix_str}': {e}")))?;

        IpNetwork::new(addr, prefix)
            .map(|network| Self { network })
            .map_err(|e| SweepError::invalid_range(s, e.to_string()))
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base(), self.prefix())
    }
}

/// Iterator returned by [`CidrBlock::hosts`].
#[derive(Debug, Clone)]
pub struct Hosts {
    network: [u8; 16],
    current: [u8; 16],
    mask: [u8; 16],
    width: usize,
    exhausted: bool,
}

impl Hosts {
    fn in_block(&self) -> bool {
        (0..self.width).all(|i| self.current[i] & self.mask[i] == self.network[i])
    }

    fn current_addr(&self) -> IpAddr {
        match self.width {
            4 => {
                let mut octets = [0u8; 4];
                octets.copy_from_slice(&self.current[..4]);
                IpAddr::V4(Ipv4Addr::from(octets))
            }
            _ => IpAddr::V6(Ipv6Addr::from(self.current)),
        }
    }
}

impl Iterator for Hosts {
    type Item = IpAddr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let addr = self.current_addr();
        let carried = increment(&mut self.current[..self.width]);
        if !carried || !self.in_block() {
            self.exhausted = true;
        }
        Some(addr)
    }
}

/// Adds one to a big-endian unsigned integer in place.
///
/// Returns `false` when the carry ran off the most significant byte, which
/// leaves the slice all zeros.
fn increment(octets: &mut [u8]) -> bool {
    for byte in octets.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            return true;
        }
    }
    false
}

fn to_octets(addr: IpAddr) -> ([u8; 16], usize) {
    let mut buf = [0u8; 16];
    match addr {
        IpAddr::V4(v4) => {
            buf[..4].copy_from_slice(&v4.octets());
            (buf, 4)
        }
        IpAddr::V6(v6) => (v6.octets(), 16),
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
