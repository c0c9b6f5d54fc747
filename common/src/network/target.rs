//! # Probe Target Model
//!
//! Defines what a sweep can be pointed at and how input tokens are classified.
//!
//! A [`TargetSpec`] is what the user typed:
//! * A single token: an IPv4/IPv6 literal or a hostname.
//! * A CIDR block (e.g., `192.168.1.0/24`), expanded into one target per address.
//!
//! Every token ends up as a [`Target`], which is either a literal address with
//! a known family or a hostname left for the ping utility to resolve.

use std::fmt;
use std::net::IpAddr;

use crate::error::SweepError;
use crate::network::range::CidrBlock;
use crate::success;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) count as IPv4.
    pub fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => AddressFamily::V4,
            IpAddr::V6(v6) if v6.to_ipv4_mapped().is_some() => AddressFamily::V4,
            IpAddr::V6(_) => AddressFamily::V6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Address { addr: IpAddr, family: AddressFamily },
    Hostname,
}

/// One endpoint to probe. Immutable once classified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    raw: String,
    kind: TargetKind,
}

impl Target {
    /// Classifies a token as a literal address or a hostname.
    ///
    /// Never fails: anything that does not parse as an address is a hostname.
    /// No DNS lookups happen here.
    pub fn classify(token: &str) -> Self {
        let raw = token.trim().to_string();
        let kind = match raw.parse::<IpAddr>() {
            Ok(addr) => TargetKind::Address {
                addr,
                family: AddressFamily::of(&addr),
            },
            Err(_) => TargetKind::Hostname,
        };
        Self { raw, kind }
    }

    pub fn from_addr(addr: IpAddr) -> Self {
        Self {
            raw: addr.to_string(),
            kind: TargetKind::Address {
                addr,
                family: AddressFamily::of(&addr),
            },
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &TargetKind {
        &self.kind
    }

    pub fn address(&self) -> Option<IpAddr> {
        match self.kind {
            TargetKind::Address { addr, .. } => Some(addr),
            TargetKind::Hostname => None,
        }
    }

    /// `None` while the target is a hostname awaiting resolution.
    pub fn family(&self) -> Option<AddressFamily> {
        match self.kind {
            TargetKind::Address { family, .. } => Some(family),
            TargetKind::Hostname => None,
        }
    }

    pub fn hostname(&self) -> Option<&str> {
        match self.kind {
            TargetKind::Hostname => Some(&self.raw),
            TargetKind::Address { .. } => None,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// What the caller asked to sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetSpec {
    /// One host, by address or by name.
    Single(String),
    /// Every address of a CIDR block.
    Block(CidrBlock),
}

impl TargetSpec {
    /// Builds a block spec, surfacing malformed input as [`SweepError::InvalidRange`].
    pub fn block(input: &str) -> Result<Self, SweepError> {
        Ok(TargetSpec::Block(input.parse::<CidrBlock>()?))
    }

    /// Picks the spec from the two user inputs. The range wins when both are present.
    pub fn from_inputs(range: Option<&str>, target: Option<&str>) -> Result<Self, SweepError> {
        match (range, target) {
            (Some(range), _) => Self::block(range),
            (None, Some(target)) => Self::single(target),
            (None, None) => Err(SweepError::NoTargets),
        }
    }

    pub fn single(input: &str) -> Result<Self, SweepError> {
        let token = input.trim();
        if token.is_empty() {
            return Err(SweepError::NoTargets);
        }
        Ok(TargetSpec::Single(token.to_string()))
    }
}

/// Derives the ordered target list from a spec.
///
/// Blocks expand in ascending address order and may not exceed `max_targets`.
pub fn to_targets(spec: &TargetSpec, max_targets: usize) -> Result<Vec<Target>, SweepError> {
    let targets: Vec<Target> = match spec {
        TargetSpec::Single(token) => vec![Target::classify(token)],
        TargetSpec::Block(block) => block
            .expand(max_targets)?
            .into_iter()
            .map(Target::from_addr)
            .collect(),
    };

    if targets.is_empty() {
        return Err(SweepError::NoTargets);
    }

    let len: usize = targets.len();
    let unit: &str = if len == 1 { "target has been" } else { "targets have been" };
    success!("{len} {unit} parsed successfully");

    Ok(targets)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
