//! # Address Model
//!
//! A single IPv4 or IPv6 host address stored as an unsigned integer together
//! with its family. Both families share one `u128` representation; the
//! family decides the width used for bounds and display.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Number of bits in an address of this family.
    pub const fn width(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }

    /// The all-ones address value.
    pub const fn max_value(self) -> u128 {
        match self {
            Family::V4 => u32::MAX as u128,
            Family::V6 => u128::MAX,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// Addresses order by family first, so every IPv4 address sorts before every
/// IPv6 address. Callers that care about a single family must check
/// [`Address::family`] themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    family: Family,
    value: u128,
}

impl Address {
    pub const fn v4(value: u32) -> Self {
        Self {
            family: Family::V4,
            value: value as u128,
        }
    }

    pub const fn v6(value: u128) -> Self {
        Self {
            family: Family::V6,
            value,
        }
    }

    /// Builds an address from a raw value, rejecting values wider than the
    /// family allows.
    pub fn from_value(family: Family, value: u128) -> Option<Self> {
        (value <= family.max_value()).then_some(Self { family, value })
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    pub fn is_max(&self) -> bool {
        self.value == self.family.max_value()
    }

    /// The address directly after this one.
    ///
    /// Fails with [`Error::Overflow`] on the all-ones address of the family.
    pub fn next(&self) -> Result<Self> {
        self.checked_add(1)
            .ok_or_else(|| Error::Overflow(self.to_string()))
    }

    /// The address directly before this one.
    ///
    /// Fails with [`Error::Underflow`] on the all-zero address.
    pub fn prev(&self) -> Result<Self> {
        self.checked_sub(1)
            .ok_or_else(|| Error::Underflow(self.to_string()))
    }

    /// Moves `n` addresses forward, or `None` if that leaves the family.
    pub fn checked_add(&self, n: u128) -> Option<Self> {
        let value = self.value.checked_add(n)?;
        Self::from_value(self.family, value)
    }

    /// Moves `n` addresses backward, or `None` if that goes below zero.
    pub fn checked_sub(&self, n: u128) -> Option<Self> {
        let value = self.value.checked_sub(n)?;
        Some(Self {
            family: self.family,
            value,
        })
    }

    pub fn to_ip(&self) -> IpAddr {
        match self.family {
            Family::V4 => IpAddr::V4(Ipv4Addr::from(self.value as u32)),
            Family::V6 => IpAddr::V6(Ipv6Addr::from(self.value)),
        }
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Address::v4(u32::from(v4)),
            IpAddr::V6(v6) => Address::v6(u128::from(v6)),
        }
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        addr.to_ip()
    }
}

impl FromStr for Address {
    type Err = Error;

    /// Parses a dotted-quad IPv4 or any textual IPv6 form. Hex digits are
    /// accepted in either case.
    fn from_str(s: &str) -> Result<Self> {
        s.parse::<IpAddr>()
            .map(Address::from)
            .map_err(|_| Error::AddressParse(s.to_string()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ip(), f)
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
