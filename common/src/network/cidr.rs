//! # CIDR Prefixes
//!
//! An address plus a prefix length, and everything derived from it: the
//! network and broadcast addresses, the covered [`Range`] and a
//! human-scale [`Magnitude`] of the block.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::network::address::{Address, Family};
use crate::network::range::Range;

/// IPv6 prefix lengths below each bound get the paired label instead of an
/// exact count. Prefixes of 100 bits and longer are counted exactly.
const DECADE_LABELS: [(u8, &str); 8] = [
    (30, "Nonillions"),
    (40, "Octillions"),
    (50, "Septillions"),
    (60, "Sextillions"),
    (70, "Quintillions"),
    (80, "Quadrillions"),
    (90, "Trillions"),
    (100, "Billions"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix {
    addr: Address,
    len: u8,
}

impl Prefix {
    /// Host bits of `addr` are kept as given; [`Prefix::network`] clears them.
    pub fn new(addr: Address, len: u8) -> Result<Self> {
        if len > addr.family().width() {
            return Err(Error::PrefixLength(format!("{addr}/{len}")));
        }
        Ok(Self { addr, len })
    }

    pub fn addr(&self) -> Address {
        self.addr
    }

    /// Prefix length in bits.
    pub fn bits(&self) -> u8 {
        self.len
    }

    pub fn family(&self) -> Family {
        self.addr.family()
    }

    pub fn host_bits(&self) -> u8 {
        self.family().width() - self.len
    }

    /// First address of the block: all host bits cleared.
    pub fn network(&self) -> Address {
        self.with_value(self.addr.value() & !self.host_mask())
    }

    /// Last address of the block: all host bits set.
    pub fn broadcast(&self) -> Address {
        self.with_value(self.addr.value() | self.host_mask())
    }

    /// The whole block, network and broadcast addresses included.
    pub fn range(&self) -> Range {
        Range::spanning(self.network(), self.broadcast())
    }

    pub fn magnitude(&self) -> Magnitude {
        Magnitude::new(self.family(), self.len)
    }

    fn host_mask(&self) -> u128 {
        match self.host_bits() {
            0 => 0,
            128 => u128::MAX,
            bits => (1u128 << bits) - 1,
        }
    }

    fn with_value(&self, value: u128) -> Address {
        match self.family() {
            Family::V4 => Address::v4(value as u32),
            Family::V6 => Address::v6(value),
        }
    }
}

impl FromStr for Prefix {
    type Err = Error;

    /// Parses `address/length`, e.g. `192.0.2.0/24` or `2001:db8::/64`.
    fn from_str(s: &str) -> Result<Self> {
        let Some((addr_str, len_str)) = s.split_once('/') else {
            return Err(Error::Format(s.to_string()));
        };

        let addr: Address = addr_str.parse()?;

        let digits_ok = (1..=3).contains(&len_str.len()) && len_str.bytes().all(|b| b.is_ascii_digit());
        // no leading zeros: `/024` is not `/24`
        if !digits_ok || (len_str.len() > 1 && len_str.starts_with('0')) {
            return Err(Error::Format(s.to_string()));
        }
        let len: u16 = len_str
            .parse()
            .map_err(|_| Error::Format(s.to_string()))?;

        if len > u16::from(addr.family().width()) {
            return Err(Error::PrefixLength(s.to_string()));
        }

        Prefix::new(addr, len as u8)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.len)
    }
}

/// How many addresses a block holds, in a form fit for people.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Magnitude {
    Exact(u128),
    /// Order of magnitude for IPv6 blocks too large to read as a number.
    Approximate(&'static str),
    /// The prefix length does not fit the family.
    Unknown,
}

impl Magnitude {
    pub fn new(family: Family, prefix_len: u8) -> Self {
        let Some(host_bits) = family.width().checked_sub(prefix_len) else {
            return Magnitude::Unknown;
        };

        if family == Family::V6 {
            if let Some((_, label)) = DECADE_LABELS.iter().find(|(bound, _)| prefix_len < *bound) {
                return Magnitude::Approximate(*label);
            }
        }

        Magnitude::Exact(1u128 << host_bits)
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Magnitude::Exact(count) => f.write_str(&group_digits(*count)),
            Magnitude::Approximate(label) => write!(f, "~{label}"),
            Magnitude::Unknown => f.write_str("unknown number of"),
        }
    }
}

/// `65536` -> `65,536`
fn group_digits(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Block boundaries as reported by `cidrange`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundaries {
    pub first: Address,
    pub last: Address,
    pub magnitude: Magnitude,
}

impl From<&Prefix> for Boundaries {
    fn from(prefix: &Prefix) -> Self {
        Self {
            first: prefix.network(),
            last: prefix.broadcast(),
            magnitude: prefix.magnitude(),
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
