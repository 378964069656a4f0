//! # Address Range Model
//!
//! A closed interval of same-family addresses. Ranges are the building block
//! of [`crate::network::set::AddressSet`] and are what every token of a range
//! spec reduces to.

use std::fmt;

use crate::error::{Error, Result};
use crate::network::address::{Address, Family};

/// Represents a continuous range of addresses, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: Address,
    end: Address,
}

impl Range {
    /// Creates a range, rejecting mixed families and reversed bounds.
    pub fn new(start: Address, end: Address) -> Result<Self> {
        if start.family() != end.family() {
            return Err(Error::FamilyMismatch(format!("{start}-{end}")));
        }
        if start > end {
            return Err(Error::EndBeforeStart(format!("{start}-{end}")));
        }
        Ok(Self { start, end })
    }

    pub fn single(addr: Address) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    /// Caller guarantees a shared family and `start <= end`.
    pub(crate) fn spanning(start: Address, end: Address) -> Self {
        debug_assert!(start.family() == end.family() && start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> Address {
        self.start
    }

    pub fn end(&self) -> Address {
        self.end
    }

    pub fn family(&self) -> Family {
        self.start.family()
    }

    pub fn contains(&self, addr: &Address) -> bool {
        addr.family() == self.family() && self.start <= *addr && *addr <= self.end
    }

    /// Number of addresses in the range. `None` only for the whole IPv6
    /// space, whose size does not fit in a `u128`.
    pub fn size(&self) -> Option<u128> {
        (self.end.value() - self.start.value()).checked_add(1)
    }

    /// True when `other` overlaps this range or starts right after it ends.
    ///
    /// Expects `other.start >= self.start`.
    pub(crate) fn touches(&self, other: &Range) -> bool {
        if self.family() != other.family() {
            return false;
        }
        match self.end.checked_add(1) {
            Some(after) => other.start <= after,
            // self runs to the top of the family, nothing can start beyond it
            None => true,
        }
    }

    /// Smallest range covering both. Both must share a family.
    pub(crate) fn hull(&self, other: &Range) -> Range {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
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
