//! # Address Sets
//!
//! An [`AddressSet`] is the canonical union of any number of [`Range`]s:
//! sorted by start, with overlapping and adjacent ranges merged, so two sets
//! holding the same addresses are always equal no matter how they were built.
//!
//! Sets are assembled through [`AddressSetBuilder`] and are immutable
//! afterwards.

use std::fmt;

use crate::network::address::Address;
use crate::network::cidr::Prefix;
use crate::network::range::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AddressSet {
    ranges: Vec<Range>,
}

impl AddressSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> AddressSetBuilder {
        AddressSetBuilder::new()
    }

    /// The canonical ranges, ascending. IPv4 ranges come before IPv6 ranges.
    pub fn ranges(&self) -> &[Range] {
        &self.ranges
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn contains(&self, addr: &Address) -> bool {
        self.candidate(addr)
            .is_some_and(|range| range.contains(addr))
    }

    /// True when every address of `range` is in the set.
    pub fn contains_range(&self, range: &Range) -> bool {
        self.candidate(&range.start())
            .is_some_and(|candidate| candidate.contains(&range.start()) && candidate.contains(&range.end()))
    }

    pub fn union(&self, other: &AddressSet) -> AddressSet {
        let mut builder = AddressSetBuilder::new();
        builder.add_set(self);
        builder.add_set(other);
        builder.build()
    }

    /// The last range starting at or before `addr`; the only one that can
    /// contain it since ranges never overlap.
    fn candidate(&self, addr: &Address) -> Option<&Range> {
        let idx = self.ranges.partition_point(|range| range.start() <= *addr);
        idx.checked_sub(1).map(|i| &self.ranges[i])
    }
}

impl fmt::Display for AddressSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

/// Collects ranges in any order and reduces them to an [`AddressSet`].
#[derive(Debug, Clone, Default)]
pub struct AddressSetBuilder {
    pending: Vec<Range>,
}

impl AddressSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_single(&mut self, addr: Address) {
        self.pending.push(Range::single(addr));
    }

    pub fn add_range(&mut self, range: Range) {
        self.pending.push(range);
    }

    /// Adds the whole block, network and broadcast addresses included.
    pub fn add_prefix(&mut self, prefix: &Prefix) {
        self.pending.push(prefix.range());
    }

    pub fn add_set(&mut self, set: &AddressSet) {
        self.pending.extend_from_slice(set.ranges());
    }

    /// Sorts the collected ranges and merges every overlapping or adjacent
    /// pair in a single sweep.
    pub fn build(mut self) -> AddressSet {
        self.pending.sort_by_key(|range| (range.start(), range.end()));

        let mut ranges: Vec<Range> = Vec::with_capacity(self.pending.len());
        for range in self.pending {
            match ranges.last_mut() {
                Some(last) if last.touches(&range) => *last = last.hull(&range),
                _ => ranges.push(range),
            }
        }

        AddressSet { ranges }
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
