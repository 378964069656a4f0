//! # Operations
//!
//! The five requests the command line front end can make. Each takes the raw
//! user text and returns plain values; rendering is left to the caller.

use crate::error::{Error, Result};
use crate::network::address::Address;
use crate::network::cidr::{Boundaries, Prefix};
use crate::network::scan::{self, Direction};
use crate::network::target;

/// Block boundaries in display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CidrBoundaries {
    /// The prefix as parsed, host bits untouched.
    pub cidr: String,
    pub first: String,
    pub last: String,
    pub magnitude: String,
}

/// Reports whether `ip` falls inside any token of `range_spec`.
pub fn is_member(ip: &str, range_spec: &str) -> Result<bool> {
    let addr: Address = ip.trim().parse()?;
    let set = target::parse_spec(range_spec)?;
    Ok(set.contains(&addr))
}

pub fn cidr_boundaries(cidr_spec: &str) -> Result<CidrBoundaries> {
    let prefix: Prefix = cidr_spec.trim().parse()?;
    let boundaries = Boundaries::from(&prefix);

    Ok(CidrBoundaries {
        cidr: prefix.to_string(),
        first: boundaries.first.to_string(),
        last: boundaries.last.to_string(),
        magnitude: boundaries.magnitude.to_string(),
    })
}

pub fn next(ip: &str) -> Result<String> {
    let addr: Address = ip.trim().parse()?;
    Ok(addr.next()?.to_string())
}

pub fn prev(ip: &str) -> Result<String> {
    let addr: Address = ip.trim().parse()?;
    Ok(addr.prev()?.to_string())
}

/// Lists up to `count` host addresses of `cidr_spec`, skipping `offset` of
/// them first. With `tail` the walk starts at the top of the block.
pub fn enumerate(cidr_spec: &str, count: i64, offset: u64, tail: bool) -> Result<Vec<String>> {
    let prefix: Prefix = cidr_spec.trim().parse()?;

    let count = usize::try_from(count)
        .ok()
        .filter(|count| *count > 0)
        .ok_or(Error::Count(count))?;

    let addrs = scan::enumerate(&prefix, count, u128::from(offset), Direction::from_tail(tail))?;
    Ok(addrs.iter().map(Address::to_string).collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
