//! # Range Spec Parsing
//!
//! Turns a user supplied range spec into an [`AddressSet`].
//!
//! A spec is a list of tokens separated by whitespace and/or commas. Each
//! token is one of:
//! * A single address (e.g., `192.0.2.1`, `2001:db8::1`).
//! * An address range (e.g., `192.0.2.0-192.0.2.10`).
//! * A CIDR block (e.g., `192.0.2.0/24`), network and broadcast included.

use std::str::FromStr;

use crate::error::{Error, Result};
use crate::network::address::Address;
use crate::network::cidr::Prefix;
use crate::network::range::Range;
use crate::network::set::AddressSet;

/// One token of a range spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Host { addr: Address },
    Range { range: Range },
    Cidr { prefix: Prefix },
}

impl FromStr for Target {
    type Err = Error;

    /// Classifies the token by its characters and parses it accordingly.
    /// Hex digits may be in either case; errors carry the token as typed.
    fn from_str(s: &str) -> Result<Self> {
        if is_address_text(s) {
            return parse_host(s);
        }

        if let Some(target) = parse_ip_range(s)? {
            return Ok(target);
        }

        if let Some(target) = parse_cidr_range(s)? {
            return Ok(target);
        }

        Err(Error::Format(s.to_string()))
    }
}

/// Parses a whole range spec. An empty or blank spec yields an empty set.
///
/// The first malformed token aborts the parse.
pub fn parse_spec(s: &str) -> Result<AddressSet> {
    let mut builder = AddressSet::builder();

    for token in tokens(s) {
        match token.parse::<Target>()? {
            Target::Host { addr } => builder.add_single(addr),
            Target::Range { range } => builder.add_range(range),
            Target::Cidr { prefix } => builder.add_prefix(&prefix),
        }
    }

    Ok(builder.build())
}

/// Splits on commas and whitespace, dropping empty pieces.
fn tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
}

fn is_address_char(c: char) -> bool {
    c.is_ascii_hexdigit() || c == '.' || c == ':'
}

fn is_address_text(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_address_char)
}

fn parse_host(s: &str) -> Result<Target> {
    let addr: Address = s.parse()?;
    Ok(Target::Host { addr })
}

/// Parses `start-end`. Returns `Ok(None)` when the token is not shaped like a
/// range at all.
fn parse_ip_range(s: &str) -> Result<Option<Target>> {
    let Some((start_str, end_str)) = s.split_once('-') else {
        return Ok(None);
    };

    if !is_address_text(start_str) || !is_address_text(end_str) {
        return Ok(None);
    }

    let start: Address = start_str.parse()?;
    let end: Address = end_str.parse()?;

    let range = Range::new(start, end).map_err(|err| match err {
        Error::FamilyMismatch(_) => Error::FamilyMismatch(s.to_string()),
        Error::EndBeforeStart(_) => Error::EndBeforeStart(s.to_string()),
        other => other,
    })?;
    Ok(Some(Target::Range { range }))
}

/// Parses `address/length`. Returns `Ok(None)` when the token is not shaped
/// like a CIDR block.
fn parse_cidr_range(s: &str) -> Result<Option<Target>> {
    let Some((addr_str, len_str)) = s.split_once('/') else {
        return Ok(None);
    };

    let len_shaped = (1..=3).contains(&len_str.len()) && len_str.bytes().all(|b| b.is_ascii_digit());
    if !is_address_text(addr_str) || !len_shaped {
        return Ok(None);
    }

    let prefix: Prefix = s.parse()?;
    Ok(Some(Target::Cidr { prefix }))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
