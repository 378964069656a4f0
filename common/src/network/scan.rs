//! # Bounded Enumeration
//!
//! Walks the host addresses of a CIDR block from either end. The network and
//! broadcast addresses are never produced: the walk starts one step inside
//! the block and stops before reaching the opposite end.

use crate::error::{Error, Result};
use crate::network::address::Address;
use crate::network::cidr::Prefix;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// From the network address upwards.
    #[default]
    Forward,
    /// From the broadcast address downwards.
    Backward,
}

impl Direction {
    pub fn from_tail(tail: bool) -> Self {
        if tail {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}

/// A position inside a block plus the direction it moves in.
///
/// `position` is `None` once a step has run off the address space.
#[derive(Debug, Clone)]
pub struct Cursor {
    position: Option<Address>,
    boundary: Address,
    direction: Direction,
}

impl Cursor {
    /// Places the cursor on the first host address of `prefix` in the given
    /// direction.
    pub fn new(prefix: &Prefix, direction: Direction) -> Self {
        let (position, boundary) = match direction {
            Direction::Forward => (prefix.network().next().ok(), prefix.broadcast()),
            Direction::Backward => (prefix.broadcast().prev().ok(), prefix.network()),
        };
        Self {
            position,
            boundary,
            direction,
        }
    }

    /// The current address, or `None` once the cursor reached the boundary
    /// or left the address space.
    pub fn current(&self) -> Option<Address> {
        let position = self.position?;
        let inside = match self.direction {
            Direction::Forward => position < self.boundary,
            Direction::Backward => position > self.boundary,
        };
        inside.then_some(position)
    }

    pub fn step(&mut self) {
        self.advance_by(1);
    }

    /// Moves `n` steps at once.
    pub fn advance_by(&mut self, n: u128) {
        self.position = self.position.and_then(|position| match self.direction {
            Direction::Forward => position.checked_add(n),
            Direction::Backward => position.checked_sub(n),
        });
    }
}

impl Iterator for Cursor {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        let current = self.current()?;
        self.step();
        Some(current)
    }
}

/// Collects up to `count` host addresses of `prefix`, after skipping the
/// first `offset` of them.
///
/// Running out of block is not an error: the result is just shorter, and
/// empty if the skip already passed the end.
pub fn enumerate(prefix: &Prefix, count: usize, offset: u128, direction: Direction) -> Result<Vec<Address>> {
    if count == 0 {
        return Err(Error::Count(0));
    }

    let mut cursor = Cursor::new(prefix, direction);
    cursor.advance_by(offset);

    Ok(cursor.take(count).collect())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
