//! # iptools engine
//!
//! Pure address and range arithmetic behind the `ipt` command line tool.
//!
//! * **[`network`]**: addresses, ranges, canonical address sets, CIDR prefixes
//!   and bounded enumeration.
//! * **[`ops`]**: the string-in, value-out operations consumed by the CLI.
//! * **[`config`]**: presentation settings threaded through the CLI.
//!
//! Nothing in this crate performs I/O or logs.

pub mod config;
pub mod error;
pub mod network;
pub mod ops;

pub use error::{Error, Result};
