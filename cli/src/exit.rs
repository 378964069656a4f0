//! Process exit codes.
//!
//! | code | meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | success, including a negative membership  |
//! | 1    | unexpected failure                        |
//! | 2    | bad command line usage (reported by clap) |
//! | 3    | malformed address, range or CIDR input    |
//! | 4    | invalid count                             |
//! | 5    | stepped past the edge of the address space|

use iptools_common::Error;

pub const FAILURE: u8 = 1;
pub const INVALID_INPUT: u8 = 3;
pub const INVALID_COUNT: u8 = 4;
pub const OUT_OF_SPACE: u8 = 5;

pub fn code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Error>().map_or(FAILURE, engine_code)
}

fn engine_code(err: &Error) -> u8 {
    match err {
        Error::Format(_)
        | Error::AddressParse(_)
        | Error::FamilyMismatch(_)
        | Error::EndBeforeStart(_)
        | Error::PrefixLength(_) => INVALID_INPUT,
        Error::Count(_) => INVALID_COUNT,
        Error::Overflow(_) | Error::Underflow(_) => OUT_OF_SPACE,
    }
}
