use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every way a request can fail. Each variant carries the input fragment
/// that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid IP range format: {0}")]
    Format(String),

    #[error("failed to parse IP {0:?}")]
    AddressParse(String),

    #[error("start and end of range {0} belong to different address families")]
    FamilyMismatch(String),

    #[error("range end is before its start: {0}")]
    EndBeforeStart(String),

    #[error("prefix length out of bounds: {0}")]
    PrefixLength(String),

    #[error("count must be greater than 0, got {0}")]
    Count(i64),

    #[error("{0} is the last address of its family")]
    Overflow(String),

    #[error("{0} is the first address of its family")]
    Underflow(String),
}
