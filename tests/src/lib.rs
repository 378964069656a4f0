//! Table driven tests for the operations exposed by `iptools-common`.

#[cfg(test)]
mod ops;
