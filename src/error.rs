//! Error taxonomy shared by every operation in the crate.
//!
//! There are only two kinds of failure:
//!
//! - [`Error::InvalidArgument`]: the caller supplied a parameter outside the
//!   operation's domain (zero modulus, zero chunk size, malformed hex, ...).
//! - [`Error::Overflow`]: the inputs are well formed but the result, or an
//!   intermediate product, cannot be represented in the integer width in use.
//!
//! Both are local to the failing call. No operation returns a partial result.

use thiserror::Error;

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by modular exponentiation, chunking and key setup.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A parameter lies outside the operation's domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A value does not fit the fixed-width integer representation.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),
}
