//! Hexadecimal view of a message.
//!
//! Messages can also be handled as lowercase hex text, two digits per byte.
//! Chunking a hex string follows the same padding rule as
//! [`pad`](super::chunk::pad): one `"00"` pair per padding byte, including
//! a full extra chunk when the byte length is already a multiple of the
//! chunk size.

use crate::encoding::chunk::{MAX_CHUNK_SIZE, be_value, pad};
use crate::error::{Error, Result};

/// Encodes bytes as lowercase hex, two digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Splits a hex-encoded message into padded hex chunks of
/// `2 * chunk_size` digits each.
///
/// Parsing each chunk in base 16 yields the same values as
/// [`chunk_and_encode`](super::chunk::chunk_and_encode) on the decoded bytes.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `hex_message` has an odd number of digits,
///   contains a non-hex character, or `chunk_size` is zero.
/// - [`Error::Overflow`] if `chunk_size` exceeds [`MAX_CHUNK_SIZE`].
pub fn chunk_hex(hex_message: &str, chunk_size: usize) -> Result<Vec<String>> {
    let bytes = hex::decode(hex_message)
        .map_err(|_| Error::InvalidArgument("message is not valid hex"))?;

    let padded = pad(&bytes, chunk_size)?;

    Ok(padded.chunks().map(hex::encode).collect())
}

/// Parses one hex chunk as a big-endian integer.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `hex_chunk` is empty, has an odd number
///   of digits, or contains anything other than hex digits.
/// - [`Error::Overflow`] if it encodes more than [`MAX_CHUNK_SIZE`] bytes.
pub fn chunk_value(hex_chunk: &str) -> Result<u64> {
    if hex_chunk.is_empty() {
        return Err(Error::InvalidArgument("empty hex chunk"));
    }

    if hex_chunk.len() > 2 * MAX_CHUNK_SIZE {
        return Err(Error::Overflow("hex chunk exceeds u64 width"));
    }

    let bytes =
        hex::decode(hex_chunk).map_err(|_| Error::InvalidArgument("chunk is not valid hex"))?;

    Ok(be_value(&bytes))
}
