//! Message chunking and integer encoding.
//!
//! A message is zero-padded on the right to a multiple of `chunk_size`, split
//! into consecutive `chunk_size`-byte groups, and each group is read as a
//! big-endian unsigned integer.
//!
//! ## Padding rule
//!
//! ```text
//! pad_len = chunk_size - (message_len % chunk_size)
//! ```
//!
//! When the message length is already a multiple of `chunk_size` this still
//! appends a full chunk of zeros. Every padded message therefore ends in at
//! least one zero byte, and an empty message becomes a single zero chunk.
//!
//! ## Width
//!
//! Chunk values are carried as `u64`, which bounds `chunk_size` to 8 bytes.

use crate::error::{Error, Result};
use std::slice::ChunksExact;

/// Chunk size used when the caller does not choose one.
pub const DEFAULT_CHUNK_SIZE: usize = 1;

/// Widest chunk whose big-endian value fits in a `u64`.
pub const MAX_CHUNK_SIZE: usize = std::mem::size_of::<u64>();

/// A message with its zero padding applied.
///
/// The padded length is always a non-zero multiple of [`chunk_size`].
///
/// [`chunk_size`]: PaddedMessage::chunk_size
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedMessage {
    bytes: Vec<u8>,
    chunk_size: usize,
    pad_len: usize,
}

impl PaddedMessage {
    /// The padded bytes: the original message followed by the padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of zero bytes appended to the original message.
    pub fn pad_len(&self) -> usize {
        self.pad_len
    }

    pub fn chunk_count(&self) -> usize {
        self.bytes.len() / self.chunk_size
    }

    /// Iterates over the chunks in message order.
    ///
    /// Every chunk is exactly [`chunk_size`](Self::chunk_size) bytes long.
    pub fn chunks(&self) -> ChunksExact<'_, u8> {
        self.bytes.chunks_exact(self.chunk_size)
    }

    /// Reads every chunk as a big-endian integer, preserving chunk order.
    pub fn to_integers(&self) -> Vec<u64> {
        self.chunks().map(be_value).collect()
    }
}

/// Pads `message` so its length becomes a multiple of `chunk_size`.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `chunk_size` is zero.
/// - [`Error::Overflow`] if `chunk_size` exceeds [`MAX_CHUNK_SIZE`].
pub fn pad(message: &[u8], chunk_size: usize) -> Result<PaddedMessage> {
    check_chunk_size(chunk_size)?;

    let pad_len = chunk_size - (message.len() % chunk_size);

    let mut bytes = Vec::with_capacity(message.len() + pad_len);
    bytes.extend_from_slice(message);
    bytes.resize(message.len() + pad_len, 0);

    Ok(PaddedMessage {
        bytes,
        chunk_size,
        pad_len,
    })
}

/// Pads and chunks `message`, mapping every chunk to its big-endian value.
///
/// Each returned value satisfies `value < 256^chunk_size`.
///
/// # Errors
///
/// Same as [`pad`].
///
/// # Example
///
/// ```
/// use textbook_rsa::encoding::chunk_and_encode;
///
/// assert_eq!(chunk_and_encode(b"OH", 1).unwrap(), vec![79, 72, 0]);
/// assert_eq!(chunk_and_encode(b"OHA", 2).unwrap(), vec![0x4F48, 0x4100]);
/// ```
pub fn chunk_and_encode(message: &[u8], chunk_size: usize) -> Result<Vec<u64>> {
    Ok(pad(message, chunk_size)?.to_integers())
}

/// Writes each value back as `chunk_size` big-endian bytes.
///
/// This is the inverse of [`PaddedMessage::to_integers`]: the output still
/// carries the padding. Use [`unpad`] to strip it.
///
/// # Errors
///
/// - [`Error::InvalidArgument`] if `chunk_size` is zero.
/// - [`Error::Overflow`] if `chunk_size` exceeds [`MAX_CHUNK_SIZE`], or if a
///   value does not fit in `chunk_size` bytes.
pub fn decode_chunks(values: &[u64], chunk_size: usize) -> Result<Vec<u8>> {
    check_chunk_size(chunk_size)?;

    let mut out = Vec::with_capacity(values.len() * chunk_size);

    for &value in values {
        let be = value.to_be_bytes();
        let (high, low) = be.split_at(MAX_CHUNK_SIZE - chunk_size);

        if high.iter().any(|&b| b != 0) {
            return Err(Error::Overflow("chunk value wider than chunk size"));
        }

        out.extend_from_slice(low);
    }

    Ok(out)
}

/// Strips trailing zero bytes left by [`pad`].
///
/// Padding is not self-describing, so zero bytes that ended the original
/// message are removed as well.
pub fn unpad(padded: &[u8]) -> &[u8] {
    let end = padded
        .iter()
        .rposition(|&b| b != 0)
        .map_or(0, |last| last + 1);

    &padded[..end]
}

fn check_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(Error::InvalidArgument("chunk size must be at least 1"));
    }

    if chunk_size > MAX_CHUNK_SIZE {
        return Err(Error::Overflow("chunk size exceeds u64 width"));
    }

    Ok(())
}

#[inline]
pub(crate) fn be_value(chunk: &[u8]) -> u64 {
    chunk.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
}
