//! Message encoding.
//!
//! Turns message bytes into the integer sequence the modular exponentiation
//! passes operate on, and back.
//!
//! - [`chunk`]
//!   Zero padding, fixed-size chunking, big-endian integer mapping and its
//!   inverse.
//!
//! - [`hex`]
//!   The same chunking expressed over hex text.

pub mod chunk;
pub mod hex;

pub use chunk::{
    DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, PaddedMessage, chunk_and_encode, decode_chunks, pad, unpad,
};
pub use self::hex::{chunk_hex, chunk_value, to_hex};
