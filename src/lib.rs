//! Textbook RSA-style modular exponentiation.
//!
//! This crate derives a toy key pair from two fixed primes, splits a message
//! into fixed-size byte chunks, encodes each chunk as an integer, then
//! encrypts and decrypts every chunk with modular exponentiation.
//!
//! It is a teaching tool. The parameters are toy-sized and the scheme
//! offers no security whatsoever.
//!
//! # Module overview
//!
//! - `primitives`
//!   Square-and-multiply modular exponentiation over fixed-width unsigned
//!   integers, with per-width overflow bounds.
//!
//! - `encoding`
//!   Zero padding, fixed-size chunking and big-endian integer mapping of a
//!   message, plus the same operations over hex text.
//!
//! - `rsa`
//!   Toy key derivation and the chunk-wise encryption/decryption pipeline.
//!
//! - `error`
//!   The shared error type: invalid arguments and fixed-width overflow.
//!
//! # Example
//!
//! ```
//! use textbook_rsa::rsa::{KeyParams, ToyKeyPair, run};
//!
//! let keys = ToyKeyPair::derive(&KeyParams::default()).unwrap();
//! let transcript = run(b"OHAI", 1, &keys).unwrap();
//!
//! assert_eq!(transcript.plaintext, vec![79, 72, 65, 73, 0]);
//! assert!(transcript.round_trips());
//! ```

pub mod encoding;
pub mod error;
pub mod primitives;
pub mod rsa;

pub use error::{Error, Result};
