//! Modular exponentiation.
//!
//! - [`core`](self::core)
//!   The square-and-multiply loop, exposed as [`modpow`] for `u64` and as
//!   [`modpow_in`] for any supported width.
//!
//! - [`width`]
//!   The [`ModularWord`] trait, which tells the loop how to multiply two
//!   residues of a given width without overflowing, and which moduli that
//!   width can accept.

pub mod core;
pub mod width;

pub use self::core::{modpow, modpow_in};
pub use width::ModularWord;
