//! Chunk-wise encryption and decryption.
//!
//! Both passes are an order-preserving map of [`modpow`] over an integer
//! chunk sequence. With the `parallel` feature the map runs on the rayon
//! thread pool. Output order still matches chunk order.

use crate::encoding::chunk_and_encode;
use crate::error::Result;
use crate::primitives::modpow;
use crate::rsa::keys::{PrivateKey, PublicKey, ToyKeyPair};
use tracing::{debug, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The three integer sequences produced by one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    /// Integer chunks of the padded message.
    pub plaintext: Vec<u64>,
    /// `plaintext[i]^e mod n`.
    pub encrypted: Vec<u64>,
    /// `encrypted[i]^d mod n`.
    pub decrypted: Vec<u64>,
}

impl Transcript {
    /// Whether every chunk came back unchanged.
    pub fn round_trips(&self) -> bool {
        self.plaintext == self.decrypted
    }

    /// Number of chunks whose decryption differs from the plaintext.
    pub fn mismatches(&self) -> usize {
        self.plaintext
            .iter()
            .zip(&self.decrypted)
            .filter(|(p, d)| p != d)
            .count()
    }
}

/// Encrypts every chunk value with the public key.
pub fn encrypt_chunks(values: &[u64], key: &PublicKey) -> Result<Vec<u64>> {
    apply(values, key.exponent, key.modulus)
}

/// Decrypts every chunk value with the private key.
pub fn decrypt_chunks(values: &[u64], key: &PrivateKey) -> Result<Vec<u64>> {
    apply(values, key.exponent, key.modulus)
}

/// Chunks `message`, then encrypts and decrypts every chunk with `keys`.
///
/// Chunk values at or above the modulus are reduced by the exponentiation
/// and cannot round-trip. This happens when `256^chunk_size` exceeds the
/// modulus.
pub fn run(message: &[u8], chunk_size: usize, keys: &ToyKeyPair) -> Result<Transcript> {
    let plaintext = chunk_and_encode(message, chunk_size)?;
    debug!(chunks = plaintext.len(), chunk_size, "encoded message");

    let encrypted = encrypt_chunks(&plaintext, &keys.public_key())?;
    let decrypted = decrypt_chunks(&encrypted, &keys.private_key())?;

    let transcript = Transcript {
        plaintext,
        encrypted,
        decrypted,
    };

    if !transcript.round_trips() {
        warn!(
            mismatched = transcript.mismatches(),
            total = transcript.plaintext.len(),
            "decryption did not recover every chunk"
        );
    }

    Ok(transcript)
}

#[cfg(not(feature = "parallel"))]
fn apply(values: &[u64], exponent: u64, modulus: u64) -> Result<Vec<u64>> {
    values
        .iter()
        .map(|&v| modpow(v, exponent, modulus))
        .collect()
}

#[cfg(feature = "parallel")]
fn apply(values: &[u64], exponent: u64, modulus: u64) -> Result<Vec<u64>> {
    values
        .par_iter()
        .map(|&v| modpow(v, exponent, modulus))
        .collect()
}
