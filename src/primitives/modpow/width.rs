//! Fixed-width words usable as residues of a modulus.
//!
//! Square-and-multiply needs one operation beyond plain integer arithmetic:
//! `(a * b) mod m` for `a, b < m`. The product of two residues needs up to
//! twice the bits of the modulus, so each width states how it obtains that
//! product and which moduli it can therefore accept.
//!
//! | Word   | Multiply strategy          | Largest accepted modulus |
//! |--------|----------------------------|--------------------------|
//! | `u8`   | widen to `u16`             | `u8::MAX`                |
//! | `u16`  | widen to `u32`             | `u16::MAX`               |
//! | `u32`  | widen to `u64`             | `u32::MAX`               |
//! | `u64`  | widen to `u128`            | `u64::MAX`               |
//! | `u128` | native, overflow-checked   | `2^64`                   |
//!
//! `u128` has no native double-width type. With a modulus of at most `2^64`,
//! every residue is below `2^64` and `(m - 1)^2` fits in 128 bits.

use crate::error::{Error, Result};

/// An unsigned integer type that can carry residues through [`modpow_in`].
///
/// [`modpow_in`]: super::core::modpow_in
pub trait ModularWord: Copy + Eq + Ord {
    /// The value zero.
    const ZERO: Self;

    /// The value one.
    const ONE: Self;

    /// Largest modulus for which `(modulus - 1)^2` is computable.
    const MAX_SAFE_MODULUS: Self;

    /// `self mod modulus`. `modulus` must be non-zero.
    fn reduce(self, modulus: Self) -> Self;

    /// `(self * rhs) mod modulus` for residues `self, rhs < modulus`.
    fn mul_mod(self, rhs: Self, modulus: Self) -> Result<Self>;

    /// Whether the lowest bit is set.
    fn is_odd(self) -> bool;

    /// Logical shift right by one bit.
    fn halve(self) -> Self;
}

macro_rules! widening_word {
    ($word:ty, $wide:ty) => {
        impl ModularWord for $word {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX_SAFE_MODULUS: Self = <$word>::MAX;

            #[inline]
            fn reduce(self, modulus: Self) -> Self {
                self % modulus
            }

            #[inline]
            fn mul_mod(self, rhs: Self, modulus: Self) -> Result<Self> {
                let product = self as $wide * rhs as $wide;
                Ok((product % modulus as $wide) as $word)
            }

            #[inline]
            fn is_odd(self) -> bool {
                self & 1 == 1
            }

            #[inline]
            fn halve(self) -> Self {
                self >> 1
            }
        }
    };
}

widening_word!(u8, u16);
widening_word!(u16, u32);
widening_word!(u32, u64);
widening_word!(u64, u128);

impl ModularWord for u128 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MAX_SAFE_MODULUS: Self = 1 << 64;

    #[inline]
    fn reduce(self, modulus: Self) -> Self {
        self % modulus
    }

    #[inline]
    fn mul_mod(self, rhs: Self, modulus: Self) -> Result<Self> {
        self.checked_mul(rhs)
            .map(|product| product % modulus)
            .ok_or(Error::Overflow("u128 residue product exceeds 128 bits"))
    }

    #[inline]
    fn is_odd(self) -> bool {
        self & 1 == 1
    }

    #[inline]
    fn halve(self) -> Self {
        self >> 1
    }
}
