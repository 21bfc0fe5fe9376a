// File:    symbol_source.rs
// Author:  apezoo
// Date:    2025-07-17
//
// Description: Provides the pad alphabet and cryptographically secure symbol sampling.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::error::{PadError, PadResult};
use rand::{rngs::OsRng, TryRngCore};

/// The ordered alphabet of symbols eligible for pad output: the uppercase
/// Latin letters followed by the decimal digits.
pub const ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

// The byte range below this bound holds a whole number of alphabet copies.
// Bytes at or above it are redrawn so every symbol keeps probability 1/36.
const REJECTION_LIMIT: u8 = u8::MAX - (u8::MAX % ALPHABET.len() as u8);

/// A supplier of single pad symbols.
///
/// The production implementation is [`OsSymbolSource`]. Tests substitute a
/// deterministic implementation so that composition can be verified without
/// real entropy.
pub trait SymbolSource {
    /// Draws one symbol, uniformly distributed over [`ALPHABET`].
    ///
    /// # Errors
    ///
    /// Returns [`PadError::Generation`] if the underlying entropy source
    /// cannot supply random data.
    fn sample(&mut self) -> PadResult<char>;
}

/// A [`SymbolSource`] backed by the operating system's secure random
/// generator.
///
/// The handle is stateless; every draw goes straight to the operating
/// system, so simultaneous requests cannot observe correlated or repeated
/// output. A seeded pseudo-random generator is never used as a substitute.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSymbolSource;

impl SymbolSource for OsSymbolSource {
    fn sample(&mut self) -> PadResult<char> {
        let mut rng = OsRng;
        let mut byte = [0u8; 1];
        loop {
            // Use the failable `try_fill_bytes`; an entropy failure is fatal
            // for the whole request.
            rng.try_fill_bytes(&mut byte)
                .map_err(|e| PadError::Generation(e.to_string()))?;
            if byte[0] < REJECTION_LIMIT {
                return Ok(char::from(ALPHABET[usize::from(byte[0]) % ALPHABET.len()]));
            }
        }
    }
}
