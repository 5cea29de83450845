//! Entropy plumbing shared by key, nonce and ephemeral key generation.
//!
//! Every random value in this crate is drawn through [`fill_random`], which uses the fallible
//! [`RngCore::try_fill_bytes`] so that an exhausted or broken generator surfaces as an
//! [`EntropyError`] instead of a panic. There is no fallback source.

use rand::{CryptoRng, RngCore};
use thiserror::Error;

#[cfg(feature = "std")]
pub use rand::rngs::OsRng;

// CONSTANTS
// ================================================================================================

/// Upper bound on rejection-sampling rounds before a generator is considered broken.
///
/// A healthy CSPRNG produces an out-of-range P-256 scalar with probability below 2^-32, so
/// hitting this limit means the generator is returning degenerate output.
pub(crate) const MAX_REJECTION_ROUNDS: usize = 64;

// ERRORS
// ================================================================================================

/// The random number generator could not provide the requested entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("random number generator failed to provide entropy")]
pub struct EntropyError;

// HELPERS
// ================================================================================================

/// Fills `dest` with bytes from `rng`, failing instead of panicking if the generator errors.
pub fn fill_random<R: CryptoRng + RngCore + ?Sized>(
    rng: &mut R,
    dest: &mut [u8],
) -> Result<(), EntropyError> {
    rng.try_fill_bytes(dest).map_err(|_| EntropyError)
}

/// Returns an array of `N` random bytes drawn from `rng`.
pub fn random_array<R: CryptoRng + RngCore + ?Sized, const N: usize>(
    rng: &mut R,
) -> Result<[u8; N], EntropyError> {
    let mut bytes = [0u8; N];
    fill_random(rng, &mut bytes)?;
    Ok(bytes)
}

// TEST UTILITIES
// ================================================================================================
