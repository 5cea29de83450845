//! AEAD (authenticated encryption with associated data) schemes.
//!
//! Shipping payloads are encrypted with AES-256-GCM under a single-use key; see [`aes_gcm`].

use thiserror::Error;

use crate::rand::EntropyError;

pub mod aes_gcm;

// ERROR TYPES
// ================================================================================================

/// Errors that can occur during encryption/decryption operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncryptionError {
    /// Authentication tag verification failed: the ciphertext, nonce or key is wrong
    #[error("authentication tag verification failed")]
    AuthenticationFailure,
    /// The cipher refused to encrypt the input (e.g. the plaintext exceeds the GCM length limit)
    #[error("encryption failed")]
    EncryptionFailed,
    /// A key or nonce was built from a byte slice of the wrong length
    #[error("expected {expected} bytes, found {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// The nonce could not be drawn from the random number generator
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
