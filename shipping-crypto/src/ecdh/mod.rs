//! ECDH (Elliptic Curve Diffie-Hellman) key agreement over NIST P-256, and the key encapsulation
//! built on top of it.
//!
//! Note that the intended use is a one-way, sender initiated key agreement. The sender knows the
//! (static) public key of the shipper, generates an ephemeral key pair per message, and uses the
//! resulting shared secret to mask the single-use payload key. The ephemeral public key and the
//! masked key travel alongside the encrypted payload.
//!
//! Masking is a plain XOR and carries no integrity of its own: a corrupted ephemeral key or masked
//! key unmasks to a wrong payload key, which the AEAD tag of the payload then rejects.

use thiserror::Error;

use crate::rand::EntropyError;

mod encapsulation;
pub use encapsulation::{Encapsulation, KeyEncapsulator, MaskedKey};

mod keys;
pub use keys::{
    EphemeralPublicKey, EphemeralSecretKey, RecipientPublicKey, RecipientSecretKey, SharedSecret,
};

mod mask;
pub use mask::{MaskDerivation, UnknownMaskDerivation};


// CONSTANTS
// ================================================================================================

/// Length of a P-256 public key encoded as DER `SubjectPublicKeyInfo` with an uncompressed point.
pub const PUBLIC_KEY_SPKI_BYTES: usize = 91;

/// Length of the raw ECDH shared secret (the affine x-coordinate of the shared point).
pub const SHARED_SECRET_BYTES: usize = 32;

/// Length of a masked payload key.
pub const MASKED_KEY_BYTES: usize = crate::aead::aes_gcm::SECRET_KEY_BYTES;

// ERRORS
// ================================================================================================

/// Errors raised while agreeing on, or masking with, a shared secret.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyAgreementError {
    #[error("public key is not a valid P-256 SubjectPublicKeyInfo")]
    InvalidPublicKey,
    #[error("secret key is not a valid P-256 scalar")]
    InvalidSecretKey,
    #[error("failed to encode key")]
    KeyEncodingFailed,
    #[error("mask of {mask_len} bytes cannot cover a key of {key_len} bytes")]
    MaskLengthMismatch { key_len: usize, mask_len: usize },
    #[error("failed to derive the key mask from the shared secret")]
    MaskDerivationFailed,
    #[error(transparent)]
    Entropy(#[from] EntropyError),
}
