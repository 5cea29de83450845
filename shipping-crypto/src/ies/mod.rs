//! Sealed shipping packages.
//!
//! This module combines P-256 ECDH key encapsulation with AES-256-GCM to seal a shipping payload
//! to a shipper's static public key. Each package carries its own nonce, ephemeral public key and
//! masked payload key, so the shipper needs nothing but its secret key to open it. The API is
//! [`SealingKey`], [`UnsealingKey`], [`EncryptedPackage`] and [`IesError`], plus the
//! [`encrypt_for_recipient`] / [`decrypt_as_recipient`] shorthands.
//!
//! # Examples
//!
//! ```
//! use shipping_crypto::{
//!     ecdh::RecipientSecretKey,
//!     ies::{SealingKey, UnsealingKey},
//! };
//!
//! let secret_key = RecipientSecretKey::new().unwrap();
//! let sealing_key = SealingKey::new(secret_key.public_key());
//! let unsealing_key = UnsealingKey::new(secret_key);
//!
//! let blob = sealing_key.encrypt_for_recipient(b"hello shipper").unwrap();
//! let opened = unsealing_key.decrypt_as_recipient(&blob).unwrap();
//!
//! assert_eq!(opened.as_slice(), b"hello shipper");
//! ```

use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};

use crate::ecdh::{RecipientPublicKey, RecipientSecretKey};

mod crypto_box;
mod error;
mod keys;
pub mod package;

#[cfg(test)]
mod tests;


pub use error::IesError;
pub use keys::{SealingKey, UnsealingKey};
pub use package::EncryptedPackage;

// SHORTHANDS
// ================================================================================================

/// Seals `plaintext` to `recipient` with the default mask and returns the packed blob.
#[cfg(feature = "std")]
pub fn encrypt_for_recipient(
    plaintext: &[u8],
    recipient: &RecipientPublicKey,
) -> Result<Vec<u8>, IesError> {
    encrypt_for_recipient_with_rng(&mut crate::rand::OsRng, plaintext, recipient)
}

pub fn encrypt_for_recipient_with_rng<R: CryptoRng + RngCore>(
    rng: &mut R,
    plaintext: &[u8],
    recipient: &RecipientPublicKey,
) -> Result<Vec<u8>, IesError> {
    SealingKey::new(recipient.clone()).encrypt_for_recipient_with_rng(rng, plaintext)
}

/// Opens a blob sealed with the default mask.
pub fn decrypt_as_recipient(
    blob: &[u8],
    recipient: &RecipientSecretKey,
) -> Result<Vec<u8>, IesError> {
    let package = package::unpack(blob)?;
    crypto_box::unseal(&Default::default(), recipient, package)
}
