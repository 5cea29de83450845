//! Byte layout of a sealed shipping package.
//!
//! ```text
//! nonce (12) || ciphertext (variable, tag included) || ephemeral SPKI (91) || masked key (32)
//! ```
//!
//! There are no length prefixes or separators. The nonce is anchored at the front and the two
//! key fields at the back, so the ciphertext is whatever lies in between.

use alloc::{string::String, vec::Vec};

use tracing::warn;

use super::IesError;
use crate::{
    aead::aes_gcm::{NONCE_BYTES, Nonce},
    ecdh::{MASKED_KEY_BYTES, MaskedKey, PUBLIC_KEY_SPKI_BYTES},
    utils::{bytes_to_hex_string, hex_to_bytes},
};

// CONSTANTS
// ================================================================================================

/// Length of the fixed fields at the end of a package (ephemeral SPKI and masked key).
pub const TRAILER_BYTES: usize = PUBLIC_KEY_SPKI_BYTES + MASKED_KEY_BYTES;

/// Shortest byte string that [`unpack`] accepts.
pub const MIN_PACKAGE_BYTES: usize = NONCE_BYTES + TRAILER_BYTES;

// RAW PACKAGE
// ================================================================================================

/// The four fields of a package, borrowed from the packed blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawPackage<'a> {
    pub nonce: &'a [u8; NONCE_BYTES],
    pub ciphertext: &'a [u8],
    pub ephemeral_public_key: &'a [u8; PUBLIC_KEY_SPKI_BYTES],
    pub masked_key: &'a [u8; MASKED_KEY_BYTES],
}

/// Concatenates the package fields in wire order.
pub fn pack(
    nonce: &[u8; NONCE_BYTES],
    ciphertext: &[u8],
    ephemeral_public_key: &[u8; PUBLIC_KEY_SPKI_BYTES],
    masked_key: &[u8; MASKED_KEY_BYTES],
) -> Vec<u8> {
    let mut blob = Vec::with_capacity(MIN_PACKAGE_BYTES + ciphertext.len());
    blob.extend_from_slice(nonce);
    blob.extend_from_slice(ciphertext);
    blob.extend_from_slice(ephemeral_public_key);
    blob.extend_from_slice(masked_key);
    blob
}

/// Splits a packed blob into its fields without copying.
///
/// # Errors
/// Returns [`IesError::MalformedPackage`] if `blob` is shorter than [`MIN_PACKAGE_BYTES`].
pub fn unpack(blob: &[u8]) -> Result<RawPackage<'_>, IesError> {
    let malformed = IesError::MalformedPackage { len: blob.len() };
    if blob.len() < MIN_PACKAGE_BYTES {
        warn!(len = blob.len(), "package is shorter than its fixed-length fields");
        return Err(malformed);
    }

    let (nonce, rest) = blob.split_at(NONCE_BYTES);
    let (ciphertext, trailer) = rest.split_at(rest.len() - TRAILER_BYTES);
    let (ephemeral_public_key, masked_key) = trailer.split_at(PUBLIC_KEY_SPKI_BYTES);

    Ok(RawPackage {
        nonce: nonce.try_into().map_err(|_| malformed.clone())?,
        ciphertext,
        ephemeral_public_key: ephemeral_public_key.try_into().map_err(|_| malformed.clone())?,
        masked_key: masked_key.try_into().map_err(|_| malformed)?,
    })
}

// ENCRYPTED PACKAGE
// ================================================================================================

/// An owned, sealed shipping package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPackage {
    pub nonce: Nonce,
    /// AES-256-GCM ciphertext with the 16-byte tag appended
    pub ciphertext: Vec<u8>,
    /// DER `SubjectPublicKeyInfo` of the sender's ephemeral key
    pub ephemeral_public_key: [u8; PUBLIC_KEY_SPKI_BYTES],
    pub masked_key: MaskedKey,
}

impl EncryptedPackage {
    /// Serializes this package into a single contiguous blob.
    pub fn pack(&self) -> Vec<u8> {
        pack(
            self.nonce.as_bytes(),
            &self.ciphertext,
            &self.ephemeral_public_key,
            self.masked_key.as_bytes(),
        )
    }

    /// Parses a blob produced by [`EncryptedPackage::pack`].
    pub fn unpack(blob: &[u8]) -> Result<Self, IesError> {
        unpack(blob).map(Self::from)
    }

    /// Returns the length of the packed form.
    pub fn packed_len(&self) -> usize {
        MIN_PACKAGE_BYTES + self.ciphertext.len()
    }

    /// Returns the packed form as `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        bytes_to_hex_string(&self.pack())
    }

    /// Parses `0x`-prefixed hex (either case) into a package.
    pub fn from_hex(value: &str) -> Result<Self, IesError> {
        Self::unpack(&hex_to_bytes(value)?)
    }

    pub(crate) fn as_raw(&self) -> RawPackage<'_> {
        RawPackage {
            nonce: self.nonce.as_bytes(),
            ciphertext: &self.ciphertext,
            ephemeral_public_key: &self.ephemeral_public_key,
            masked_key: self.masked_key.as_bytes(),
        }
    }
}

impl From<RawPackage<'_>> for EncryptedPackage {
    fn from(raw: RawPackage<'_>) -> Self {
        Self {
            nonce: Nonce::from_bytes(*raw.nonce),
            ciphertext: raw.ciphertext.to_vec(),
            ephemeral_public_key: *raw.ephemeral_public_key,
            masked_key: MaskedKey::from_bytes(*raw.masked_key),
        }
    }
}
