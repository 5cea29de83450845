use alloc::{string::String, vec::Vec};

use rand::{CryptoRng, RngCore};

use super::{
    IesError, crypto_box,
    package::{EncryptedPackage, unpack},
};
#[cfg(feature = "serde")]
use crate::record::ShippingRecord;
use crate::{
    ecdh::{KeyEncapsulator, MaskDerivation, RecipientPublicKey, RecipientSecretKey},
    utils::{bytes_to_hex_string, hex_to_bytes},
};

// SEALING KEY
// ================================================================================================

/// Seals shipping data to a shipper's public key.
///
/// A sealing key holds no secrets and no per-call state, so a single instance can be shared
/// across threads and used for any number of packages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SealingKey {
    recipient: RecipientPublicKey,
    encapsulator: KeyEncapsulator,
}

impl SealingKey {
    /// Creates a sealing key using the wire-compatible [`MaskDerivation::Raw`] mask.
    pub fn new(recipient: RecipientPublicKey) -> Self {
        Self::with_mask_derivation(recipient, MaskDerivation::Raw)
    }

    pub fn with_mask_derivation(
        recipient: RecipientPublicKey,
        mask_derivation: MaskDerivation,
    ) -> Self {
        Self {
            recipient,
            encapsulator: KeyEncapsulator::new(mask_derivation),
        }
    }

    /// Decodes a PEM `SubjectPublicKeyInfo` into a sealing key with the default mask.
    pub fn from_public_key_pem(pem: &str) -> Result<Self, IesError> {
        Ok(Self::new(RecipientPublicKey::from_public_key_pem(pem)?))
    }

    pub fn recipient(&self) -> &RecipientPublicKey {
        &self.recipient
    }

    pub fn mask_derivation(&self) -> MaskDerivation {
        self.encapsulator.mask_derivation()
    }

    /// Seals `plaintext` using the operating system's CSPRNG.
    #[cfg(feature = "std")]
    pub fn seal(&self, plaintext: &[u8]) -> Result<EncryptedPackage, IesError> {
        self.seal_with_rng(&mut crate::rand::OsRng, plaintext)
    }

    /// Seals `plaintext` drawing the payload key, nonce and ephemeral key from `rng`.
    pub fn seal_with_rng<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
    ) -> Result<EncryptedPackage, IesError> {
        crypto_box::seal(rng, &self.encapsulator, &self.recipient, plaintext)
    }

    /// Seals `plaintext` and returns the packed blob.
    #[cfg(feature = "std")]
    pub fn encrypt_for_recipient(&self, plaintext: &[u8]) -> Result<Vec<u8>, IesError> {
        self.seal(plaintext).map(|package| package.pack())
    }

    pub fn encrypt_for_recipient_with_rng<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
    ) -> Result<Vec<u8>, IesError> {
        self.seal_with_rng(rng, plaintext).map(|package| package.pack())
    }

    /// Seals `plaintext` and returns the packed blob as a `0x`-prefixed transaction argument.
    #[cfg(feature = "std")]
    pub fn encrypt_to_hex(&self, plaintext: &[u8]) -> Result<String, IesError> {
        self.encrypt_for_recipient(plaintext).map(|blob| bytes_to_hex_string(&blob))
    }

    pub fn encrypt_to_hex_with_rng<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
    ) -> Result<String, IesError> {
        self.encrypt_for_recipient_with_rng(rng, plaintext)
            .map(|blob| bytes_to_hex_string(&blob))
    }

    /// Serializes `record` to JSON and seals it.
    #[cfg(all(feature = "serde", feature = "std"))]
    pub fn seal_record(&self, record: &ShippingRecord) -> Result<EncryptedPackage, IesError> {
        self.seal_record_with_rng(&mut crate::rand::OsRng, record)
    }

    #[cfg(feature = "serde")]
    pub fn seal_record_with_rng<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        record: &ShippingRecord,
    ) -> Result<EncryptedPackage, IesError> {
        let json = record.to_json()?;
        self.seal_with_rng(rng, json.as_bytes())
    }
}

// UNSEALING KEY
// ================================================================================================

/// Opens shipping packages sealed to the matching [`SealingKey`].
#[derive(Debug, Clone)]
pub struct UnsealingKey {
    secret: RecipientSecretKey,
    encapsulator: KeyEncapsulator,
}

impl UnsealingKey {
    pub fn new(secret: RecipientSecretKey) -> Self {
        Self::with_mask_derivation(secret, MaskDerivation::Raw)
    }

    pub fn with_mask_derivation(
        secret: RecipientSecretKey,
        mask_derivation: MaskDerivation,
    ) -> Self {
        Self {
            secret,
            encapsulator: KeyEncapsulator::new(mask_derivation),
        }
    }

    /// Decodes a PEM PKCS#8 private key into an unsealing key with the default mask.
    pub fn from_pkcs8_pem(pem: &str) -> Result<Self, IesError> {
        Ok(Self::new(RecipientSecretKey::from_pkcs8_pem(pem)?))
    }

    pub fn mask_derivation(&self) -> MaskDerivation {
        self.encapsulator.mask_derivation()
    }

    pub fn public_key(&self) -> RecipientPublicKey {
        self.secret.public_key()
    }

    /// Returns the sealing key that produces packages this key can open.
    pub fn sealing_key(&self) -> SealingKey {
        SealingKey::with_mask_derivation(self.public_key(), self.mask_derivation())
    }

    /// Opens a parsed package.
    pub fn unseal(&self, package: &EncryptedPackage) -> Result<Vec<u8>, IesError> {
        crypto_box::unseal(&self.encapsulator, &self.secret, package.as_raw())
    }

    /// Opens a packed blob.
    ///
    /// # Errors
    /// - [`IesError::MalformedPackage`] if the blob is too short to hold the fixed fields.
    /// - [`IesError::KeyFormat`] if the embedded ephemeral key is not a valid P-256 point.
    /// - [`IesError::AuthenticationFailure`] on any other corruption, a wrong key, or a mask
    ///   derivation mismatch.
    pub fn decrypt_as_recipient(&self, blob: &[u8]) -> Result<Vec<u8>, IesError> {
        crypto_box::unseal(&self.encapsulator, &self.secret, unpack(blob)?)
    }

    /// Opens a `0x`-prefixed hex transaction argument.
    pub fn decrypt_hex(&self, value: &str) -> Result<Vec<u8>, IesError> {
        self.decrypt_as_recipient(&hex_to_bytes(value)?)
    }

    /// Opens a packed blob and parses the plaintext as a JSON shipping record.
    #[cfg(feature = "serde")]
    pub fn unseal_record(&self, blob: &[u8]) -> Result<ShippingRecord, IesError> {
        let plaintext = self.decrypt_as_recipient(blob)?;
        ShippingRecord::from_json(&plaintext)
    }
}
