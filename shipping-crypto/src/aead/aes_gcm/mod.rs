//! AES-256-GCM payload encryption.
//!
//! A [`SecretKey`] is generated fresh for every shipping payload and used for exactly one
//! encryption, so a random 96-bit [`Nonce`] can never repeat under the same key.

use alloc::vec::Vec;
use core::fmt;

use aes_gcm::{
    Aes256Gcm,
    aead::{Aead, KeyInit},
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::EncryptionError;
use crate::rand::{EntropyError, random_array};


// CONSTANTS
// ================================================================================================

/// Size of an AES-256 key in bytes.
pub const SECRET_KEY_BYTES: usize = 32;

/// Size of a GCM nonce in bytes.
pub const NONCE_BYTES: usize = 12;

/// Size of the GCM authentication tag appended to every ciphertext.
pub const TAG_BYTES: usize = 16;

// NONCE
// ================================================================================================

/// A 96-bit nonce
///
/// Note: This should be drawn randomly from a CSPRNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Nonce([u8; NONCE_BYTES]);

impl Nonce {
    /// Creates a new random nonce using the provided random number generator
    pub fn with_rng<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, EntropyError> {
        random_array(rng).map(Self)
    }

    /// Creates a nonce from raw bytes
    pub const fn from_bytes(bytes: [u8; NONCE_BYTES]) -> Self {
        Self(bytes)
    }

    /// Creates a nonce from a byte slice, which must be exactly [`NONCE_BYTES`] long
    pub fn from_slice(bytes: &[u8]) -> Result<Self, EncryptionError> {
        let bytes = bytes.try_into().map_err(|_| EncryptionError::InvalidLength {
            expected: NONCE_BYTES,
            actual: bytes.len(),
        })?;
        Ok(Self(bytes))
    }

    pub const fn as_bytes(&self) -> &[u8; NONCE_BYTES] {
        &self.0
    }
}

// SECRET KEY
// ================================================================================================

/// A single-use 256-bit AES-GCM key.
///
/// The key is wiped from memory on drop and deliberately does not implement `Clone`.
#[derive(PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; SECRET_KEY_BYTES]);

impl SecretKey {
    /// Creates a new random secret key using the operating system's CSPRNG
    #[cfg(feature = "std")]
    pub fn new() -> Result<Self, EntropyError> {
        Self::with_rng(&mut crate::rand::OsRng)
    }

    /// Creates a new random secret key using the provided random number generator
    pub fn with_rng<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self, EntropyError> {
        random_array(rng).map(Self)
    }

    /// Creates a secret key from raw bytes
    pub const fn from_bytes(bytes: [u8; SECRET_KEY_BYTES]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; SECRET_KEY_BYTES] {
        &self.0
    }

    /// Encrypts `data` under this key with a fresh nonce drawn from the OS CSPRNG
    #[cfg(feature = "std")]
    pub fn encrypt_bytes(&self, data: &[u8]) -> Result<EncryptedData, EncryptionError> {
        self.encrypt_bytes_with_rng(&mut crate::rand::OsRng, data)
    }

    /// Encrypts `data` under this key with a fresh nonce drawn from `rng`
    pub fn encrypt_bytes_with_rng<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        data: &[u8],
    ) -> Result<EncryptedData, EncryptionError> {
        let nonce = Nonce::with_rng(rng)?;
        self.encrypt_bytes_with_nonce(data, nonce)
    }

    /// Encrypts `data` under this key and the given nonce
    ///
    /// The caller is responsible for never reusing `nonce` with this key.
    pub fn encrypt_bytes_with_nonce(
        &self,
        data: &[u8],
        nonce: Nonce,
    ) -> Result<EncryptedData, EncryptionError> {
        let cipher = Aes256Gcm::new(&self.0.into());

        let ciphertext = cipher
            .encrypt(aes_gcm::Nonce::from_slice(nonce.as_bytes()), data)
            .map_err(|_| EncryptionError::EncryptionFailed)?;

        Ok(EncryptedData { nonce, ciphertext })
    }

    /// Decrypts `ciphertext` (with its appended tag) under this key and `nonce`
    ///
    /// No plaintext is returned unless the tag verifies.
    pub fn decrypt_bytes(
        &self,
        ciphertext: &[u8],
        nonce: &Nonce,
    ) -> Result<Vec<u8>, EncryptionError> {
        let cipher = Aes256Gcm::new(&self.0.into());

        cipher
            .decrypt(aes_gcm::Nonce::from_slice(nonce.as_bytes()), ciphertext)
            .map_err(|_| EncryptionError::AuthenticationFailure)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(<redacted>)")
    }
}

// ENCRYPTED DATA
// ================================================================================================

/// Output of a single AES-256-GCM encryption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedData {
    /// The nonce used for this encryption
    pub nonce: Nonce,
    /// The ciphertext with the authentication tag appended
    pub ciphertext: Vec<u8>,
}

impl EncryptedData {
    /// Decrypts this data under `key`
    pub fn decrypt(&self, key: &SecretKey) -> Result<Vec<u8>, EncryptionError> {
        key.decrypt_bytes(&self.ciphertext, &self.nonce)
    }
}
