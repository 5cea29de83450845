#[cfg(feature = "serde")]
use alloc::string::String;

use thiserror::Error;

use crate::{
    aead::EncryptionError, ecdh::KeyAgreementError, rand::EntropyError, utils::HexParseError,
};

/// Error type for sealing and opening shipping packages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IesError {
    #[error("random number generator failed to provide entropy")]
    EntropyFailure,
    #[error("key is malformed or not a point on the P-256 curve")]
    KeyFormat,
    #[error("package failed authentication")]
    AuthenticationFailure,
    #[error("package of {len} bytes is shorter than its fixed-length fields")]
    MalformedPackage { len: usize },
    #[error("mask of {mask_len} bytes cannot cover a key of {key_len} bytes")]
    MaskLengthMismatch { key_len: usize, mask_len: usize },
    #[error("failed to derive the key mask from the shared secret")]
    MaskDerivationFailed,
    #[error("encryption failed")]
    EncryptionFailed,
    #[error("invalid hex package: {0}")]
    InvalidHex(#[from] HexParseError),
    #[cfg(feature = "serde")]
    #[error("invalid shipping record: {0}")]
    InvalidRecord(String),
    #[cfg(feature = "serde")]
    #[error("invalid shipper configuration: {0}")]
    InvalidConfig(String),
}

impl IesError {
    /// Returns true if this error means a received package could not be opened.
    pub fn is_decryption_failure(&self) -> bool {
        matches!(
            self,
            IesError::AuthenticationFailure
                | IesError::MalformedPackage { .. }
                | IesError::InvalidHex(_)
        )
    }
}

impl From<EntropyError> for IesError {
    fn from(_: EntropyError) -> Self {
        IesError::EntropyFailure
    }
}

impl From<EncryptionError> for IesError {
    fn from(err: EncryptionError) -> Self {
        match err {
            EncryptionError::AuthenticationFailure => IesError::AuthenticationFailure,
            EncryptionError::Entropy(_) => IesError::EntropyFailure,
            EncryptionError::EncryptionFailed | EncryptionError::InvalidLength { .. } => {
                IesError::EncryptionFailed
            },
        }
    }
}

impl From<KeyAgreementError> for IesError {
    fn from(err: KeyAgreementError) -> Self {
        match err {
            KeyAgreementError::InvalidPublicKey
            | KeyAgreementError::InvalidSecretKey
            | KeyAgreementError::KeyEncodingFailed => IesError::KeyFormat,
            KeyAgreementError::MaskLengthMismatch { key_len, mask_len } => {
                IesError::MaskLengthMismatch { key_len, mask_len }
            },
            KeyAgreementError::MaskDerivationFailed => IesError::MaskDerivationFailed,
            KeyAgreementError::Entropy(_) => IesError::EntropyFailure,
        }
    }
}
