//! Runtime configuration for the sealing side.

use alloc::string::String;
#[cfg(feature = "serde")]
use alloc::string::ToString;

use crate::{
    ecdh::{MaskDerivation, RecipientPublicKey},
    ies::{IesError, SealingKey},
};

/// Everything a storefront needs to seal packages for one shipper.
///
/// The public key is kept as provisioned (PEM text) and only decoded by
/// [`ShipperConfig::sealing_key`], so a configuration can be loaded before it is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipperConfig {
    /// PEM `SubjectPublicKeyInfo` of the shipper's static P-256 key
    pub recipient_public_key_pem: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mask_derivation: MaskDerivation,
}

impl ShipperConfig {
    pub fn new(recipient_public_key_pem: impl Into<String>) -> Self {
        Self {
            recipient_public_key_pem: recipient_public_key_pem.into(),
            mask_derivation: MaskDerivation::default(),
        }
    }

    pub fn with_mask_derivation(mut self, mask_derivation: MaskDerivation) -> Self {
        self.mask_derivation = mask_derivation;
        self
    }

    /// Parses a configuration from JSON such as
    /// `{"recipient_public_key_pem": "-----BEGIN PUBLIC KEY-----...", "mask_derivation": "raw"}`.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, IesError> {
        serde_json::from_str(json).map_err(|err| IesError::InvalidConfig(err.to_string()))
    }

    /// Decodes the public key into a ready-to-use [`SealingKey`].
    ///
    /// # Errors
    /// Returns [`IesError::KeyFormat`] if the PEM text is not a P-256 public key.
    pub fn sealing_key(&self) -> Result<SealingKey, IesError> {
        let recipient = RecipientPublicKey::from_public_key_pem(&self.recipient_public_key_pem)?;
        Ok(SealingKey::with_mask_derivation(recipient, self.mask_derivation))
    }
}
