use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::{
    EphemeralPublicKey, EphemeralSecretKey, KeyAgreementError, MASKED_KEY_BYTES, MaskDerivation,
    PUBLIC_KEY_SPKI_BYTES, RecipientPublicKey, RecipientSecretKey,
};
use crate::aead::aes_gcm::SecretKey;

// MASKED KEY
// ================================================================================================

/// A payload key XOR'd with the mask derived from an ECDH shared secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskedKey([u8; MASKED_KEY_BYTES]);

impl MaskedKey {
    pub const fn from_bytes(bytes: [u8; MASKED_KEY_BYTES]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; MASKED_KEY_BYTES] {
        &self.0
    }
}

/// Output of [`KeyEncapsulator::encapsulate`]: everything the recipient needs to recover the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encapsulation {
    /// DER `SubjectPublicKeyInfo` of the ephemeral public key (always 91 bytes)
    pub ephemeral_public_key: [u8; PUBLIC_KEY_SPKI_BYTES],
    /// The masked payload key (always 32 bytes)
    pub masked_key: MaskedKey,
}

// KEY ENCAPSULATOR
// ================================================================================================

/// Transports a single-use payload key to the shipper by masking it with an ephemeral-static
/// ECDH shared secret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyEncapsulator {
    mask_derivation: MaskDerivation,
}

impl KeyEncapsulator {
    pub const fn new(mask_derivation: MaskDerivation) -> Self {
        Self { mask_derivation }
    }

    pub const fn mask_derivation(&self) -> MaskDerivation {
        self.mask_derivation
    }

    /// Masks `key` for `recipient` under a freshly generated ephemeral key pair.
    ///
    /// The ephemeral secret key is dropped (and wiped) before this returns.
    pub fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        key: &SecretKey,
        recipient: &RecipientPublicKey,
    ) -> Result<Encapsulation, KeyAgreementError> {
        let ephemeral_secret = EphemeralSecretKey::with_rng(rng)?;
        let ephemeral_public_key = ephemeral_secret.ephemeral_public_key().to_spki_der()?;

        let shared_secret = ephemeral_secret.diffie_hellman(recipient);
        let mask = self.mask_derivation.derive(&shared_secret, &ephemeral_public_key)?;
        let masked_key = MaskedKey(xor_mask(key.as_bytes(), &mask[..])?);

        Ok(Encapsulation { ephemeral_public_key, masked_key })
    }

    /// Recovers the payload key masked against the ephemeral key `ephemeral_public_key`.
    ///
    /// Fails only if the ephemeral key does not decode to a point on the curve. Any other
    /// corruption yields a wrong key without error.
    pub fn decapsulate(
        &self,
        ephemeral_public_key: &[u8; PUBLIC_KEY_SPKI_BYTES],
        masked_key: &MaskedKey,
        recipient: &RecipientSecretKey,
    ) -> Result<SecretKey, KeyAgreementError> {
        let ephemeral = EphemeralPublicKey::from_spki_der(ephemeral_public_key)?;

        let shared_secret = recipient.diffie_hellman(&ephemeral);
        let mask = self.mask_derivation.derive(&shared_secret, ephemeral_public_key)?;
        let key = Zeroizing::new(xor_mask(masked_key.as_bytes(), &mask[..])?);

        Ok(SecretKey::from_bytes(*key))
    }
}

// HELPERS
// ================================================================================================

/// XORs `key` with the leading `key.len()` bytes of `mask_material`.
///
/// Both the key and the mask prefix must be exactly [`MASKED_KEY_BYTES`] long; nothing is ever
/// truncated or padded.
pub(crate) fn xor_mask(
    key: &[u8],
    mask_material: &[u8],
) -> Result<[u8; MASKED_KEY_BYTES], KeyAgreementError> {
    let mismatch = KeyAgreementError::MaskLengthMismatch {
        key_len: key.len(),
        mask_len: mask_material.len(),
    };
    if key.len() != MASKED_KEY_BYTES {
        return Err(mismatch);
    }
    let mask = mask_material.get(..key.len()).ok_or(mismatch)?;

    let mut masked = [0u8; MASKED_KEY_BYTES];
    for ((out, k), m) in masked.iter_mut().zip(key).zip(mask) {
        *out = k ^ m;
    }
    Ok(masked)
}
