use core::{fmt, str::FromStr};

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroizing;

use super::{KeyAgreementError, PUBLIC_KEY_SPKI_BYTES, SHARED_SECRET_BYTES, SharedSecret};

/// HKDF `info` prefix for the hardened mask; the ephemeral SPKI bytes follow it.
const HKDF_MASK_INFO: &[u8] = b"shipping-crypto/mask/v1";

/// How the XOR mask for the payload key is obtained from the ECDH shared secret.
///
/// Both ends must use the same mode. The package layout is identical for every mode, so a
/// mismatch shows up only as an authentication failure when opening the package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MaskDerivation {
    /// The raw 32-byte shared secret is the mask. Byte-compatible with deployed shippers.
    #[default]
    Raw,
    /// The mask is `HKDF-SHA256(ikm = shared secret, info = prefix || ephemeral SPKI)`.
    HkdfSha256,
}

impl MaskDerivation {
    pub const fn name(self) -> &'static str {
        match self {
            MaskDerivation::Raw => "raw",
            MaskDerivation::HkdfSha256 => "hkdf-sha256",
        }
    }

    /// Derives the mask material for a shared secret agreed with `ephemeral_spki`.
    pub(crate) fn derive(
        self,
        shared_secret: &SharedSecret,
        ephemeral_spki: &[u8; PUBLIC_KEY_SPKI_BYTES],
    ) -> Result<Zeroizing<[u8; SHARED_SECRET_BYTES]>, KeyAgreementError> {
        let mut mask = Zeroizing::new([0u8; SHARED_SECRET_BYTES]);
        match self {
            MaskDerivation::Raw => {
                let raw = shared_secret.raw_secret_bytes();
                if raw.len() != SHARED_SECRET_BYTES {
                    return Err(KeyAgreementError::MaskLengthMismatch {
                        key_len: SHARED_SECRET_BYTES,
                        mask_len: raw.len(),
                    });
                }
                mask.copy_from_slice(raw);
            },
            MaskDerivation::HkdfSha256 => {
                let hkdf = Hkdf::<Sha256>::new(None, shared_secret.raw_secret_bytes());
                let info = [HKDF_MASK_INFO, ephemeral_spki.as_slice()];
                hkdf.expand_multi_info(&info, &mut mask[..])
                    .map_err(|_| KeyAgreementError::MaskDerivationFailed)?;
            },
        }
        Ok(mask)
    }
}

impl fmt::Display for MaskDerivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MaskDerivation {
    type Err = UnknownMaskDerivation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(MaskDerivation::Raw),
            "hkdf-sha256" => Ok(MaskDerivation::HkdfSha256),
            _ => Err(UnknownMaskDerivation),
        }
    }
}

/// Returned when parsing a [`MaskDerivation`] name that is neither `raw` nor `hkdf-sha256`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown mask derivation (expected `raw` or `hkdf-sha256`)")]
pub struct UnknownMaskDerivation;
