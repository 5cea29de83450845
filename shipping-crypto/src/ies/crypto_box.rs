//! Seal and open orchestration: key generation, payload encryption, key encapsulation.
//!
//! Every seal draws a fresh payload key, nonce and ephemeral key pair. Nothing is retried: the
//! first failure is returned to the caller.

use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};

use super::{
    IesError,
    package::{EncryptedPackage, RawPackage},
};
use crate::{
    aead::aes_gcm::{EncryptedData, Nonce, SecretKey},
    ecdh::{Encapsulation, KeyEncapsulator, MaskedKey, RecipientPublicKey, RecipientSecretKey},
};

pub(crate) fn seal<R: CryptoRng + RngCore>(
    rng: &mut R,
    encapsulator: &KeyEncapsulator,
    recipient: &RecipientPublicKey,
    plaintext: &[u8],
) -> Result<EncryptedPackage, IesError> {
    let payload_key = SecretKey::with_rng(rng)?;
    let EncryptedData { nonce, ciphertext } = payload_key.encrypt_bytes_with_rng(rng, plaintext)?;
    let Encapsulation { ephemeral_public_key, masked_key } =
        encapsulator.encapsulate(rng, &payload_key, recipient)?;

    debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        mask = encapsulator.mask_derivation().name(),
        "sealed shipping package"
    );

    Ok(EncryptedPackage {
        nonce,
        ciphertext,
        ephemeral_public_key,
        masked_key,
    })
}

pub(crate) fn unseal(
    encapsulator: &KeyEncapsulator,
    recipient: &RecipientSecretKey,
    package: RawPackage<'_>,
) -> Result<Vec<u8>, IesError> {
    let mask = encapsulator.mask_derivation().name();

    let payload_key = encapsulator
        .decapsulate(
            package.ephemeral_public_key,
            &MaskedKey::from_bytes(*package.masked_key),
            recipient,
        )
        .map_err(|err| {
            warn!(mask, error = %err, "could not recover the payload key");
            IesError::from(err)
        })?;

    let plaintext = payload_key
        .decrypt_bytes(package.ciphertext, &Nonce::from_bytes(*package.nonce))
        .map_err(|err| {
            warn!(ciphertext_len = package.ciphertext.len(), mask, "package failed authentication");
            IesError::from(err)
        })?;

    debug!(plaintext_len = plaintext.len(), mask, "opened shipping package");
    Ok(plaintext)
}
