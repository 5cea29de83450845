#![no_std]

//! Hybrid encryption of shipping data for a single designated shipper.
//!
//! A buyer's shipping record is encrypted under a fresh AES-256-GCM key, and that key is
//! transported to the shipper by masking it with an ephemeral-static P-256 ECDH shared secret.
//! The result is one self-contained byte package that only the holder of the shipper's secret
//! key can open. See [`ies`] for the entry points.

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod aead;
pub mod config;
pub mod ecdh;
pub mod ies;
pub mod rand;
#[cfg(feature = "serde")]
pub mod record;
pub mod utils;

// RE-EXPORTS
// ================================================================================================

pub use config::ShipperConfig;
pub use ecdh::{MaskDerivation, RecipientPublicKey, RecipientSecretKey};
#[cfg(feature = "std")]
pub use ies::encrypt_for_recipient;
pub use ies::{EncryptedPackage, IesError, SealingKey, UnsealingKey, decrypt_as_recipient};
#[cfg(feature = "serde")]
pub use record::{Address, Recipient, ShippingRecord};
