#![no_main]

use libfuzzer_sys::fuzz_target;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use shipping_crypto::{
    EncryptedPackage, MaskDerivation, RecipientSecretKey, UnsealingKey, ies::package::unpack,
};

fuzz_target!(|data: &[u8]| {
    // Unpacking arbitrary bytes must return Err on short input, never panic
    let raw = unpack(data);
    let owned = EncryptedPackage::unpack(data);
    assert_eq!(raw.is_ok(), owned.is_ok());

    // A packed package must re-pack to the exact input
    if let Ok(package) = owned {
        assert_eq!(package.pack(), data);
    }

    // Opening arbitrary bytes must fail cleanly under either mask derivation
    let secret = RecipientSecretKey::with_rng(&mut ChaCha20Rng::seed_from_u64(0))
        .expect("seeded generator never fails");
    for mask_derivation in [MaskDerivation::Raw, MaskDerivation::HkdfSha256] {
        let unsealing_key = UnsealingKey::with_mask_derivation(secret.clone(), mask_derivation);
        let _ = unsealing_key.decrypt_as_recipient(data);
        let _ = unsealing_key.unseal_record(data);
    }
});
