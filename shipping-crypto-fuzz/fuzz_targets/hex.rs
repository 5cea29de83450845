#![no_main]

use libfuzzer_sys::fuzz_target;
use shipping_crypto::{
    EncryptedPackage,
    utils::{bytes_to_hex_string, hex_to_bytes},
};

fuzz_target!(|data: &[u8]| {
    // Arbitrary text must parse or fail cleanly
    if let Ok(text) = core::str::from_utf8(data) {
        let _ = hex_to_bytes(text);
        let _ = EncryptedPackage::from_hex(text);
    }

    // Rendering then parsing must return the input bytes
    let rendered = bytes_to_hex_string(data);
    assert_eq!(hex_to_bytes(&rendered).expect("rendered hex always parses"), data);
});
