#![no_main]

use fuzzysum::hash_bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<u8>| {
    let sig = hash_bytes(data.clone());

    // Verify: length bounds hold for every input
    assert!(sig.long_hash().len() <= 63);
    assert!(sig.short_hash().len() <= 31);

    // Verify: block size is always 3 * 2^k
    assert!(sig.block_size() >= 3);
    assert_eq!(sig.block_size() % 3, 0);
    assert!((sig.block_size() / 3).is_power_of_two());

    // Verify: the wire format stays three colon-delimited fields
    let rendered = sig.to_string();
    assert_eq!(rendered.matches(':').count(), 2);

    // Verify: determinism - same input produces the same signature
    assert_eq!(sig, hash_bytes(data));
});
