#![no_main]

use std::io::Cursor;

use fuzzysum::{DigestConfig, FuzzyHasher};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<u8>, u8)| {
    let (data, buffer_hint) = input;

    // Odd read-buffer sizes exercise every buffer-crossing path.
    let buffer_size = usize::from(buffer_hint).max(1);
    let hasher = FuzzyHasher::new(DigestConfig::new(buffer_size).unwrap());

    let streamed = hasher.digest_reader(Cursor::new(data.clone())).unwrap();

    // Verify: the streaming pipeline agrees with the batch pipeline
    // regardless of buffer size
    assert_eq!(streamed, hasher.digest_bytes(data));
});
