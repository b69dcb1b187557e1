//! Fuzz target: `Threshold::add_value`
//!
//! The first 9 bytes pick the two bounds and the initial state; the rest
//! is a stream of little-endian `i32` samples.  Asserts that the bounds
//! stay ordered, that the returned state always agrees with `state()`,
//! and that only samples outside the band can flip it.
//!
//! cargo fuzz run fuzz_add_value

#![no_main]

use libfuzzer_sys::fuzz_target;
use threshold::Threshold;

fn word(b: &[u8]) -> i32 {
    i32::from_le_bytes([b[0], b[1], b[2], b[3]])
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 9 {
        return;
    }
    let (head, stream) = data.split_at(9);
    let mut t = Threshold::with_band_and_state(word(&head[0..4]), word(&head[4..8]), head[8] & 1 == 1);
    let (fall, rise) = (t.fall_threshold(), t.rise_threshold());
    assert!(fall <= rise, "bounds must be normalised");

    for chunk in stream.chunks_exact(4) {
        let v = word(chunk);
        let before = t.state();
        let after = t.add_value(v);
        assert_eq!(after, t.state());

        if after != before {
            if after {
                assert!(v > rise, "rose on {v} with rise {rise}");
            } else {
                assert!(v < fall, "fell on {v} with fall {fall}");
            }
        }
    }
});
