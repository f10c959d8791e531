//! Fuzz target for the COCO JSON loader.
//!
//! Throws arbitrary bytes at `from_coco_slice` to shake out panics in
//! the serde path (the loader is the only part of the pipeline that
//! consumes untrusted input).
//!
//! Run with:
//!   cargo +nightly fuzz run coco_json_parse

#![no_main]

use coco2yolo::coco::from_coco_slice;
use libfuzzer_sys::fuzz_target;

// Inputs larger than any plausible annotation file are skipped to keep
// the fuzzer from spending its budget on OOM territory.
const MAX_INPUT_LEN: usize = 10 * 1024 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_LEN {
        return;
    }

    // Parse errors are expected and fine; panics are not.
    let _ = from_coco_slice(data);
});
