//! Fuzz target for manifest parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the manifest reader,
//! checking for panics, crashes, or hangs. Every input must end in either a
//! manifest or an error.

#![no_main]

use imgmanifest::manifest::io_manifest_csv::from_manifest_slice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    if let Ok(manifest) = from_manifest_slice(data) {
        for warning in &manifest.warnings {
            let _ = warning.to_string();
        }
    }
});
