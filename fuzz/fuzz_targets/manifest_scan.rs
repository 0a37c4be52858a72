//! Fuzz target for the manifest quoting scan.
//!
//! Feeds arbitrary bytes to the scan that runs ahead of CSV tokenization.

#![no_main]

use imgmanifest::manifest::io_manifest_csv::fuzz_scan_records;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = fuzz_scan_records(data);
});
