#![allow(dead_code)]

use imgmanifest::manifest::{Image, Manifest, PartialImage};
use proptest::prelude::*;
use proptest::strategy::BoxedStrategy;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// One manifest record, before rendering.
#[derive(Clone, Debug, PartialEq)]
pub enum Entry {
    Full(Image),
    Partial(PartialImage),
}

/// Field text that never needs quoting and never starts a comment.
pub fn plain_field_strategy() -> BoxedStrategy<String> {
    "[a-zA-Z0-9_ ./-]{0,16}".boxed()
}

/// Field text that exercises quoting, comment leaders and line breaks.
pub fn awkward_field_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        plain_field_strategy(),
        "[a-z ,;\"\r\n.-]{0,8}",
        "[äöü日本語 ,;.]{0,8}",
    ]
    .boxed()
}

pub fn arb_image(field: BoxedStrategy<String>) -> BoxedStrategy<Image> {
    (field.clone(), field)
        .prop_map(|(name, path)| Image::new(name, path))
        .boxed()
}

pub fn arb_partial_image(field: BoxedStrategy<String>) -> BoxedStrategy<PartialImage> {
    (field.clone(), field, any::<[u64; 4]>())
        .prop_map(|(name, path, coords)| PartialImage::new(name, path, coords))
        .boxed()
}

pub fn arb_entry(field: BoxedStrategy<String>) -> BoxedStrategy<Entry> {
    prop_oneof![
        arb_image(field.clone()).prop_map(Entry::Full),
        arb_partial_image(field).prop_map(Entry::Partial),
    ]
    .boxed()
}

pub fn arb_entries(field: BoxedStrategy<String>, max: usize) -> BoxedStrategy<Vec<Entry>> {
    proptest::collection::vec(arb_entry(field), 0..=max).boxed()
}

/// Renders a record the simple way, without any quoting.
pub fn entry_to_csv_record(entry: &Entry) -> String {
    match entry {
        Entry::Full(image) => format!("{},{}\n", image.name, image.path),
        Entry::Partial(p) => format!(
            "{},{},{},{},{},{}\n",
            p.image.name, p.image.path, p.ax, p.ay, p.bx, p.by
        ),
    }
}

/// Splits entries into the manifest the reader is expected to produce.
pub fn expected_manifest(entries: &[Entry]) -> Manifest {
    let mut manifest = Manifest::default();
    for entry in entries {
        match entry {
            Entry::Full(image) => manifest.images.push(image.clone()),
            Entry::Partial(partial) => manifest.partial_images.push(partial.clone()),
        }
    }
    manifest
}

/// A comment line, terminator included.
pub fn comment_line_strategy() -> BoxedStrategy<String> {
    "[a-zA-Z0-9 ,;\".]{0,24}"
        .prop_map(|text| format!(";{}\n", text))
        .boxed()
}

/// A record whose field count is neither 2 nor 6.
pub fn invalid_field_count_record_strategy() -> BoxedStrategy<Vec<String>> {
    prop_oneof![Just(1usize), Just(3), Just(4), Just(5), 7usize..=12]
        .prop_flat_map(|count| proptest::collection::vec("[a-z0-9]{1,6}", count..=count))
        .boxed()
}

/// Text that is not an unsigned decimal integer.
pub fn bad_coordinate_strategy() -> BoxedStrategy<String> {
    prop_oneof![
        Just(String::new()),
        "-[0-9]{1,5}",
        "\\+[0-9]{1,5}",
        "[0-9]{0,3}[a-zA-Z. ][0-9]{0,3}",
        Just("18446744073709551616".to_string()),
    ]
    .boxed()
}
