#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Headers can claim up to 65535x65535; cap the raster so the fuzzer
    // explores parsing instead of allocation.
    let limits = zentga::Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };

    // Must never panic
    let _ = zentga::decode_with_limits(data, &limits);
    let _ = zentga::decode_config(data);
    let _ = zentga::ImageInfo::from_bytes(data);
});
