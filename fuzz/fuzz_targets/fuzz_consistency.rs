#![no_main]
use libfuzzer_sys::fuzz_target;
use zentga::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 22),
        ..Default::default()
    };
    let Ok(frame) = decode_with_limits(data, &limits) else {
        return;
    };

    // A successful decode implies the header-only path agrees with it
    let mut reader = data;
    let config = decode_config(&mut reader).expect("header decoded once already");
    assert_eq!(data.len() - reader.len(), HEADER_LEN, "config read past header");
    assert_eq!(u32::from(config.width), frame.width());
    assert_eq!(u32::from(config.height), frame.height());
    assert_eq!(frame.pixels().len(), frame.width() as usize * frame.height() as usize);

    let info = ImageInfo::from_bytes(data).expect("header decoded once already");
    assert!(info.is_decodable());
});
