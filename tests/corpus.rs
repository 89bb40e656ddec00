//! Test corpus: raw and run-length encodings of the same patterns across
//! sizes, depths and scan orders must decode to identical frames.

use std::io::{BufReader, Cursor};

use zentga::*;

fn checkerboard(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    for y in 0..h {
        for x in 0..w {
            let off = (y * w + x) * bpp;
            if (x + y) % 2 == 0 {
                for c in 0..bpp {
                    pixels[off + c] = 150 + (c as u8 * 20);
                }
            } else {
                for c in 0..bpp {
                    pixels[off + c] = 10 + (c as u8 * 30);
                }
            }
        }
    }
    pixels
}

fn noise_pattern(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    let mut state: u32 = 0xDEAD_BEEF;
    for p in pixels.iter_mut() {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        *p = state as u8;
    }
    pixels
}

/// Horizontal bands of solid color: long runs that cross scanlines.
fn bands(w: usize, h: usize, bpp: usize) -> Vec<u8> {
    let mut pixels = vec![0u8; w * h * bpp];
    for (i, px) in pixels.chunks_exact_mut(bpp).enumerate() {
        let band = (i / (w * 3 / 2 + 1)) as u8;
        px.fill(band.wrapping_mul(37));
    }
    pixels
}

fn header(datatype: u8, w: u16, h: u16, bpp: u8, descriptor: u8) -> Vec<u8> {
    let mut out = vec![0u8; HEADER_LEN];
    out[2] = datatype;
    out[12..14].copy_from_slice(&w.to_le_bytes());
    out[14..16].copy_from_slice(&h.to_le_bytes());
    out[16] = bpp;
    out[17] = descriptor;
    out
}

/// Packs a flat pixel stream into run and literal packets of at most 128
/// pixels, ignoring scanline boundaries.
fn rle_encode(stream: &[u8], bpp: usize) -> Vec<u8> {
    let px: Vec<&[u8]> = stream.chunks_exact(bpp).collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < px.len() {
        let mut run = 1;
        while i + run < px.len() && run < 128 && px[i + run] == px[i] {
            run += 1;
        }
        if run > 1 {
            out.push(0x80 | (run - 1) as u8);
            out.extend_from_slice(px[i]);
            i += run;
        } else {
            let start = i;
            i += 1;
            while i < px.len() && i - start < 128 && !(i + 1 < px.len() && px[i] == px[i + 1]) {
                i += 1;
            }
            out.push((i - start - 1) as u8);
            for p in &px[start..i] {
                out.extend_from_slice(p);
            }
        }
    }
    out
}

/// Expected top-left-origin RGBA bytes for a BGR(A) stream in stream order.
fn expected_rgba(stream: &[u8], w: usize, h: usize, bpp: usize, top_down: bool) -> Vec<u8> {
    let mut rows: Vec<Vec<u8>> = stream
        .chunks_exact((w * bpp).max(1))
        .take(h)
        .map(|row| {
            row.chunks_exact(bpp)
                .flat_map(|p| [p[2], p[1], p[0], if bpp == 4 { p[3] } else { 255 }])
                .collect()
        })
        .collect();
    if !top_down {
        rows.reverse();
    }
    rows.concat()
}

fn check_pattern(name: &str, stream: &[u8], w: usize, h: usize, bpp: usize) {
    for top_down in [false, true] {
        let descriptor = if top_down { 0x20 } else { 0x00 };
        let expected = expected_rgba(stream, w, h, bpp, top_down);

        let mut raw = header(2, w as u16, h as u16, (bpp * 8) as u8, descriptor);
        raw.extend_from_slice(stream);
        let from_raw = decode(&raw[..]).unwrap();
        assert_eq!(from_raw.to_rgba_bytes(), expected, "{name} raw top_down={top_down}");

        let mut rle = header(10, w as u16, h as u16, (bpp * 8) as u8, descriptor);
        rle.extend_from_slice(&rle_encode(stream, bpp));
        let from_rle = decode(&rle[..]).unwrap();
        assert_eq!(from_rle, from_raw, "{name} rle top_down={top_down}");
    }
}

// ── Pattern corpus ───────────────────────────────────────────────────

#[test]
fn checkerboard_24_and_32() {
    for bpp in [3, 4] {
        check_pattern("checkerboard", &checkerboard(8, 6, bpp), 8, 6, bpp);
    }
}

#[test]
fn noise_24_and_32() {
    for bpp in [3, 4] {
        check_pattern("noise", &noise_pattern(17, 13, bpp), 17, 13, bpp);
    }
}

#[test]
fn bands_cross_scanlines() {
    for bpp in [3, 4] {
        check_pattern("bands", &bands(10, 9, bpp), 10, 9, bpp);
    }
}

#[test]
fn solid_image_uses_max_runs() {
    let stream = vec![0x42u8; 300 * 3];
    let encoded = rle_encode(&stream, 3);
    // 128 + 128 + 44
    assert_eq!(encoded.len(), 3 * 4);
    check_pattern("solid", &stream, 30, 10, 3);
}

#[test]
fn odd_sizes() {
    for (w, h) in [(1, 1), (1, 7), (7, 1), (3, 5), (129, 2), (1000, 1), (1, 300)] {
        check_pattern("noise", &noise_pattern(w, h, 4), w, h, 4);
        check_pattern("bands", &bands(w, h, 3), w, h, 3);
    }
}

#[test]
fn grayscale_expands_to_rgb() {
    let (w, h) = (9, 4);
    let gray = noise_pattern(w, h, 1);
    let mut data = header(3, w as u16, h as u16, 8, 0x20);
    data.extend_from_slice(&gray);
    let frame = decode(&data[..]).unwrap();
    let expected: Vec<u8> = gray.iter().flat_map(|&g| [g, g, g, 255]).collect();
    assert_eq!(frame.to_rgba_bytes(), expected);
}

#[test]
fn grayscale_type_with_color_depth_reads_bgr() {
    let stream = noise_pattern(4, 3, 3);
    let mut data = header(3, 4, 3, 24, 0x00);
    data.extend_from_slice(&stream);
    let frame = decode(&data[..]).unwrap();
    assert_eq!(frame.to_rgba_bytes(), expected_rgba(&stream, 4, 3, 3, false));
}

#[test]
fn buffered_reader_source() {
    let stream = noise_pattern(33, 21, 4);
    let mut data = header(10, 33, 21, 32, 0x08);
    data.extend_from_slice(&rle_encode(&stream, 4));
    let frame = decode(BufReader::with_capacity(7, Cursor::new(&data))).unwrap();
    assert_eq!(frame.to_rgba_bytes(), expected_rgba(&stream, 33, 21, 4, false));
}

// ── Limits ───────────────────────────────────────────────────────────

fn sample(w: u16, h: u16) -> Vec<u8> {
    let mut data = header(2, w, h, 24, 0);
    data.extend_from_slice(&noise_pattern(usize::from(w), usize::from(h), 3));
    data
}

#[test]
fn limits_allow_exact_fit() {
    let limits = Limits {
        max_width: Some(16),
        max_height: Some(8),
        max_pixels: Some(128),
        max_memory_bytes: Some(512),
    };
    let frame = decode_with_limits(&sample(16, 8)[..], &limits).unwrap();
    assert_eq!((frame.width(), frame.height()), (16, 8));
}

#[test]
fn limits_reject_each_bound() {
    let data = sample(16, 8);
    let cases = [
        Limits {
            max_width: Some(15),
            ..Default::default()
        },
        Limits {
            max_height: Some(7),
            ..Default::default()
        },
        Limits {
            max_pixels: Some(127),
            ..Default::default()
        },
        Limits {
            max_memory_bytes: Some(511),
            ..Default::default()
        },
    ];
    for limits in &cases {
        let err = decode_with_limits(&data[..], limits).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::LimitExceeded, "{limits:?}");
    }
}

#[test]
fn limits_checked_before_pixels_are_read() {
    // Header claims a huge image but carries no pixel data; the limit
    // must fire instead of a truncation error.
    let data = header(2, 60000, 60000, 32, 0);
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    let err = decode_with_limits(&data[..], &limits).unwrap_err();
    assert!(matches!(err, TgaError::LimitExceeded(_)), "{err:?}");
}

// ── Malformed input never panics ─────────────────────────────────────

#[test]
fn every_truncation_is_an_error() {
    let stream = noise_pattern(5, 4, 4);
    let mut raw = header(2, 5, 4, 32, 0x20);
    raw.extend_from_slice(&stream);
    let mut rle = header(10, 5, 4, 32, 0x00);
    rle.extend_from_slice(&rle_encode(&bands(5, 4, 4), 4));

    for data in [&raw, &rle] {
        assert!(decode(&data[..]).is_ok());
        for len in 0..data.len() {
            let err = decode(&data[..len]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Format, "len {len}");
        }
    }
}

#[test]
fn garbage_never_panics() {
    let noise = noise_pattern(64, 64, 1);
    let limits = Limits {
        max_pixels: Some(1 << 16),
        ..Default::default()
    };
    for start in 0..64 {
        let chunk = &noise[start * 17..];
        let _ = decode_with_limits(chunk, &limits);
        let _ = decode_config(chunk);
        let _ = ImageInfo::from_bytes(chunk);
    }
}
