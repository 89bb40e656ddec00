#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn header(datatype: u8, w: u16, h: u16, bpp: u8, descriptor: u8) -> Vec<u8> {
    let mut out = vec![0u8; 18];
    out[2] = datatype;
    out[12..14].copy_from_slice(&w.to_le_bytes());
    out[14..16].copy_from_slice(&h.to_le_bytes());
    out[16] = bpp;
    out[17] = descriptor;
    out
}

fn main() {
    use std::fs;
    for target in ["fuzz_decode", "fuzz_consistency"] {
        let dir = format!("fuzz/corpus/{target}");
        fs::create_dir_all(&dir).unwrap();

        // Raw BGRA 2x2, top-down
        let mut raw32 = header(2, 2, 2, 32, 0x28);
        raw32.extend_from_slice(&[10, 20, 30, 255, 40, 50, 60, 255, 70, 80, 90, 255, 100, 110, 120, 255]);
        fs::write(format!("{dir}/raw_bgra_2x2.tga"), raw32).unwrap();

        // Raw BGR 3x1, bottom-up
        let mut raw24 = header(2, 3, 1, 24, 0x00);
        raw24.extend_from_slice(&[0, 0, 255, 0, 255, 0, 255, 0, 0]);
        fs::write(format!("{dir}/raw_bgr_3x1.tga"), raw24).unwrap();

        // Gray 2x2
        let mut gray = header(3, 2, 2, 8, 0x20);
        gray.extend_from_slice(&[0x00, 0x40, 0x80, 0xff]);
        fs::write(format!("{dir}/gray_2x2.tga"), gray).unwrap();

        // RLE 4x3: literal, run across rows, literal
        let mut rle = header(10, 4, 3, 24, 0x20);
        rle.extend_from_slice(&[0x02, 1, 1, 1, 2, 2, 2, 3, 3, 3]);
        rle.extend_from_slice(&[0x85, 10, 20, 30]);
        rle.extend_from_slice(&[0x02, 4, 4, 4, 5, 5, 5, 6, 6, 6]);
        fs::write(format!("{dir}/rle_4x3.tga"), rle).unwrap();

        // Image id and color map ahead of the pixels
        let mut preamble = header(2, 1, 1, 24, 0x20);
        preamble[0] = 3;
        preamble[1] = 1;
        preamble[5..7].copy_from_slice(&2u16.to_le_bytes());
        preamble[7] = 24;
        preamble.extend_from_slice(b"id!");
        preamble.extend_from_slice(&[0; 6]);
        preamble.extend_from_slice(&[1, 2, 3]);
        fs::write(format!("{dir}/id_and_cmap_1x1.tga"), preamble).unwrap();

        // Truncated/malformed seeds for edge coverage
        fs::write(format!("{dir}/empty.bin"), b"").unwrap();
        fs::write(format!("{dir}/short_header.bin"), &header(2, 1, 1, 24, 0)[..10]).unwrap();
        fs::write(format!("{dir}/rle_overrun.bin"), {
            let mut v = header(10, 2, 1, 24, 0);
            v.extend_from_slice(&[0x84, 1, 2, 3]);
            v
        })
        .unwrap();
        fs::write(format!("{dir}/right_to_left.bin"), header(2, 1, 1, 24, 0x10)).unwrap();

        println!("Generated seed corpus in {dir}/");
    }
}
