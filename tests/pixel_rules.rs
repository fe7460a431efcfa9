//! Per-pixel conversion rules, checked through the public word API.

use tilepx::{argb_to_rgba_words, unpremultiply_argb};

fn convert_one(word: u32) -> [u8; 4] {
    let mut buf = [word];
    argb_to_rgba_words(&mut buf);
    buf[0].to_ne_bytes()
}

#[test]
fn transparent_pixel_is_zeroed() {
    for rgb in [0x00_0000u32, 0x00_0001, 0x7F_7F7F, 0xFF_FFFF] {
        let mut buf = [rgb];
        argb_to_rgba_words(&mut buf);
        assert_eq!(buf[0], 0, "rgb={rgb:06x}");
    }
}

#[test]
fn opaque_pixel_keeps_color() {
    for rgb in [0x00_0000u32, 0x80_4020, 0x01_0203, 0xFF_FFFF] {
        let [r, g, b] = [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8];
        assert_eq!(convert_one(0xFF00_0000 | rgb), [r, g, b, 255]);
    }
}

#[test]
fn partial_alpha_floors_each_channel() {
    for a in 1..255u32 {
        for c in (0..=a).step_by(7) {
            let word = (a << 24) | (c << 16) | ((a - c) << 8) | (c / 2);
            let expected = [
                (255 * c / a) as u8,
                (255 * (a - c) / a) as u8,
                (255 * (c / 2) / a) as u8,
                a as u8,
            ];
            assert_eq!(convert_one(word), expected, "a={a} c={c}");
        }
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(convert_one(0x8080_4020), [255, 127, 63, 128]);
    assert_eq!(convert_one(0x00FF_FFFF), [0, 0, 0, 0]);
    assert_eq!(convert_one(0xFF80_4020), [0x80, 0x40, 0x20, 0xFF]);
}

#[test]
fn batch_converts_elementwise() {
    let input = [0x0011_2233u32, 0xFF01_0203, 0x8080_4020];
    let mut buf = input;
    argb_to_rgba_words(&mut buf);
    for (out, word) in buf.iter().zip(input) {
        assert_eq!(out.to_ne_bytes(), unpremultiply_argb(word));
    }
    assert_eq!(buf[0].to_ne_bytes(), [0, 0, 0, 0]);
    assert_eq!(buf[1].to_ne_bytes(), [1, 2, 3, 255]);
    assert_eq!(buf[2].to_ne_bytes(), [255, 127, 63, 128]);
}

#[test]
fn size_error_messages() {
    let err = tilepx::argb_to_rgba_inplace(&mut [0; 3]).unwrap_err();
    assert_eq!(err, tilepx::SizeError::NotPixelAligned);
    assert_eq!(
        err.to_string(),
        "buffer is empty or not a whole number of pixels"
    );
    let err: Box<dyn std::error::Error> = Box::new(tilepx::SizeError::InvalidStride);
    assert_eq!(err.to_string(), "width, height and stride do not fit the buffer");
}
