use super::*;

#[test]
fn png_is_opaque_and_decodable() {
    let frame = FrameRGBA {
        width: 3,
        height: 2,
        data: [[255u8, 255, 255, 255], [0, 0, 0, 0]]
            .iter()
            .cycle()
            .take(6)
            .flatten()
            .copied()
            .collect(),
        premultiplied: true,
    };
    let bytes = encode_png(&frame, Rgb8::new(0x11, 0x15, 0x29)).unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (3, 2));
    assert_eq!(decoded.get_pixel(0, 0).0, [255, 255, 255, 255]);
    assert_eq!(decoded.get_pixel(1, 0).0, [0x11, 0x15, 0x29, 255]);
}
