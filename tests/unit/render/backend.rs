use super::*;

#[test]
fn view_transform_fits_and_centers() {
    // 200x100 box into a 400x400 frame: scale 2, letterboxed vertically.
    let vb = Rect::new(-100.0, -50.0, 100.0, 50.0);
    let t = view_transform(vb, 400, 400);
    let tl = t * Point::new(-100.0, -50.0);
    let br = t * Point::new(100.0, 50.0);
    let c = t * Point::new(0.0, 0.0);
    assert!((tl.x - 0.0).abs() < 1e-9 && (tl.y - 100.0).abs() < 1e-9);
    assert!((br.x - 400.0).abs() < 1e-9 && (br.y - 300.0).abs() < 1e-9);
    assert!((c.x - 200.0).abs() < 1e-9 && (c.y - 200.0).abs() < 1e-9);
}

#[test]
fn degenerate_view_box_centers_origin() {
    let t = view_transform(Rect::new(5.0, 5.0, 5.0, 5.0), 10, 20);
    let p = t * Point::new(5.0, 5.0);
    assert_eq!((p.x, p.y), (5.0, 10.0));
}

#[test]
fn pixel_lookup_is_bounds_checked() {
    let frame = FrameRGBA {
        width: 2,
        height: 1,
        data: vec![1, 2, 3, 4, 5, 6, 7, 8],
        premultiplied: true,
    };
    assert_eq!(frame.pixel(1, 0), Some([5, 6, 7, 8]));
    assert_eq!(frame.pixel(2, 0), None);
    assert_eq!(frame.pixel(0, 1), None);
    assert_eq!(frame.count_pixels_not([1, 2, 3, 4]), 1);
}

#[test]
fn unusable_surface_sizes_are_surface_errors() {
    for settings in [
        RenderSettings::square(0),
        RenderSettings {
            width: 70_000,
            height: 10,
        },
    ] {
        let err = create_backend(BackendKind::Cpu, &settings).err().unwrap();
        assert!(matches!(err, crate::foundation::error::SpiroError::Surface(_)));
    }
    let ok = create_backend(BackendKind::Cpu, &RenderSettings::square(16)).unwrap();
    assert_eq!(ok.size(), (16, 16));
}
