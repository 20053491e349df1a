use super::*;

#[test]
fn rotation_snaps_to_quarter_turns() {
    assert_eq!(Rotation::from_degrees(0.0), Rotation::Deg0);
    assert_eq!(Rotation::from_degrees(89.0), Rotation::Deg90);
    assert_eq!(Rotation::from_degrees(180.0), Rotation::Deg180);
    assert_eq!(Rotation::from_degrees(-90.0), Rotation::Deg270);
    assert_eq!(Rotation::from_degrees(450.0), Rotation::Deg90);
    assert_eq!(Rotation::from_degrees(f64::NAN), Rotation::Deg0);
}

#[test]
fn sanitize_coerces_non_finite_and_out_of_range() {
    let p = CurveParams {
        ring_radius: f64::NAN,
        wheel_radius: -4.0,
        pen_offset: f64::INFINITY,
        sides: 0,
        arcness: -3.0,
        completion: 250.0,
        ..CurveParams::default()
    }
    .sanitized();

    let d = CurveParams::default();
    assert_eq!(p.ring_radius, d.ring_radius);
    assert_eq!(p.wheel_radius, MIN_RADIUS);
    assert_eq!(p.pen_offset, d.pen_offset);
    assert_eq!(p.sides, 1);
    assert_eq!(p.arcness, MIN_ARCNESS);
    assert_eq!(p.completion, 100.0);
}

#[test]
fn sanitize_keeps_valid_values() {
    let p = CurveParams {
        ring_radius: 150.0,
        wheel_radius: 25.0,
        pen_offset: 0.0,
        sides: -5,
        completion: 40.0,
        ..CurveParams::default()
    };
    assert_eq!(p.sanitized(), p);
}

#[test]
fn serde_uses_short_radius_names_and_curve_aliases() {
    let json = r#"{"R": 100, "r": 33, "d": 60, "curveType": "epitrochoid", "rotation": 180}"#;
    let p: CurveParams = serde_json::from_str(json).unwrap();
    assert_eq!(p.ring_radius, 100.0);
    assert_eq!(p.wheel_radius, 33.0);
    assert_eq!(p.pen_offset, 60.0);
    assert_eq!(p.kind, CurveKind::Outer);
    assert_eq!(p.rotation, Rotation::Deg180);
    assert_eq!(p.sides, 1);

    let back = serde_json::to_value(p).unwrap();
    assert_eq!(back["rotation"], 180);
    assert_eq!(back["curveType"], "outer");
}

#[test]
fn degenerate_inner_curve_is_flagged() {
    let p = CurveParams {
        ring_radius: 50.0,
        wheel_radius: 50.0,
        ..CurveParams::default()
    };
    assert!(p.is_degenerate());
    assert!(
        !CurveParams {
            kind: CurveKind::Outer,
            ..p
        }
        .is_degenerate()
    );
}
