use super::*;
use crate::{curve::params::Rotation, oscillate::param::Oscillation};

fn quality() -> QualityConfig {
    QualityConfig::default()
}

#[test]
fn length_sums_segments() {
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        Point::new(3.0, 10.0),
    ];
    assert_eq!(path_length(&pts), 11.0);
    assert_eq!(path_length(&pts[..1]), 0.0);
    assert_eq!(path_length(&[]), 0.0);
}

#[test]
fn path_data_is_move_then_lines() {
    let pts = [
        Point::new(0.0, -0.0),
        Point::new(1.5, 2.25),
        Point::new(-3.1234, 10.0),
    ];
    assert_eq!(svg_path_data(&pts), "M 0 0 L 1.5 2.25 L -3.123 10");
    assert_eq!(svg_path_data(&[]), "");
}

#[test]
fn view_box_pads_bounds() {
    let curve = CurvePath::from_points(vec![Point::new(-10.0, 0.0), Point::new(30.0, 5.0)], 20.0);
    assert_eq!(curve.bounds, Rect::new(-10.0, 0.0, 30.0, 5.0));
    assert_eq!(curve.view_box, Rect::new(-30.0, -20.0, 50.0, 25.0));
    assert_eq!(curve.view_box_attr(), "-30 -20 80 45");
}

#[test]
fn build_curve_simplifies_and_measures() {
    let params = CurveParams {
        rotation: Rotation::Deg0,
        ..CurveParams::default()
    };
    let curve = build_curve(&params, &ParamOscillations::default(), &quality());
    let raw = crate::curve::sampler::sample(&params, params.kind, 720);

    assert!(curve.points.len() < raw.len());
    assert_eq!(curve.points.first(), raw.first());
    assert_eq!(curve.points.last(), raw.last());
    // Simplification shortens the polyline only marginally.
    let raw_len = path_length(&raw);
    assert!(curve.length <= raw_len + 1e-9);
    assert!(curve.length > raw_len * 0.99);
    assert!((curve.bounds.x1 - 156.0).abs() < 1e-6);
}

#[test]
fn build_curve_tolerates_garbage_params() {
    let params = CurveParams {
        ring_radius: f64::NAN,
        wheel_radius: 0.0,
        pen_offset: f64::NEG_INFINITY,
        sides: 0,
        ..CurveParams::default()
    };
    let curve = build_curve(&params, &ParamOscillations::default(), &quality());
    assert!(!curve.is_empty());
    assert!(curve.length.is_finite());
    assert!(curve.points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn oscillation_changes_the_curve() {
    let params = CurveParams::default();
    let plain = build_curve(&params, &ParamOscillations::default(), &quality());
    let oscs = ParamOscillations {
        pen_offset: Oscillation {
            enabled: true,
            ..ParamOscillations::default().pen_offset
        },
        ..ParamOscillations::default()
    };
    let modulated = build_curve(&params, &oscs, &quality());
    assert_ne!(plain.points, modulated.points);
    assert!(modulated.length.is_finite());
}

#[test]
fn polyline_mirrors_points() {
    let pts = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
    let path = polyline(&pts);
    assert_eq!(path.elements().len(), 3);
    assert!(polyline(&[]).elements().is_empty());
}
