use super::*;
use crate::curve::params::Rotation;

fn flower() -> CurveParams {
    CurveParams {
        ring_radius: 120.0,
        wheel_radius: 48.0,
        pen_offset: 84.0,
        rotation: Rotation::Deg0,
        ..CurveParams::default()
    }
}

fn assert_close(a: Point, b: Point, tol: f64) {
    assert!(
        (a.x - b.x).abs() <= tol && (a.y - b.y).abs() <= tol,
        "{a:?} != {b:?}"
    );
}

#[test]
fn classic_flower_closes_after_two_revolutions() {
    assert_eq!(closing_revolutions(120.0, 48.0, CurveKind::Inner), 2.0);

    let pts = sample(&flower(), CurveKind::Inner, 360);
    assert_eq!(pts.len(), 2 * 360 + 1);
    assert_close(pts[0], Point::new(156.0, 0.0), 1e-12);
    assert_close(*pts.last().unwrap(), pts[0], 1e-9);
}

#[test]
fn closure_holds_for_integer_radii() {
    for (big_r, r) in [(100.0, 33.0), (150.0, 25.0), (160.0, 40.0), (96.0, 36.0)] {
        for kind in [CurveKind::Inner, CurveKind::Outer] {
            let params = CurveParams {
                ring_radius: big_r,
                wheel_radius: r,
                pen_offset: 30.0,
                rotation: Rotation::Deg0,
                ..CurveParams::default()
            };
            let revs = closing_revolutions(big_r, r, kind);
            let first = point_at(0.0, &params, kind);
            let last = point_at(revs * TAU, &params, kind);
            assert_close(first, last, 1e-6);
        }
    }
}

#[test]
fn outer_variant_starts_at_ring_plus_wheel_minus_pen() {
    let p = point_at(0.0, &flower(), CurveKind::Outer);
    assert_close(p, Point::new(120.0 + 48.0 - 84.0, 0.0), 1e-12);
    // gcd(48, 168) = 24.
    assert_eq!(closing_revolutions(120.0, 48.0, CurveKind::Outer), 2.0);
}

#[test]
fn rotation_is_applied_rigidly() {
    let rotated = CurveParams {
        rotation: Rotation::Deg90,
        ..flower()
    };
    let p = point_at(0.0, &rotated, CurveKind::Inner);
    assert_close(p, Point::new(0.0, 156.0), 1e-9);
}

#[test]
fn completion_shortens_the_sweep() {
    let half = CurveParams {
        completion: 50.0,
        ..flower()
    };
    let sweep = Sweep::new(&half, CurveKind::Inner, 100);
    assert_eq!(sweep.total_samples, 100);
    assert!((sweep.total_angle - TAU).abs() < 1e-12);
    assert_eq!(sample(&half, CurveKind::Inner, 100).len(), 101);
}

#[test]
fn degenerate_inner_curve_is_finite() {
    let params = CurveParams {
        ring_radius: 60.0,
        wheel_radius: 60.0,
        pen_offset: 10.0,
        ..flower()
    };
    let pts = sample(&params, CurveKind::Inner, 90);
    assert!(!pts.is_empty());
    assert!(pts.iter().all(|p| p.x.is_finite() && p.y.is_finite()));

    let tiny_wheel = CurveParams {
        wheel_radius: 0.2,
        ..flower()
    };
    let pts = sample(&tiny_wheel, CurveKind::Inner, 90);
    assert!(pts.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn oscillated_sampling_with_constant_params_matches_plain_sampling() {
    let params = flower();
    let plain = sample(&params, CurveKind::Inner, 120);
    let osc = sample_with_oscillation(&params, CurveKind::Inner, |_| params, 120);
    assert_eq!(plain.len(), osc.len());
    for (a, b) in plain.iter().zip(&osc) {
        assert_close(*a, *b, 1e-12);
    }
}

#[test]
fn oscillation_receives_geometric_progress() {
    let params = flower();
    let seen = std::cell::RefCell::new(Vec::new());
    let _ = sample_with_oscillation(
        &params,
        CurveKind::Inner,
        |p| {
            seen.borrow_mut().push(p);
            params
        },
        4,
    );
    let seen = seen.into_inner();
    assert_eq!(seen.len(), 9);
    assert_eq!(seen[0], 0.0);
    assert_eq!(seen[4], 0.5);
    assert_eq!(*seen.last().unwrap(), 1.0);
}
