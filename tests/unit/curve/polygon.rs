use super::*;

const R: f64 = 40.0;

#[test]
fn circle_wheel_ignores_angle() {
    for theta in [0.0, 0.3, 2.0, -7.5] {
        assert_eq!(polygon_radius(theta, R, 1, 0.7, true), R);
        assert_eq!(polygon_radius(theta, R, -1, 0.0, false), R);
    }
}

#[test]
fn straight_square_spans_inradius_to_circumradius() {
    let inradius = R * (PI / 4.0).cos();
    assert!((polygon_radius(0.0, R, 4, 0.0, false) - inradius).abs() < 1e-9);
    assert!((polygon_radius(PI / 4.0, R, 4, 0.0, false) - R).abs() < 1e-9);
    // Periodic over one segment.
    let a = polygon_radius(0.1, R, 4, 0.0, false);
    let b = polygon_radius(0.1 + FRAC_PI_2, R, 4, 0.0, false);
    assert!((a - b).abs() < 1e-9);
}

#[test]
fn negative_sides_bulge_outward_past_circumradius() {
    let inradius = R * (PI / 4.0).cos();
    // Where the upright square sits on its inradius, the inverted one peaks.
    assert!((polygon_radius(0.0, R, -4, 0.0, false) - (2.0 * R - inradius)).abs() < 1e-9);
    // Both touch the circumradius at the vertices.
    assert!((polygon_radius(PI / 4.0, R, -4, 0.0, false) - R).abs() < 1e-9);

    let peak = (0..720)
        .map(|i| polygon_radius(f64::from(i) * TAU / 720.0, R, -4, 0.0, false))
        .fold(f64::MIN, f64::max);
    assert!((peak - (2.0 * R - inradius)).abs() < 1e-9);

    for i in 0..32 {
        let theta = f64::from(i) * 0.21;
        let up = polygon_radius(theta, R, 4, 0.0, false);
        let down = polygon_radius(theta, R, -4, 0.0, false);
        assert!((up + down - 2.0 * R).abs() < 1e-9, "theta={theta}");
        assert!(down >= R - 1e-9);
    }
}

#[test]
fn curved_edges_ignore_the_sign_of_sides() {
    for i in 0..32 {
        let theta = f64::from(i) * 0.21;
        let up = polygon_radius(theta, R, 5, 0.4, true);
        let down = polygon_radius(theta, R, -5, 0.4, true);
        assert!((up - down).abs() < 1e-9, "theta={theta}");
    }
}

#[test]
fn arcness_ignored_unless_enabled() {
    let straight = polygon_radius(0.2, R, 5, 0.0, false);
    assert_eq!(polygon_radius(0.2, R, 5, 0.8, false), straight);
    assert_eq!(polygon_radius(0.2, R, 5, 0.0, true), straight);
}

#[test]
fn curved_edges_hit_target_radius_at_vertex() {
    let inradius = R * (PI / 6.0).cos();
    let arcness = 0.5;
    let target = inradius + arcness * (R * 1.2 - inradius);
    // Vertex of a hexagon sits half a segment in.
    let vertex = PI / 6.0;
    assert!((polygon_radius(vertex, R, 6, arcness, true) - target).abs() < 1e-9);
}

#[test]
fn extreme_values_stay_finite() {
    for sides in [2, 3, -3, 12] {
        for arcness in [-0.5, -0.25, 0.0, 1.0, 4.0] {
            for i in 0..64 {
                let theta = f64::from(i) * 0.173;
                let r = polygon_radius(theta, R, sides, arcness, true);
                assert!(r.is_finite(), "sides={sides} arcness={arcness} theta={theta}");
            }
        }
    }
    assert_eq!(polygon_radius(f64::NAN, R, 4, 0.0, false), R);
}
