use super::*;

fn monotonic() -> impl Iterator<Item = Ease> {
    Ease::ALL
        .into_iter()
        .filter(|e| !matches!(e, Ease::Back(_) | Ease::Elastic(_) | Ease::Bounce(_)))
}

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert!(ease.apply(0.0).abs() < 1e-9, "{ease} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease} at 1");
    }
}

#[test]
fn input_is_clamped() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
        assert_eq!(ease.apply(f64::NAN), ease.apply(0.0));
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in monotonic() {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease}");
        assert!(b < c, "{ease}");
    }
}

#[test]
fn in_out_is_symmetric_about_the_midpoint() {
    for ease in Ease::ALL.into_iter().filter(|e| e.dir() == Some(EaseDir::InOut)) {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-9, "{ease}");
    }
    let e = Ease::Power2(EaseDir::InOut);
    assert!((e.apply(0.2) + e.apply(0.8) - 1.0).abs() < 1e-12);
}

#[test]
fn known_values() {
    assert_eq!(Ease::Linear.apply(0.3), 0.3);
    assert!((Ease::Power1(EaseDir::In).apply(0.5) - 0.25).abs() < 1e-12);
    assert!((Ease::Power2(EaseDir::Out).apply(0.5) - 0.875).abs() < 1e-12);
    assert!((Ease::Bounce(EaseDir::Out).apply(0.2) - 7.5625 * 0.04).abs() < 1e-12);
    // Back dips below zero before heading to 1.
    assert!(Ease::Back(EaseDir::In).apply(0.2) < 0.0);
    assert!(Ease::Back(EaseDir::Out).apply(0.8) > 1.0);
}

#[test]
fn names_round_trip() {
    for ease in Ease::ALL {
        let name = ease.to_string();
        assert_eq!(name.parse::<Ease>().unwrap(), ease, "{name}");
    }
    assert_eq!(Ease::Power3(EaseDir::InOut).to_string(), "power3.inOut");
    assert!("power5.in".parse::<Ease>().is_err());
    assert!("sine.sideways".parse::<Ease>().is_err());
    assert!("sine".parse::<Ease>().is_err());

    let e: Ease = serde_json::from_str("\"expo.out\"").unwrap();
    assert_eq!(e, Ease::Expo(EaseDir::Out));
    assert_eq!(serde_json::to_string(&Ease::Linear).unwrap(), "\"linear\"");
    assert!(serde_json::from_str::<Ease>("\"wobble\"").is_err());
}

#[test]
fn bezier_approximations() {
    assert_eq!(Ease::Linear.cubic_bezier(), None);
    for ease in Ease::ALL.into_iter().skip(1) {
        let c = ease.cubic_bezier().unwrap();
        // x control points must stay inside the unit interval for a valid timing function.
        assert!((0.0..=1.0).contains(&c[0]) && (0.0..=1.0).contains(&c[2]), "{ease}");
        let s = ease.smil_key_spline().unwrap();
        assert!(s.iter().all(|v| (0.0..=1.0).contains(v)), "{ease}");
    }
    assert!(Ease::Back(EaseDir::Out).is_lossy_as_bezier());
    assert!(!Ease::Sine(EaseDir::In).is_lossy_as_bezier());
    assert_eq!(
        Ease::Back(EaseDir::Out).smil_key_spline(),
        Some([0.34, 1.0, 0.64, 1.0])
    );
}
