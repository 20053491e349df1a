use super::*;

const ALL: [Waveform; 5] = [
    Waveform::Sine,
    Waveform::Triangle,
    Waveform::Square,
    Waveform::Sawtooth,
    Waveform::ReverseSawtooth,
];

#[test]
fn shapes_stay_in_unit_range() {
    for w in ALL {
        for i in 0..100 {
            let v = w.shape(i as f64 / 100.0);
            assert!((0.0..=1.0).contains(&v), "{w:?} -> {v}");
        }
    }
}

#[test]
fn sine_starts_low_and_peaks_mid_cycle() {
    assert!(Waveform::Sine.shape(0.0).abs() < 1e-12);
    assert!((Waveform::Sine.shape(0.5) - 1.0).abs() < 1e-12);
    assert!((Waveform::Sine.shape(0.25) - 0.5).abs() < 1e-12);
}

#[test]
fn piecewise_shapes() {
    assert_eq!(Waveform::Triangle.shape(0.25), 0.5);
    assert_eq!(Waveform::Triangle.shape(0.75), 0.5);
    assert_eq!(Waveform::Square.shape(0.49), 0.0);
    assert_eq!(Waveform::Square.shape(0.5), 1.0);
    assert_eq!(Waveform::Sawtooth.shape(0.3), 0.3);
    assert_eq!(Waveform::ReverseSawtooth.shape(0.3), 0.7);
}

#[test]
fn names_round_trip_through_serde_and_from_str() {
    let w: Waveform = serde_json::from_str("\"reverseSawtooth\"").unwrap();
    assert_eq!(w, Waveform::ReverseSawtooth);
    assert_eq!(serde_json::to_string(&w).unwrap(), "\"reverseSawtooth\"");
    assert_eq!("square".parse::<Waveform>().unwrap(), Waveform::Square);
    assert!("zigzag".parse::<Waveform>().is_err());
}
