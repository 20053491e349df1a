use super::*;

fn draw(duration_secs: f64, fps: u32, loop_mode: LoopMode) -> TimelineSettings {
    TimelineSettings {
        duration_secs,
        fps: Fps::integer(fps).unwrap(),
        loop_mode,
        ..TimelineSettings::default()
    }
}

fn animated_wave(period: f64) -> WaveEffectParams {
    WaveEffectParams {
        enabled: true,
        animate: true,
        animation_period: period,
        ..WaveEffectParams::default()
    }
}

#[test]
fn draw_driven_frame_count_is_duration_times_fps() {
    let plan = FramePlan::new(draw(3.0, 30, LoopMode::None), &WaveEffectParams::default()).unwrap();
    assert_eq!(plan.driver, FrameDriver::Draw);
    assert_eq!(plan.frame_count(), 90);

    let first = plan.frame_spec(FrameIndex(0)).unwrap();
    let last = plan.frame_spec(FrameIndex(89)).unwrap();
    assert_eq!(first.progress, 0.0);
    assert_eq!(last.progress, 1.0);
    assert_eq!(last.time_secs, 3.0);
    assert!(!last.is_erasing);
    assert_eq!(plan.specs().count(), 90);
}

#[test]
fn frames_are_a_pure_function_of_index() {
    let plan =
        FramePlan::new(draw(2.0, 24, LoopMode::Pingpong), &animated_wave(1.0)).unwrap();
    let a = plan.frame_spec(FrameIndex(17)).unwrap();
    let _ = plan.frame_spec(FrameIndex(3)).unwrap();
    assert_eq!(plan.frame_spec(FrameIndex(17)).unwrap(), a);
}

#[test]
fn looping_exports_cover_draw_and_erase() {
    let plan = FramePlan::new(draw(1.0, 10, LoopMode::Pingpong), &WaveEffectParams::default())
        .unwrap();
    assert_eq!(plan.frame_count(), 20);

    let turn = plan.frame_spec(FrameIndex(10)).unwrap();
    assert_eq!(turn.progress, 1.0);
    assert!(turn.is_erasing);

    let back = plan.frame_spec(FrameIndex(15)).unwrap();
    assert!((back.progress - 0.5).abs() < 1e-12);
    assert!(back.is_erasing);

    let drawing = plan.frame_spec(FrameIndex(5)).unwrap();
    assert!((drawing.progress - 0.5).abs() < 1e-12);
    assert!(!drawing.is_erasing);
}

#[test]
fn easing_is_applied_per_frame() {
    let settings = TimelineSettings {
        easing: "power1.in".parse().unwrap(),
        ..draw(0.3, 10, LoopMode::None)
    };
    let plan = FramePlan::new(settings, &WaveEffectParams::default()).unwrap();
    assert_eq!(plan.frame_count(), 3);
    let mid = plan.frame_spec(FrameIndex(1)).unwrap();
    assert!((mid.progress - 0.5).abs() < 1e-12);
    assert!((mid.eased_progress - 0.25).abs() < 1e-12);
}

#[test]
fn wave_only_exports_one_period() {
    let settings = TimelineSettings {
        draw: false,
        ..draw(5.0, 30, LoopMode::None)
    };
    let plan = FramePlan::new(settings, &animated_wave(2.0)).unwrap();
    assert_eq!(plan.driver, FrameDriver::WaveOnly { period_secs: 2.0 });
    assert_eq!(plan.frame_count(), 60);
    let spec = plan.frame_spec(FrameIndex(15)).unwrap();
    assert_eq!(spec.eased_progress, 1.0);
    assert!((spec.time_secs - 0.5).abs() < 1e-12);
}

#[test]
fn nothing_animated_falls_back_to_one_second() {
    let settings = TimelineSettings {
        draw: false,
        ..draw(5.0, 12, LoopMode::None)
    };
    let plan = FramePlan::new(settings, &WaveEffectParams::default()).unwrap();
    assert_eq!(plan.driver, FrameDriver::Still);
    assert_eq!(plan.frame_count(), 12);
}

#[test]
fn bad_inputs_are_rejected() {
    for d in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = FramePlan::new(draw(d, 30, LoopMode::None), &WaveEffectParams::default())
            .unwrap_err();
        assert!(matches!(err, SpiroError::Validation(_)));
    }
    let plan = FramePlan::new(draw(1.0, 30, LoopMode::None), &WaveEffectParams::default()).unwrap();
    assert!(matches!(
        plan.frame_spec(FrameIndex(30)),
        Err(SpiroError::Animation(_))
    ));
}
