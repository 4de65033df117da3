// Host-side tests for the continuous pointer-intensity model.

use glam::Vec2;
use ripple_core::constants::{FIXED_TIME_STEP, OFFSCREEN_UV};
use ripple_core::{InteractionModel, PointerIntensity, Uniforms, Variant};

#[test]
fn starts_offscreen_and_idle() {
    let m = PointerIntensity::default();
    assert_eq!(m.pointer(), Vec2::from_array(OFFSCREEN_UV));
    assert_eq!(m.previous(), m.pointer());
    assert_eq!(m.intensity(), 0.0);
    assert_eq!(m.variant(), Variant::Continuous);
}

#[test]
fn intensity_decays_to_zero_within_ninety_frames() {
    let mut m = PointerIntensity::with_intensity(1.0);
    for _ in 0..89 {
        m.advance();
    }
    // 0.95^89 is still just above the snap threshold
    assert!(m.intensity() > 0.0);
    m.advance();
    assert_eq!(m.intensity(), 0.0);

    m.advance();
    assert_eq!(m.intensity(), 0.0);
}

#[test]
fn intensity_stays_in_unit_range_under_fast_motion() {
    let mut m = PointerIntensity::default();
    let path = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(0.5, 0.5),
    ];
    for i in 0..200 {
        m.pointer_moved(path[i % path.len()], 0.0);
        m.advance();
        assert!((0.0..=1.0).contains(&m.intensity()), "frame {i}: {}", m.intensity());
    }
}

#[test]
fn speed_is_distance_since_last_frame() {
    let mut m = PointerIntensity::default();
    m.pointer_moved(Vec2::new(0.2, 0.2), 0.0);
    m.advance();
    m.pointer_moved(Vec2::new(0.5, 0.6), 0.0);
    m.advance();
    assert!((m.speed() - 0.5).abs() < 1e-6);
    assert_eq!(m.previous(), Vec2::new(0.5, 0.6));
}

#[test]
fn small_move_adds_gain_then_decays() {
    let mut m = PointerIntensity::default();
    m.pointer_moved(Vec2::new(0.5, 0.5), 0.0);
    m.advance();
    let before = m.intensity();

    // the second sample travels 0.1, adding 0.05 before the decay
    m.pointer_moved(Vec2::new(0.6, 0.5), 0.0);
    m.advance();
    let expected = (before + 0.05).min(1.0) * 0.95;
    assert!((m.intensity() - expected).abs() < 1e-5);
}

#[test]
fn stationary_pointer_only_decays() {
    let mut m = PointerIntensity::with_intensity(0.5);
    m.advance();
    assert!((m.intensity() - 0.475).abs() < 1e-6);
}

#[test]
fn with_intensity_clamps() {
    assert_eq!(PointerIntensity::with_intensity(3.0).intensity(), 1.0);
    assert_eq!(PointerIntensity::with_intensity(-1.0).intensity(), 0.0);
}

#[test]
fn uniforms_carry_pointer_time_and_intensity() {
    let mut m = PointerIntensity::with_intensity(0.25);
    m.pointer_moved(Vec2::new(0.3, 0.7), 0.0);
    match m.uniforms(FIXED_TIME_STEP * 3.0) {
        Uniforms::Continuous(u) => {
            assert_eq!(u.u_mouse, [0.3, 0.7]);
            assert!((u.u_time - 0.15).abs() < 1e-6);
            assert_eq!(u.u_mouse_intensity, 0.25);
        }
        other => panic!("unexpected uniforms {other:?}"),
    }
    assert!(!m.uploads_on_pointer());
}
