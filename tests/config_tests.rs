// Host-side tests for configuration parsing, errors and the shader clock.

use ripple_core::constants::{FIXED_TIME_STEP, MAX_FRAME_DT_SEC, RESIZE_DEBOUNCE_MS};
use ripple_core::{
    shader_source, Clock, InvalidTimeStep, Phase, RippleConfig, RippleError, TimeStep, Variant,
};

#[test]
fn variant_parses_names_and_aliases() {
    assert_eq!("continuous".parse::<Variant>(), Ok(Variant::Continuous));
    assert_eq!(" Discrete ".parse::<Variant>(), Ok(Variant::Discrete));
    assert_eq!("impulses".parse::<Variant>(), Ok(Variant::Discrete));
    assert_eq!("".parse::<Variant>(), Ok(Variant::Continuous));
    assert!("wobble".parse::<Variant>().is_err());
}

#[test]
fn variant_display_round_trips() {
    for v in [Variant::Continuous, Variant::Discrete] {
        assert_eq!(v.to_string().parse::<Variant>(), Ok(v));
    }
}

#[test]
fn config_defaults() {
    let c = RippleConfig::new("/a.png");
    assert_eq!(c.image_url, "/a.png");
    assert_eq!(c.variant, Variant::Continuous);
    assert!(!c.debug);
    assert_eq!(c.resize_debounce_ms, RESIZE_DEBOUNCE_MS);
    assert_eq!(c.time_step, TimeStep::Fixed(FIXED_TIME_STEP));

    let c = c
        .with_variant(Variant::Discrete)
        .with_debug(true)
        .with_resize_debounce_ms(0)
        .with_time_step(TimeStep::PerSecond(1.0));
    assert_eq!(c.variant, Variant::Discrete);
    assert!(c.debug);
    assert_eq!(c.resize_debounce_ms, 0);
    assert_eq!(c.time_step, TimeStep::PerSecond(1.0));
}

#[test]
fn fixed_clock_advances_per_frame() {
    let mut clock = Clock::new(TimeStep::Fixed(0.05));
    for _ in 0..20 {
        clock.tick();
    }
    assert!((clock.elapsed() - 1.0).abs() < 1e-4);
    // wall-clock steps do not apply to a fixed clock
    clock.advance_by(5.0);
    assert!((clock.elapsed() - 1.0).abs() < 1e-4);
}

#[test]
fn per_second_clock_clamps_large_gaps() {
    let mut clock = Clock::new(TimeStep::PerSecond(2.0));
    clock.advance_by(0.016);
    assert!((clock.elapsed() - 0.032).abs() < 1e-6);
    clock.advance_by(30.0);
    assert!((clock.elapsed() - (0.032 + MAX_FRAME_DT_SEC * 2.0)).abs() < 1e-6);
    clock.advance_by(-1.0);
    assert!((clock.elapsed() - (0.032 + MAX_FRAME_DT_SEC * 2.0)).abs() < 1e-6);
}

#[test]
fn per_second_clock_first_tick_is_zero() {
    let mut clock = Clock::new(TimeStep::PerSecond(1.0));
    assert_eq!(clock.tick(), 0.0);
    clock.pause();
    assert!(clock.tick() < MAX_FRAME_DT_SEC);
}

#[test]
fn only_surface_errors_are_recoverable() {
    assert!(!RippleError::Surface("lost".into()).is_fatal());
    assert!(RippleError::MissingContainer.is_fatal());
    let e = RippleError::InvalidPhase {
        expected: Phase::Constructed,
        found: Phase::Destroyed,
    };
    assert!(e.is_fatal());
    assert_eq!(e.to_string(), "effect is Destroyed, expected Constructed");
    assert_eq!(
        RippleError::TextureLoad { url: "/x.jpg".into() }.to_string(),
        "texture image failed to load: /x.jpg"
    );
}

#[test]
fn shader_sources_share_the_vertex_stage() {
    for v in [Variant::Continuous, Variant::Discrete] {
        let src = shader_source(v);
        assert!(src.contains("fn vs_quad"));
        assert!(src.contains("fn fs_ripple"));
        assert!(src.contains("u_time"));
    }
    assert!(shader_source(Variant::Continuous).contains("u_mouseIntensity"));
    assert!(shader_source(Variant::Discrete).contains("u_ripple_positions"));
    assert!(shader_source(Variant::Discrete).contains("u_ripple_start_times"));
}

#[test]
fn time_step_parses_fixed_or_rate() {
    assert_eq!("fixed".parse::<TimeStep>(), Ok(TimeStep::Fixed(FIXED_TIME_STEP)));
    assert_eq!("".parse::<TimeStep>(), Ok(TimeStep::default()));
    assert_eq!(" 1.5 ".parse::<TimeStep>(), Ok(TimeStep::PerSecond(1.5)));
    assert!("0".parse::<TimeStep>().is_err());
    assert!("-2".parse::<TimeStep>().is_err());
    assert!("fast".parse::<TimeStep>().is_err());
    assert!(TimeStep::per_second(f32::NAN).is_err());
    assert_eq!(TimeStep::per_second(3.0), Ok(TimeStep::PerSecond(3.0)));
    assert_eq!(
        "fast".parse::<TimeStep>().unwrap_err(),
        InvalidTimeStep("fast".into())
    );
}

#[test]
fn debug_mode_logs_resizes_at_info() {
    let c = RippleConfig::new("/a.png");
    assert_eq!(c.diagnostics_level(), log::Level::Debug);
    // the web front end filters the console at Info
    assert!(c.clone().with_debug(true).diagnostics_level() <= log::Level::Info);
}
