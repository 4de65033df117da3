// Host-side tests for the cover-fit resize policy and pointer UV mapping.

use glam::Vec2;
use ripple_core::{cover_fit, local_to_uv, CoverFit, Size};

const EPS: f32 = 1e-5;

fn assert_covers(fit: &CoverFit) {
    let c = fit.coverage();
    assert!(c.x >= 1.0 - EPS, "horizontal gap: coverage {:?}", c);
    assert!(c.y >= 1.0 - EPS, "vertical gap: coverage {:?}", c);
}

#[test]
fn quad_covers_projection_for_all_aspect_pairs() {
    let containers = [
        Size::new(1920.0, 1080.0),
        Size::new(1080.0, 1920.0),
        Size::new(800.0, 800.0),
        Size::new(320.0, 40.0),
        Size::new(40.0, 320.0),
    ];
    let images = [
        Size::new(4000.0, 3000.0),
        Size::new(3000.0, 4000.0),
        Size::new(512.0, 512.0),
        Size::new(2000.0, 100.0),
    ];
    for container in containers {
        for image in images {
            let fit = cover_fit(container, Some(image));
            assert_covers(&fit);
            // exactly one axis is a tight fit
            let c = fit.coverage();
            assert!(
                (c.x - 1.0).abs() < EPS || (c.y - 1.0).abs() < EPS,
                "neither axis tight for {:?} / {:?}: {:?}",
                container,
                image,
                c
            );
        }
    }
}

#[test]
fn quad_keeps_image_aspect_ratio() {
    let image = Size::new(4000.0, 3000.0);
    for container in [Size::new(1920.0, 1080.0), Size::new(600.0, 1200.0)] {
        let fit = cover_fit(container, Some(image));
        let quad_aspect = fit.scale.x / fit.scale.y;
        assert!((quad_aspect - image.aspect()).abs() < EPS);
    }
}

#[test]
fn camera_spans_container_aspect_and_unit_height() {
    let fit = cover_fit(Size::new(1600.0, 800.0), Some(Size::new(100.0, 100.0)));
    assert_eq!(fit.bounds.left, -2.0);
    assert_eq!(fit.bounds.right, 2.0);
    assert_eq!(fit.bounds.top, 1.0);
    assert_eq!(fit.bounds.bottom, -1.0);
}

#[test]
fn wide_container_matches_width() {
    // container 2:1, image 1:1 -> fit width, overflow vertically
    let fit = cover_fit(Size::new(200.0, 100.0), Some(Size::new(50.0, 50.0)));
    assert!((fit.scale.x - 4.0).abs() < EPS);
    assert!((fit.scale.y - 4.0).abs() < EPS);
    assert!((fit.coverage().x - 1.0).abs() < EPS);
}

#[test]
fn tall_container_matches_height() {
    // container 1:2, image 1:1 -> fit height, overflow horizontally
    let fit = cover_fit(Size::new(100.0, 200.0), Some(Size::new(50.0, 50.0)));
    assert!((fit.scale.x - 2.0).abs() < EPS);
    assert!((fit.scale.y - 2.0).abs() < EPS);
    assert!((fit.coverage().y - 1.0).abs() < EPS);
}

#[test]
fn resize_is_idempotent() {
    let container = Size::new(1366.0, 768.0);
    let image = Some(Size::new(1024.0, 683.0));
    let a = cover_fit(container, image);
    let b = cover_fit(container, image);
    assert_eq!(a.bounds.to_array().map(f32::to_bits), b.bounds.to_array().map(f32::to_bits));
    assert_eq!(a.scale.to_array().map(f32::to_bits), b.scale.to_array().map(f32::to_bits));
}

#[test]
fn missing_image_assumes_square() {
    let container = Size::new(900.0, 300.0);
    assert_eq!(
        cover_fit(container, None),
        cover_fit(container, Some(Size::new(1.0, 1.0)))
    );
    assert_covers(&cover_fit(container, None));
}

#[test]
fn zero_dimensions_stay_finite() {
    for (container, image) in [
        (Size::new(0.0, 0.0), None),
        (Size::new(0.0, 400.0), Some(Size::new(0.0, 0.0))),
        (Size::new(400.0, 0.0), Some(Size::new(10.0, 0.0))),
    ] {
        let fit = cover_fit(container, image);
        assert!(fit.scale.is_finite(), "{:?}", fit);
        assert!(fit.bounds.width().is_finite() && fit.bounds.width() > 0.0);
        assert_covers(&fit);
    }
}

#[test]
fn default_fit_is_square_container_without_image() {
    let fit = CoverFit::default();
    assert_eq!(fit.bounds.width(), 2.0);
    assert_eq!(fit.bounds.height(), 2.0);
    assert_eq!(fit.scale, Vec2::splat(2.0));
}

#[test]
fn device_pixels_round_and_never_zero() {
    assert_eq!(Size::new(100.0, 50.0).to_device_pixels(2.0), (200, 100));
    assert_eq!(Size::new(33.3, 10.0).to_device_pixels(1.5), (50, 15));
    assert_eq!(Size::new(0.0, 0.0).to_device_pixels(3.0), (1, 1));
    assert_eq!(Size::new(10.0, 10.0).to_device_pixels(f32::NAN), (10, 10));
    assert_eq!(Size::new(10.0, 10.0).to_device_pixels(0.0), (10, 10));
}

#[test]
fn local_coordinates_flip_into_uv() {
    let container = Size::new(200.0, 100.0);
    assert_eq!(local_to_uv(Vec2::new(0.0, 0.0), container), Vec2::new(0.0, 1.0));
    assert_eq!(local_to_uv(Vec2::new(200.0, 100.0), container), Vec2::new(1.0, 0.0));
    assert_eq!(local_to_uv(Vec2::new(50.0, 25.0), container), Vec2::new(0.25, 0.75));
}

#[test]
fn local_to_uv_survives_zero_container() {
    let uv = local_to_uv(Vec2::new(5.0, 5.0), Size::new(0.0, 0.0));
    assert!(uv.is_finite());
}
