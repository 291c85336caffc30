#![allow(missing_docs)]
//! Host-level tests for the position-aware tree patterns.

use core::f32::consts::{FRAC_PI_2, PI};

use christmas_lights::color::{GREEN, OFF, RED, WHITE, hsv_to_grb};
use christmas_lights::layout::{Layout, Position};
use christmas_lights::led_strip::{Emit, Frame1d};
use christmas_lights::pattern::{Pattern, spin_lit, spin_reference, sweep_threshold};

fn render<const N: usize>(pattern: Pattern, t: u32, positions: &[Position; N]) -> Frame1d<N> {
    let layout = Layout::new(positions);
    let mut rng = fastrand::Rng::with_seed(0);
    let mut frame = Frame1d::new();
    assert_eq!(pattern.render(t, &layout, &mut rng, &mut frame), Emit::Frame);
    frame
}

#[test]
fn sweep_threshold_bounces_between_bottom_and_top() {
    assert_eq!(sweep_threshold(0), 0);
    assert_eq!(sweep_threshold(1), 10);
    assert_eq!(sweep_threshold(99), 990);
    assert_eq!(sweep_threshold(100), 1000);
    assert_eq!(sweep_threshold(101), 990);
    assert_eq!(sweep_threshold(199), 10);
    assert_eq!(sweep_threshold(200), 0);
    assert_eq!(sweep_threshold(u32::MAX), sweep_threshold(u32::MAX % 200));
}

#[test]
fn up_down_sweep_is_red_above_the_plane() {
    let positions = [
        Position::new(0, 0, 0),
        Position::new(0, 500, 0),
        Position::new(0, 501, 0),
        Position::new(0, 1000, 0),
    ];
    // t = 50: plane at 500.
    let frame = render(Pattern::UpDownSweep, 50, &positions);
    assert_eq!(frame.0, [GREEN, GREEN, RED, RED]);

    // t = 100: plane at the top, nothing above it.
    let frame = render(Pattern::UpDownSweep, 100, &positions);
    assert_eq!(frame.0, [GREEN; 4]);
}

#[test]
fn left_right_sweep_splits_into_complementary_hues() {
    let positions = [Position::new(-600, 0, 0), Position::new(-400, 0, 0)];
    // t = 0: plane at x = -500, hue 0.
    let frame = render(Pattern::LeftRightSweep, 0, &positions);
    assert_eq!(frame[1], RED);
    assert_eq!(frame[0], hsv_to_grb(180, 255, 255));

    // t = 150: plane at x = 0, hue 150.
    let positions = [Position::new(-1, 0, 0), Position::new(1, 0, 0)];
    let frame = render(Pattern::LeftRightSweep, 150, &positions);
    assert_eq!(frame[1], hsv_to_grb(150, 255, 255));
    assert_eq!(frame[0], hsv_to_grb(330, 255, 255));
}

#[test]
fn up_down_rainbow_hue_follows_height() {
    let positions = [
        Position::new(0, 0, 0),
        Position::new(0, 100, 0),
        Position::new(0, 1000, 0),
    ];
    let frame = render(Pattern::UpDownRainbow, 5, &positions);
    assert_eq!(frame[0], hsv_to_grb(5, 255, 255));
    assert_eq!(frame[1], hsv_to_grb(15, 255, 255));
    assert_eq!(frame[2], hsv_to_grb(105, 255, 255));
}

#[test]
fn forward_backward_rainbow_hue_follows_depth_and_wraps_negative() {
    let positions = [Position::new(0, 0, -100), Position::new(0, 0, 3590)];
    let frame = render(Pattern::ForwardBackwardRainbow, 5, &positions);
    assert_eq!(frame[0], hsv_to_grb(355, 255, 255));
    assert_eq!(frame[1], hsv_to_grb(4, 255, 255));
}

#[test]
fn spin_reference_walks_once_around_per_hundred_frames() {
    assert!((spin_reference(0) + PI).abs() < 1e-6);
    assert!(spin_reference(50).abs() < 1e-6);
    assert!((spin_reference(75) - FRAC_PI_2).abs() < 1e-5);
    assert!((spin_reference(100) - spin_reference(0)).abs() < 1e-6);
}

#[test]
fn spin_lit_is_wrap_aware() {
    assert!(spin_lit(0.0, 0.0, false));
    assert!(spin_lit(0.19, 0.0, false));
    assert!(!spin_lit(0.25, 0.0, false));
    assert!(spin_lit(PI - 0.05, -PI + 0.05, false));
}

#[test]
fn opposite_pixel_is_lit_only_by_double_spin() {
    assert!(!spin_lit(PI, 0.0, false));
    assert!(spin_lit(PI, 0.0, true));
    assert!(spin_lit(0.0, PI, true));
}

#[test]
fn spin_patterns_light_pixels_facing_the_blades() {
    let positions = [
        Position::new(0, 100, 300),  // angle 0
        Position::new(0, 200, -300), // angle pi
        Position::new(300, 300, 0),  // angle pi/2
    ];
    // t = 50: reference angle 0.
    let frame = render(Pattern::Spin, 50, &positions);
    assert_eq!(frame.0, [WHITE, OFF, OFF]);

    let frame = render(Pattern::DoubleSpin, 50, &positions);
    assert_eq!(frame.0, [WHITE, WHITE, OFF]);
}
