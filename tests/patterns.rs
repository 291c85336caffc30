#![allow(missing_docs)]
//! Host-level tests for the index-only strip patterns.

use christmas_lights::STRIP_LEN;
use christmas_lights::color::{ALL_ON, BLUE, GREEN, OFF, RED};
use christmas_lights::layout::Layout;
use christmas_lights::led_strip::{Emit, Frame1d};
use christmas_lights::pattern::{Pattern, STRIP_PATTERNS, TREE_PATTERNS};

fn render(pattern: Pattern, t: u32, rng: &mut fastrand::Rng) -> (Emit, Frame1d<STRIP_LEN>) {
    let layout = Layout::<STRIP_LEN>::linear();
    let mut frame = Frame1d::new();
    let emit = pattern.render(t, &layout, rng, &mut frame);
    (emit, frame)
}

fn expected_snake(x: usize) -> u32 {
    match x % 64 {
        0..10 => RED,
        15..25 => GREEN,
        30..40 => BLUE,
        _ => OFF,
    }
}

#[test]
fn snakes_at_time_zero_has_three_bands_every_64_pixels() {
    let (emit, frame) = render(Pattern::Snakes, 0, &mut fastrand::Rng::with_seed(1));
    assert_eq!(emit, Emit::Frame);
    for (index, &word) in frame.iter().enumerate() {
        assert_eq!(word, expected_snake(index), "pixel {index}");
    }
    assert_eq!(frame[64], RED);
    assert_eq!(frame[64 + 12], OFF);
}

#[test]
fn snakes_move_one_pixel_every_two_frames() {
    let mut rng = fastrand::Rng::with_seed(1);
    let (_, at_zero) = render(Pattern::Snakes, 0, &mut rng);
    let (_, at_one) = render(Pattern::Snakes, 1, &mut rng);
    let (_, at_two) = render(Pattern::Snakes, 2, &mut rng);
    assert_eq!(at_zero, at_one);
    for index in 0..STRIP_LEN - 1 {
        assert_eq!(at_two[index], at_zero[index + 1]);
    }
}

#[test]
fn random_refreshes_only_every_eighth_frame() {
    let layout = Layout::<STRIP_LEN>::linear();
    let mut rng = fastrand::Rng::with_seed(3);
    let mut frame = Frame1d::new();

    assert_eq!(
        Pattern::Random.render(0, &layout, &mut rng, &mut frame),
        Emit::Frame
    );
    let refreshed = frame;
    for t in 1..8 {
        assert_eq!(
            Pattern::Random.render(t, &layout, &mut rng, &mut frame),
            Emit::Hold
        );
        assert_eq!(frame, refreshed, "held frame {t} must be untouched");
    }
    assert_eq!(
        Pattern::Random.render(8, &layout, &mut rng, &mut frame),
        Emit::Frame
    );
    assert_ne!(frame, refreshed);
}

#[test]
fn random_is_reproducible_for_a_seed() {
    let (_, first) = render(Pattern::Random, 16, &mut fastrand::Rng::with_seed(99));
    let (_, second) = render(Pattern::Random, 16, &mut fastrand::Rng::with_seed(99));
    assert_eq!(first, second);
}

#[test]
fn sparkle_holds_seven_of_eight_frames() {
    let mut rng = fastrand::Rng::with_seed(5);
    let holds = (0..64)
        .filter(|&t| render(Pattern::Sparkle, t, &mut rng).0 == Emit::Hold)
        .count();
    assert_eq!(holds, 56);
}

#[test]
fn sparkle_lights_about_one_pixel_in_sixteen() {
    let mut rng = fastrand::Rng::with_seed(11);
    let mut lit = 0;
    for refresh in 0..8 {
        let (emit, frame) = render(Pattern::Sparkle, refresh * 8, &mut rng);
        assert_eq!(emit, Emit::Frame);
        for &word in frame.iter() {
            assert!(word == ALL_ON || word == OFF);
            if word == ALL_ON {
                lit += 1;
            }
        }
    }
    // 1600 pixels at 1/16 gives 100 on average.
    assert!((50..150).contains(&lit), "lit {lit}");
}

#[test]
fn greys_ramp_from_time_and_wrap_before_255() {
    let (emit, frame) = render(Pattern::Greys, 0, &mut fastrand::Rng::with_seed(1));
    assert_eq!(emit, Emit::Frame);
    assert_eq!(frame[0], 0);
    assert_eq!(frame[1], 0x01_01_01);
    assert_eq!(frame[199], 199 * 0x01_01_01);

    let (_, shifted) = render(Pattern::Greys, 300, &mut fastrand::Rng::with_seed(1));
    // 300 % 255 = 45
    assert_eq!(shifted[0], 45 * 0x01_01_01);
    assert_eq!(shifted[199], 244 * 0x01_01_01);

    let (_, wrapping) = render(Pattern::Greys, 250, &mut fastrand::Rng::with_seed(1));
    assert_eq!(wrapping[4], 254 * 0x01_01_01);
    assert_eq!(wrapping[5], 0);
    assert_eq!(wrapping[6], 0x01_01_01);
}

#[test]
fn greys_depend_only_on_time() {
    let (_, first) = render(Pattern::Greys, 77, &mut fastrand::Rng::with_seed(1));
    let (_, second) = render(Pattern::Greys, 77, &mut fastrand::Rng::with_seed(2));
    assert_eq!(first, second);
}

#[test]
fn pattern_names_are_for_logging() {
    assert_eq!(Pattern::Snakes.name(), "Snakes!");
    assert_eq!(Pattern::Random.name(), "Random data");
    assert_eq!(Pattern::Sparkle.name(), "Sparkles");
    assert_eq!(Pattern::Greys.name(), "Greys");
    assert_eq!(Pattern::DoubleSpin.name(), "Double spin");
}

#[test]
fn pattern_tables_list_each_show() {
    assert_eq!(
        STRIP_PATTERNS,
        &[
            Pattern::Snakes,
            Pattern::Random,
            Pattern::Sparkle,
            Pattern::Greys
        ]
    );
    assert_eq!(TREE_PATTERNS.len(), 8);
    assert_eq!(TREE_PATTERNS[0], Pattern::UpDownSweep);
    assert!(TREE_PATTERNS.contains(&Pattern::Sparkle));
    assert!(!TREE_PATTERNS.contains(&Pattern::Random));
}
