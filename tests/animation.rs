#![allow(missing_docs)]
//! Host-level tests for the animation driver.

use christmas_lights::animation::{
    Animator, Cycle, Direction, FRAME_INTERVAL, STRIP_SHOW, Show, Stepping, TREE_SHOW,
};
use christmas_lights::layout::Layout;
use christmas_lights::led_strip::PixelSink;
use christmas_lights::pattern::{Pattern, STRIP_PATTERNS, TREE_PATTERNS};
use embassy_futures::block_on;
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

#[derive(Default)]
struct RecordingSink {
    words: Vec<u32>,
}

impl PixelSink for RecordingSink {
    async fn put_pixel(&mut self, word: u32) {
        self.words.push(word);
    }
}

#[derive(Default)]
struct RecordingDelay {
    calls: usize,
    total_ns: u64,
}

impl DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.total_ns += u64::from(ns);
    }
}

#[test]
fn shows_match_the_two_demos() {
    assert_eq!(STRIP_SHOW.patterns(), STRIP_PATTERNS);
    assert_eq!(STRIP_SHOW.steps(), 1000);
    assert_eq!(STRIP_SHOW.stepping(), Stepping::Continuous);
    assert_eq!(TREE_SHOW.patterns(), TREE_PATTERNS);
    assert_eq!(TREE_SHOW.steps(), 3000);
    assert_eq!(TREE_SHOW.stepping(), Stepping::Mirrored);
    assert_eq!(FRAME_INTERVAL, Duration::from_millis(10));
}

#[test]
fn direction_names_for_logging() {
    assert_eq!(Direction::Forward.as_str(), "forward");
    assert_eq!(Direction::Backward.as_str(), "backward");
}

#[test]
fn time_indices_step_in_the_cycle_direction_and_wrap() {
    let forward = Cycle {
        pattern: Pattern::Snakes,
        direction: Direction::Forward,
        start: u32::MAX - 1,
        steps: 4,
    };
    assert_eq!(
        forward.time_indices().collect::<Vec<_>>(),
        [u32::MAX - 1, u32::MAX, 0, 1]
    );

    let backward = Cycle {
        direction: Direction::Backward,
        start: 1,
        ..forward
    };
    assert_eq!(
        backward.time_indices().collect::<Vec<_>>(),
        [1, 0, u32::MAX, u32::MAX - 1]
    );
}

#[test]
fn continuous_cycles_pick_up_where_the_last_one_ended() {
    let mut animator = Animator::new(STRIP_SHOW, Layout::<8>::linear(), 1);
    let mut expected_start = 0_u32;
    for _ in 0..20 {
        let cycle = animator.next_cycle();
        assert_eq!(cycle.start, expected_start);
        assert_eq!(cycle.steps, 1000);
        expected_start = match cycle.direction {
            Direction::Forward => expected_start.wrapping_add(1000),
            Direction::Backward => expected_start.wrapping_sub(1000),
        };
        assert_eq!(animator.time_index(), expected_start);
    }
}

#[test]
fn mirrored_cycles_cover_zero_to_steps_from_either_end() {
    let mut animator = Animator::new(TREE_SHOW, Layout::<8>::linear(), 2);
    for _ in 0..20 {
        let cycle = animator.next_cycle();
        let indices: Vec<u32> = cycle.time_indices().collect();
        assert_eq!(indices.len(), 3000);
        match cycle.direction {
            Direction::Forward => {
                assert_eq!(indices.first(), Some(&0));
                assert_eq!(indices.last(), Some(&2999));
            }
            Direction::Backward => {
                assert_eq!(indices.first(), Some(&2999));
                assert_eq!(indices.last(), Some(&0));
            }
        }
        assert_eq!(animator.time_index(), 0);
    }
}

#[test]
fn selection_is_per_cycle_and_reproducible_for_a_seed() {
    let mut first = Animator::new(TREE_SHOW, Layout::<8>::linear(), 1234);
    let mut second = Animator::new(TREE_SHOW, Layout::<8>::linear(), 1234);
    let first_cycles: Vec<Cycle> = (0..50).map(|_| first.next_cycle()).collect();
    let second_cycles: Vec<Cycle> = (0..50).map(|_| second.next_cycle()).collect();
    assert_eq!(first_cycles, second_cycles);
}

#[test]
fn selection_reaches_every_pattern_and_both_directions() {
    let mut animator = Animator::new(STRIP_SHOW, Layout::<8>::linear(), 7);
    let cycles: Vec<Cycle> = (0..400).map(|_| animator.next_cycle()).collect();
    for pattern in STRIP_PATTERNS {
        assert!(cycles.iter().any(|cycle| cycle.pattern == *pattern), "{pattern:?}");
    }
    for direction in [Direction::Forward, Direction::Backward] {
        assert!(cycles.iter().any(|cycle| cycle.direction == direction));
    }
}

#[test]
fn play_writes_every_frame_and_sleeps_every_step() {
    const SHOW: Show = Show::new(&[Pattern::Snakes], 5, Stepping::Continuous);
    let mut animator = Animator::new(SHOW, Layout::<16>::linear(), 3);
    let mut sink = RecordingSink::default();
    let mut delay = RecordingDelay::default();

    let cycle = animator.next_cycle();
    block_on(animator.play(&cycle, &mut sink, &mut delay));

    assert_eq!(sink.words.len(), 5 * 16);
    assert_eq!(delay.calls, 5);
    assert_eq!(delay.total_ns, 5 * 10_000_000);
    assert_eq!(&sink.words[sink.words.len() - 16..], &animator.frame()[..]);
}

#[test]
fn play_skips_transmission_while_a_pattern_holds() {
    const SHOW: Show = Show::new(&[Pattern::Random], 16, Stepping::Mirrored);
    let mut animator = Animator::new(SHOW, Layout::<10>::linear(), 4);
    let mut sink = RecordingSink::default();
    let mut delay = RecordingDelay::default();

    let cycle = animator.next_cycle();
    block_on(animator.play(&cycle, &mut sink, &mut delay));

    // Time indices 0..16 in either order refresh at 0 and 8 only.
    assert_eq!(sink.words.len(), 2 * 10);
    assert_eq!(delay.calls, 16);
}
