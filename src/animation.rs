//! The animation driver: picks a pattern and direction, then plays it for a fixed number of
//! frames.
//!
//! A [`Show`] describes what a demo cycles through. An [`Animator`] owns everything that
//! changes while it runs (the time index, the random number generator and the frame
//! buffer) and hands out one [`Cycle`] at a time:
//!
//! ```
//! use christmas_lights::animation::{Animator, Direction, STRIP_SHOW};
//! use christmas_lights::layout::Layout;
//!
//! let mut animator = Animator::new(STRIP_SHOW, Layout::<16>::linear(), 42);
//! let cycle = animator.next_cycle();
//! assert_eq!(cycle.time_indices().count(), 1000);
//! assert!(STRIP_SHOW.patterns().contains(&cycle.pattern));
//! if cycle.direction == Direction::Forward {
//!     assert_eq!(animator.time_index(), 1000);
//! }
//! ```
//!
//! The firmware then loops forever:
//!
//! ```ignore
//! loop {
//!     let cycle = animator.next_cycle();
//!     info!("{} ({})", cycle.pattern.name(), cycle.direction.as_str());
//!     animator.play(&cycle, &mut sink, &mut Delay).await;
//! }
//! ```

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

use crate::layout::Layout;
use crate::led_strip::{Emit, Frame1d, PixelSink, write_frame};
use crate::pattern::{Pattern, STRIP_PATTERNS, TREE_PATTERNS};

/// Sleep after every rendered step.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(10);

/// The plain-strip show: index patterns, 1000 frames a cycle, time carried across cycles.
pub const STRIP_SHOW: Show = Show::new(STRIP_PATTERNS, 1000, Stepping::Continuous);

/// The tree show: spatial patterns first, 3000 frames a cycle, each cycle from a fixed end.
pub const TREE_SHOW: Show = Show::new(TREE_PATTERNS, 3000, Stepping::Mirrored);

/// Which way the time index moves during a cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Direction {
    /// Time index increases by one per frame.
    Forward,
    /// Time index decreases by one per frame.
    Backward,
}

impl Direction {
    /// Lower-case name used in the cycle log line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }
}

/// Where each cycle's time indices start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Stepping {
    /// One time index shared by every cycle; each frame moves it one step in the cycle's
    /// direction, wrapping at the ends of `u32`.
    Continuous,
    /// Every cycle covers `0..steps`, walked upward when forward and downward when backward.
    Mirrored,
}

/// A set of patterns plus the timing of the cycles that play them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Show {
    patterns: &'static [Pattern],
    steps: u32,
    stepping: Stepping,
}

impl Show {
    /// Creates a show; every frame is followed by a [`FRAME_INTERVAL`] sleep.
    ///
    /// # Panics
    ///
    /// Panics if `patterns` is empty (at compile time when used in a `const`).
    #[must_use]
    pub const fn new(patterns: &'static [Pattern], steps: u32, stepping: Stepping) -> Self {
        assert!(!patterns.is_empty(), "a show needs at least one pattern");
        Self {
            patterns,
            steps,
            stepping,
        }
    }

    /// Patterns a cycle is drawn from, uniformly.
    #[must_use]
    pub const fn patterns(&self) -> &'static [Pattern] {
        self.patterns
    }

    /// Frames per cycle.
    #[must_use]
    pub const fn steps(&self) -> u32 {
        self.steps
    }

    /// How time indices are assigned to cycles.
    #[must_use]
    pub const fn stepping(&self) -> Stepping {
        self.stepping
    }
}

/// One run of a single pattern in a single direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub struct Cycle {
    /// Pattern rendered every frame.
    pub pattern: Pattern,
    /// Direction the time index moves.
    pub direction: Direction,
    /// Time index of the first frame.
    pub start: u32,
    /// Number of frames.
    pub steps: u32,
}

impl Cycle {
    /// Time index of every frame, in play order. Wraps at the ends of `u32`.
    pub fn time_indices(&self) -> impl Iterator<Item = u32> + use<> {
        let Self {
            start, direction, ..
        } = *self;
        (0..self.steps).map(move |step| match direction {
            Direction::Forward => start.wrapping_add(step),
            Direction::Backward => start.wrapping_sub(step),
        })
    }
}

/// Plays a [`Show`] on a strip of `N` pixels.
pub struct Animator<const N: usize> {
    show: Show,
    layout: Layout<N>,
    time_index: u32,
    rng: fastrand::Rng,
    frame: Frame1d<N>,
}

impl<const N: usize> Animator<N> {
    /// Creates an animator at time index 0 with a generator seeded by `seed`.
    ///
    /// The same seed always yields the same sequence of cycles and random frames.
    #[must_use]
    pub const fn new(show: Show, layout: Layout<N>, seed: u64) -> Self {
        Self {
            show,
            layout,
            time_index: 0,
            rng: fastrand::Rng::with_seed(seed),
            frame: Frame1d::new(),
        }
    }

    /// The continuous time index: where the next [`Stepping::Continuous`] cycle starts.
    #[must_use]
    pub const fn time_index(&self) -> u32 {
        self.time_index
    }

    /// The frame most recently rendered.
    #[must_use]
    pub const fn frame(&self) -> &Frame1d<N> {
        &self.frame
    }

    /// Picks the next cycle: a uniformly random pattern from the show and a 50/50 direction.
    ///
    /// For [`Stepping::Continuous`] the animator's time index moves past the whole cycle, so
    /// the next cycle continues where this one ends.
    pub fn next_cycle(&mut self) -> Cycle {
        let pattern = *self
            .rng
            .choice(self.show.patterns)
            .expect("Show::new rejects an empty pattern list");
        let direction = if self.rng.bool() {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let steps = self.show.steps;

        let start = match self.show.stepping {
            Stepping::Continuous => {
                let start = self.time_index;
                self.time_index = match direction {
                    Direction::Forward => start.wrapping_add(steps),
                    Direction::Backward => start.wrapping_sub(steps),
                };
                start
            }
            Stepping::Mirrored => match direction {
                Direction::Forward => 0,
                Direction::Backward => steps.saturating_sub(1),
            },
        };

        Cycle {
            pattern,
            direction,
            start,
            steps,
        }
    }

    /// Plays `cycle`: for each time index renders a frame, writes it to `sink` unless the
    /// pattern holds, and sleeps [`FRAME_INTERVAL`].
    pub async fn play(
        &mut self,
        cycle: &Cycle,
        sink: &mut impl PixelSink,
        delay: &mut impl DelayNs,
    ) {
        let frame_interval_us =
            u32::try_from(FRAME_INTERVAL.as_micros()).unwrap_or(u32::MAX);
        for time_index in cycle.time_indices() {
            let emit = cycle
                .pattern
                .render(time_index, &self.layout, &mut self.rng, &mut self.frame);
            if emit == Emit::Frame {
                write_frame(sink, &self.frame).await;
            }
            delay.delay_us(frame_interval_us).await;
        }
    }
}
