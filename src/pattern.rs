//! Procedural patterns: one frame of pixel words per time index.
//!
//! Every pattern is a function of the time index `t`, the pixel index and (for the tree
//! patterns) the pixel's [`Position`](crate::layout::Position). Only [`Pattern::Random`]
//! and [`Pattern::Sparkle`] draw from the random number generator.
//!
//! See [`STRIP_PATTERNS`] and [`TREE_PATTERNS`] for the sets each demo cycles through.
//!
//! # Example
//!
//! ```
//! use christmas_lights::color::{BLUE, GREEN, OFF, RED};
//! use christmas_lights::layout::Layout;
//! use christmas_lights::led_strip::{Emit, Frame1d};
//! use christmas_lights::pattern::Pattern;
//!
//! let layout = Layout::<64>::linear();
//! let mut rng = fastrand::Rng::with_seed(7);
//! let mut frame = Frame1d::new();
//!
//! let emit = Pattern::Snakes.render(0, &layout, &mut rng, &mut frame);
//! assert_eq!(emit, Emit::Frame);
//! assert_eq!([frame[0], frame[12], frame[20], frame[35]], [RED, OFF, GREEN, BLUE]);
//! ```

mod spatial;
mod strip;

pub use spatial::{sweep_threshold, spin_lit, spin_reference};

use crate::layout::Layout;
use crate::led_strip::{Emit, Frame1d};

/// A lighting pattern, selectable at runtime and named for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Pattern {
    /// Red, green and blue bands of ten pixels crawling along the strip, one pixel every
    /// two frames.
    Snakes,
    /// Every pixel set to a random word, refreshed every eighth frame.
    Random,
    /// About one pixel in sixteen fully on, re-rolled every eighth frame.
    Sparkle,
    /// A grey ramp that brightens by one step per pixel and shifts with time.
    Greys,
    /// A horizontal plane moving up and down the tree: red above, green below.
    UpDownSweep,
    /// A vertical plane moving left and right, splitting the tree into complementary hues.
    LeftRightSweep,
    /// Rainbow bands stacked by height, cycling through the hues.
    UpDownRainbow,
    /// Rainbow bands ordered front to back, cycling through the hues.
    ForwardBackwardRainbow,
    /// A white blade sweeping around the trunk.
    Spin,
    /// Two opposite white blades sweeping around the trunk.
    DoubleSpin,
}

impl Pattern {
    /// Display name, logged when a cycle starts.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Snakes => "Snakes!",
            Self::Random => "Random data",
            Self::Sparkle => "Sparkles",
            Self::Greys => "Greys",
            Self::UpDownSweep => "Up-down sweep",
            Self::LeftRightSweep => "Left-right sweep",
            Self::UpDownRainbow => "Up-down rainbow",
            Self::ForwardBackwardRainbow => "Forward-backward rainbow",
            Self::Spin => "Spin",
            Self::DoubleSpin => "Double spin",
        }
    }

    /// Renders the frame for time index `t` into `frame`.
    ///
    /// Returns [`Emit::Hold`] when the pattern leaves this frame untouched and nothing
    /// should be transmitted, so the strip keeps showing the last frame it latched.
    pub fn render<const N: usize>(
        self,
        t: u32,
        layout: &Layout<N>,
        rng: &mut fastrand::Rng,
        frame: &mut Frame1d<N>,
    ) -> Emit {
        match self {
            Self::Snakes => strip::snakes(t, frame),
            Self::Random => strip::random(t, rng, frame),
            Self::Sparkle => strip::sparkle(t, rng, frame),
            Self::Greys => strip::greys(t, frame),
            Self::UpDownSweep => spatial::up_down_sweep(t, layout, frame),
            Self::LeftRightSweep => spatial::left_right_sweep(t, layout, frame),
            Self::UpDownRainbow => spatial::rainbow(t, layout, frame, |position| position.y),
            Self::ForwardBackwardRainbow => {
                spatial::rainbow(t, layout, frame, |position| position.z)
            }
            Self::Spin => spatial::spin(t, layout, frame, false),
            Self::DoubleSpin => spatial::spin(t, layout, frame, true),
        }
    }
}

/// Patterns for a plain strip. None of them look at positions.
pub const STRIP_PATTERNS: &[Pattern] = &[
    Pattern::Snakes,
    Pattern::Random,
    Pattern::Sparkle,
    Pattern::Greys,
];

/// Patterns for the tree, led by the position-aware ones.
pub const TREE_PATTERNS: &[Pattern] = &[
    Pattern::UpDownSweep,
    Pattern::LeftRightSweep,
    Pattern::UpDownRainbow,
    Pattern::ForwardBackwardRainbow,
    Pattern::Spin,
    Pattern::DoubleSpin,
    Pattern::Snakes,
    Pattern::Sparkle,
];
