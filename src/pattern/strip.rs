//! Index-only patterns.

use crate::color::{ALL_ON, BLUE, GREEN, OFF, RED};
use crate::led_strip::{Emit, Frame1d};

const SNAKE_PERIOD: u32 = 64;
// Random and Sparkle refresh once per this many frames.
const REFRESH_EVERY: u32 = 8;
const SPARKLE_ODDS: u32 = 16;
// Greys stop short of full white to keep current draw down.
const GREY_LIMIT: u32 = 255;
const GREY_STEP: u32 = 0x01_01_01;

pub(super) fn snakes<const N: usize>(t: u32, frame: &mut Frame1d<N>) -> Emit {
    let offset = t / 2;
    for (index, word) in frame.iter_mut().enumerate() {
        #[expect(clippy::cast_possible_truncation, reason = "wrapping like the hardware clock")]
        let x = (index as u32).wrapping_add(offset) % SNAKE_PERIOD;
        *word = match x {
            0..10 => RED,
            15..25 => GREEN,
            30..40 => BLUE,
            _ => OFF,
        };
    }
    Emit::Frame
}

pub(super) fn random<const N: usize>(t: u32, rng: &mut fastrand::Rng, frame: &mut Frame1d<N>) -> Emit {
    if !t.is_multiple_of(REFRESH_EVERY) {
        return Emit::Hold;
    }
    for word in frame.iter_mut() {
        *word = rng.u32(..);
    }
    Emit::Frame
}

pub(super) fn sparkle<const N: usize>(t: u32, rng: &mut fastrand::Rng, frame: &mut Frame1d<N>) -> Emit {
    if !t.is_multiple_of(REFRESH_EVERY) {
        return Emit::Hold;
    }
    for word in frame.iter_mut() {
        *word = if rng.u32(..SPARKLE_ODDS) == 0 { ALL_ON } else { OFF };
    }
    Emit::Frame
}

pub(super) fn greys<const N: usize>(t: u32, frame: &mut Frame1d<N>) -> Emit {
    let mut grey = t % GREY_LIMIT;
    for word in frame.iter_mut() {
        *word = grey.wrapping_mul(GREY_STEP);
        grey = grey.wrapping_add(1) % GREY_LIMIT;
    }
    Emit::Frame
}
