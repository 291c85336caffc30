//! Position-aware tree patterns.

use core::f32::consts::{PI, TAU};

use crate::color::{GREEN, HUE_PERIOD, OFF, RED, WHITE, hsv_to_grb};
use crate::layout::{Layout, Position};
use crate::led_strip::{Emit, Frame1d};

/// The sweep plane travels from 0 to this height and back.
const SWEEP_SPAN: u32 = 1000;
/// Frames for one full there-and-back sweep.
const SWEEP_PERIOD: u32 = 200;
/// Left-right sweep is centered on the trunk.
const SWEEP_CENTER: i32 = 500;
/// Coordinate units per degree of hue in the rainbows.
const RAINBOW_SCALE: i64 = 10;
/// Plane movement per frame.
const SWEEP_STEP: u32 = 2 * SWEEP_SPAN / SWEEP_PERIOD;
/// Frames per revolution of the spin patterns.
const SPIN_PERIOD: u32 = 100;
/// Radians either side of a blade that still light up.
const SPIN_HALF_WIDTH: f32 = 0.2;

/// Position of the sweep plane at time `t`, bouncing between 0 and 1000.
///
/// ```
/// use christmas_lights::pattern::sweep_threshold;
///
/// assert_eq!(sweep_threshold(0), 0);
/// assert_eq!(sweep_threshold(100), 1000);
/// assert_eq!(sweep_threshold(150), 500);
/// assert_eq!(sweep_threshold(200), 0);
/// ```
#[must_use]
#[expect(clippy::cast_possible_wrap, reason = "bounded by SWEEP_SPAN")]
pub const fn sweep_threshold(t: u32) -> i32 {
    let travelled = (t % SWEEP_PERIOD).wrapping_mul(SWEEP_STEP);
    let folded = if travelled <= SWEEP_SPAN {
        travelled
    } else {
        SWEEP_SPAN.wrapping_mul(2).wrapping_sub(travelled)
    };
    folded as i32
}

/// Angle of the spin blade at time `t`, in `-π..π`.
#[must_use]
pub const fn spin_reference(t: u32) -> f32 {
    #[expect(clippy::cast_precision_loss, reason = "t % SPIN_PERIOD is small")]
    let phase = (t % SPIN_PERIOD) as f32 / SPIN_PERIOD as f32;
    (phase - 0.5) * TAU
}

/// Whether a pixel at `angle` is within the blade at `reference`, or with `double` also the
/// blade opposite it. Distances wrap around the circle.
#[must_use]
pub fn spin_lit(angle: f32, reference: f32, double: bool) -> bool {
    near(angle, reference) || (double && near(angle, reference + PI))
}

fn near(angle: f32, reference: f32) -> bool {
    let mut distance = libm::fmodf(angle - reference, TAU);
    if distance < 0.0 {
        distance += TAU;
    }
    distance.min(TAU - distance) <= SPIN_HALF_WIDTH
}

#[expect(clippy::cast_possible_truncation, reason = "reduced modulo HUE_PERIOD")]
const fn hue_at(t: u32) -> u16 {
    (t % HUE_PERIOD as u32) as u16
}

pub(super) fn up_down_sweep<const N: usize>(t: u32, layout: &Layout<N>, frame: &mut Frame1d<N>) -> Emit {
    let threshold = sweep_threshold(t);
    for (word, position) in frame.iter_mut().zip(layout.positions()) {
        *word = if i32::from(position.y) > threshold { RED } else { GREEN };
    }
    Emit::Frame
}

pub(super) fn left_right_sweep<const N: usize>(t: u32, layout: &Layout<N>, frame: &mut Frame1d<N>) -> Emit {
    let threshold = sweep_threshold(t).wrapping_sub(SWEEP_CENTER);
    let hue = hue_at(t);
    let near_side = hsv_to_grb(hue, u8::MAX, u8::MAX);
    let far_side = hsv_to_grb(hue.wrapping_add(HUE_PERIOD / 2), u8::MAX, u8::MAX);
    for (word, position) in frame.iter_mut().zip(layout.positions()) {
        *word = if i32::from(position.x) > threshold { near_side } else { far_side };
    }
    Emit::Frame
}

pub(super) fn rainbow<const N: usize>(
    t: u32,
    layout: &Layout<N>,
    frame: &mut Frame1d<N>,
    axis: fn(&Position) -> i16,
) -> Emit {
    for (word, position) in frame.iter_mut().zip(layout.positions()) {
        let hue = (i64::from(axis(position)) / RAINBOW_SCALE)
            .wrapping_add(i64::from(t))
            .rem_euclid(i64::from(HUE_PERIOD));
        *word = hsv_to_grb(u16::try_from(hue).unwrap_or_default(), u8::MAX, u8::MAX);
    }
    Emit::Frame
}

pub(super) fn spin<const N: usize>(t: u32, layout: &Layout<N>, frame: &mut Frame1d<N>, double: bool) -> Emit {
    let reference = spin_reference(t);
    for (word, &angle) in frame.iter_mut().zip(layout.angles()) {
        *word = if spin_lit(angle, reference, double) { WHITE } else { OFF };
    }
    Emit::Frame
}
