//! The color model: packing RGB and HSV colors into GRB transmission words.
//!
//! Every pattern produces packed `u32` words rather than [`RGB8`] values so that a pattern
//! can fill all 32 bits (see [`Pattern::Random`](crate::pattern::Pattern::Random)).
//! The WS2812 sink transmits the low 24 bits, green first.

use smart_leds::RGB8;
use smart_leds::hsv::{Hsv, hsv2rgb};

/// An unlit pixel.
pub const OFF: u32 = 0;

/// Full white on all three color channels.
pub const WHITE: u32 = pack_color(0xff, 0xff, 0xff);

/// Full red.
pub const RED: u32 = pack_color(0xff, 0, 0);

/// Full green.
pub const GREEN: u32 = pack_color(0, 0xff, 0);

/// Full blue.
pub const BLUE: u32 = pack_color(0, 0, 0xff);

/// Every bit set, including the top byte that RGBW parts use for the white channel.
pub const ALL_ON: u32 = 0xffff_ffff;

/// Hue period of [`hsv_to_grb`], in degrees.
pub const HUE_PERIOD: u16 = 360;

const DEGREES_PER_TURN: u32 = HUE_PERIOD as u32;
/// Hue steps around the [`smart_leds::hsv`] wheel.
const WHEEL_STEPS: u32 = 256;

/// Packs a color into a GRB word: green in bits 16..24, red in 8..16, blue in 0..8.
///
/// ```
/// use christmas_lights::color::pack_color;
///
/// assert_eq!(pack_color(0x12, 0x34, 0x56), 0x0034_1256);
/// ```
#[must_use]
pub const fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    u32::from_be_bytes([0, g, r, b])
}

/// Converts an HSV color to a GRB word.
///
/// `hue` is in degrees and taken modulo [`HUE_PERIOD`], then scaled onto the `0..=255` hue
/// wheel of [`smart_leds::hsv`], which splits it into six sectors and interpolates linearly
/// inside each one. Red, green and blue land exactly on 0°, 120° and 240°.
///
/// ```
/// use christmas_lights::color::{GREEN, RED, hsv_to_grb};
///
/// assert_eq!(hsv_to_grb(0, 255, 255), RED);
/// assert_eq!(hsv_to_grb(480, 255, 255), GREEN);
/// ```
#[must_use]
pub fn hsv_to_grb(hue: u16, sat: u8, val: u8) -> u32 {
    let wheel = u32::from(hue % HUE_PERIOD).wrapping_mul(WHEEL_STEPS) / DEGREES_PER_TURN;
    let hue = u8::try_from(wheel).unwrap_or(u8::MAX);
    rgb8_to_grb(hsv2rgb(Hsv { hue, sat, val }))
}

/// Converts a [`RGB8`] (for example one of [`smart_leds::colors`]) to a GRB word.
#[must_use]
pub const fn rgb8_to_grb(color: RGB8) -> u32 {
    pack_color(color.r, color.g, color.b)
}
