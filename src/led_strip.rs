//! Frames of packed pixel words and the [`PixelSink`] they are written to.
//!
//! A [`PixelSink`] accepts one GRB word per call and transmits it to the strip; the
//! caller must push exactly `N` words per frame, in physical order, with no gaps. The
//! strip latches the frame once the data line stays idle past the WS2812 reset time,
//! which the frame sleep in [`Animator::play`](crate::animation::Animator::play)
//! guarantees.
//!
//! On hardware the sink is [`ws2812::Ws2812`], a CPU-fed PIO state machine.
//!
//! # Example
//!
//! ```
//! use christmas_lights::color::{BLUE, WHITE};
//! use christmas_lights::led_strip::Frame1d;
//!
//! let mut frame = Frame1d::<8>::filled(BLUE);
//! frame[3] = WHITE;
//! assert_eq!(frame.iter().filter(|&&word| word == WHITE).count(), 1);
//! ```

use core::ops::{Deref, DerefMut};

use crate::color::OFF;

#[cfg(not(feature = "host"))]
pub mod ws2812;

/// Packed GRB pixel words for a strip of `N` LEDs.
///
/// Frames deref to `[u32; N]`, so you can mutate pixels directly before writing them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame1d<const N: usize>(pub [u32; N]);

impl<const N: usize> Frame1d<N> {
    /// Create a new blank (all off) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([OFF; N])
    }

    /// Create a frame filled with a single word.
    #[must_use]
    pub const fn filled(word: u32) -> Self {
        Self([word; N])
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [u32; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a rendered frame should be transmitted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum Emit {
    /// The frame buffer holds a new frame; write all of it.
    Frame,
    /// Transmit nothing. The strip keeps showing the frame it last latched.
    Hold,
}

/// Accepts one packed pixel word at a time and transmits it to the LED strip.
///
/// `put_pixel` may wait for the hardware to accept the word; that wait is the only
/// backpressure between the renderer and the strip's fixed bit rate.
pub trait PixelSink {
    /// Transmit the next pixel in physical order.
    async fn put_pixel(&mut self, word: u32);
}

impl<T: PixelSink + ?Sized> PixelSink for &mut T {
    async fn put_pixel(&mut self, word: u32) {
        (**self).put_pixel(word).await;
    }
}

/// Writes every word of `frame` to `sink`, index 0 first.
pub async fn write_frame<const N: usize>(sink: &mut impl PixelSink, frame: &Frame1d<N>) {
    for &word in frame.iter() {
        sink.put_pixel(word).await;
    }
}
