//! Spotlight mode: light exactly one pixel and let a button or a serial port choose which.
//!
//! Holding the button at power-up selects [`Mode::Spotlight`] instead of the animation.
//! An input task then writes the selection into a shared [`Spotlight`] while the render
//! loop keeps redrawing it:
//!
//! - the strip demo advances the selection on each debounced button press
//!   ([`Spotlight::on_falling_edge`]);
//! - the tree demo sets it to each byte received on the serial port
//!   ([`Spotlight::select_byte`]), so positions can be captured pixel by pixel.
//!
//! ```
//! use christmas_lights::spotlight::Spotlight;
//! use embassy_time::Instant;
//!
//! let spotlight = Spotlight::<4>::new();
//! assert!(spotlight.on_falling_edge(Instant::from_millis(1_000)));
//! assert!(!spotlight.on_falling_edge(Instant::from_millis(1_020))); // bounce
//! assert!(spotlight.on_falling_edge(Instant::from_millis(1_100)));
//! assert_eq!(spotlight.current(), 2);
//! ```

use embassy_time::{Duration, Instant};
use embedded_io_async::Read;
use portable_atomic::{AtomicU64, AtomicUsize, Ordering};

use crate::color::{OFF, WHITE};
use crate::led_strip::Frame1d;
use crate::{Error, Result};

/// Edges closer than this to the last accepted edge are treated as contact bounce.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(50);

/// No edge accepted yet.
const NO_EDGE: u64 = u64::MAX;

/// What the firmware does for its whole run, decided once at power-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, defmt::Format)]
pub enum Mode {
    /// Cycle through the show's patterns forever.
    Animating,
    /// Light one selectable pixel.
    Spotlight,
}

impl Mode {
    /// The mode for a button that is (or is not) held while the board starts.
    ///
    /// ```
    /// use christmas_lights::spotlight::Mode;
    ///
    /// assert_eq!(Mode::at_startup(true), Mode::Spotlight);
    /// assert_eq!(Mode::at_startup(false), Mode::Animating);
    /// ```
    #[must_use]
    pub const fn at_startup(button_pressed: bool) -> Self {
        if button_pressed {
            Self::Spotlight
        } else {
            Self::Animating
        }
    }
}

/// The selected pixel on a strip of `N`, shared between an input task and the render loop.
///
/// Designed to live in a `static`; every field is a single atomic word.
pub struct Spotlight<const N: usize> {
    index: AtomicUsize,
    last_edge_ticks: AtomicU64,
}

impl<const N: usize> Spotlight<N> {
    /// Selects pixel 0 with no edge seen yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            index: AtomicUsize::new(0),
            last_edge_ticks: AtomicU64::new(NO_EDGE),
        }
    }

    /// Index of the selected pixel. May be `>= N` after [`select_byte`](Self::select_byte).
    #[must_use]
    pub fn current(&self) -> usize {
        self.index.load(Ordering::Acquire)
    }

    /// Whether the selection names a pixel on this strip.
    #[must_use]
    pub fn lights_pixel(&self) -> bool {
        self.current() < N
    }

    /// Starts the debounce window at `now` as if an edge had just been accepted, so edges
    /// in the first [`DEBOUNCE_WINDOW`] after `now` are ignored.
    ///
    /// Called at power-up, while the button that selected spotlight mode may still be
    /// bouncing on release.
    pub fn hold_off_from(&self, now: Instant) {
        self.last_edge_ticks.store(now.as_ticks(), Ordering::Release);
    }

    /// Handles a button press edge seen at `now`.
    ///
    /// Advances the selection by one, wrapping to 0 after the last pixel, unless the
    /// previous accepted edge (or [`hold_off_from`](Self::hold_off_from)) was less than
    /// [`DEBOUNCE_WINDOW`] earlier. Without either, the first edge is always accepted.
    /// Returns whether this edge was accepted.
    pub fn on_falling_edge(&self, now: Instant) -> bool {
        let last = self.last_edge_ticks.load(Ordering::Acquire);
        if last != NO_EDGE {
            let within_window = now
                .checked_duration_since(Instant::from_ticks(last))
                .is_none_or(|elapsed| elapsed < DEBOUNCE_WINDOW);
            if within_window {
                return false;
            }
        }
        self.last_edge_ticks.store(now.as_ticks(), Ordering::Release);

        let next = self
            .current()
            .checked_add(1)
            .filter(|&next| next < N)
            .unwrap_or(0);
        self.index.store(next, Ordering::Release);
        true
    }

    /// Selects pixel `byte` as received, without range checking.
    ///
    /// Returns whether `byte` names a pixel; if it does not, nothing is lit until the next
    /// selection.
    pub fn select_byte(&self, byte: u8) -> bool {
        self.index.store(usize::from(byte), Ordering::Release);
        usize::from(byte) < N
    }

    /// Draws the selected pixel white and every other pixel off.
    pub fn render(&self, frame: &mut Frame1d<N>) {
        let current = self.current();
        for (index, word) in frame.iter_mut().enumerate() {
            *word = if index == current { WHITE } else { OFF };
        }
    }
}

impl<const N: usize> Default for Spotlight<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Waits for one byte from `reader` and selects it.
///
/// # Errors
///
/// Returns [`Error::SerialRead`] if the reader fails and [`Error::SerialClosed`] if it
/// reports end of input.
pub async fn read_serial_selection<const N: usize>(
    reader: &mut impl Read,
    spotlight: &Spotlight<N>,
) -> Result<u8> {
    let mut buffer = [0_u8; 1];
    match reader.read(&mut buffer).await {
        Ok(0) => Err(Error::SerialClosed),
        Ok(_) => {
            let [byte] = buffer;
            spotlight.select_byte(byte);
            Ok(byte)
        }
        Err(_) => Err(Error::SerialRead),
    }
}

#[cfg(not(feature = "host"))]
mod device_loop {
    use defmt::{info, warn};
    use embassy_time::{Instant, Timer};
    use embedded_io_async::Read;

    use super::{Spotlight, read_serial_selection};
    use crate::animation::FRAME_INTERVAL;
    use crate::button::Button;
    use crate::led_strip::{Frame1d, PixelSink, write_frame};

    /// Redraws the selection every [`FRAME_INTERVAL`], forever.
    pub async fn spotlight_render_loop<const N: usize>(
        spotlight: &Spotlight<N>,
        sink: &mut impl PixelSink,
    ) -> ! {
        info!("Spotlight mode on {} pixels", N);
        let mut frame = Frame1d::<N>::new();
        loop {
            spotlight.render(&mut frame);
            write_frame(sink, &frame).await;
            Timer::after(FRAME_INTERVAL).await;
        }
    }

    /// Advances the selection on every debounced button press, forever.
    pub async fn spotlight_edge_loop<const N: usize>(
        mut button: Button<'static>,
        spotlight: &Spotlight<N>,
    ) -> ! {
        spotlight.hold_off_from(Instant::now());
        loop {
            button.wait_for_press_edge().await;
            if spotlight.on_falling_edge(Instant::now()) {
                info!("Spotlight on pixel {}", spotlight.current());
            }
        }
    }

    /// Selects each byte read from `reader`, forever.
    ///
    /// Read errors are logged and the loop keeps listening.
    pub async fn spotlight_serial_loop<const N: usize>(
        mut reader: impl Read,
        spotlight: &Spotlight<N>,
    ) -> ! {
        loop {
            match read_serial_selection(&mut reader, spotlight).await {
                Ok(byte) if spotlight.lights_pixel() => info!("Spotlight on pixel {}", byte),
                Ok(byte) => warn!("Pixel {} is past the end of the strip ({})", byte, N),
                Err(err) => {
                    warn!("Serial selection failed: {}", defmt::Display2Format(&err));
                    Timer::after(FRAME_INTERVAL).await;
                }
            }
        }
    }
}

#[cfg(not(feature = "host"))]
pub use device_loop::{spotlight_edge_loop, spotlight_render_loop, spotlight_serial_loop};
