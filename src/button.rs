//! The mode button: read once at power-up, then a source of press edges in spotlight mode.

use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pull};

/// Which rail the button closes the pin to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum PressedTo {
    /// To 3.3V, with the internal pull-down. Avoid on the RP2350, whose pull-downs can latch
    /// high (erratum E9).
    Voltage,
    /// To GND, with the internal pull-up. The demos wire it this way.
    Ground,
}

/// The mode button.
///
/// Holding it at power-up selects [`Mode::Spotlight`](crate::spotlight::Mode::Spotlight);
/// after that the strip demo hands it to the edge task. Edges are reported raw and
/// [`Spotlight::on_falling_edge`](crate::spotlight::Spotlight::on_falling_edge) debounces them.
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// use christmas_lights::button::{Button, PressedTo};
/// # #[panic_handler]
/// # fn panic(_info: &core::panic::PanicInfo) -> ! { loop {} }
///
/// async fn select_pixels(p: embassy_rp::Peripherals) {
///     let mut button = Button::new(p.PIN_5, PressedTo::Ground);
///     if button.is_pressed() {
///         loop {
///             button.wait_for_press_edge().await;
///         }
///     }
/// }
/// ```
pub struct Button<'a> {
    input: Input<'a>,
    pressed_to: PressedTo,
}

impl<'a> Button<'a> {
    /// Configures `pin` as an input pulled away from the rail named by `pressed_to`.
    #[must_use]
    pub fn new<P: embassy_rp::gpio::Pin>(pin: Peri<'a, P>, pressed_to: PressedTo) -> Self {
        let pull = match pressed_to {
            PressedTo::Voltage => Pull::Down,
            PressedTo::Ground => Pull::Up,
        };
        Self {
            input: Input::new(pin, pull),
            pressed_to,
        }
    }

    /// Whether the button is held right now.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        match self.pressed_to {
            PressedTo::Voltage => self.input.is_high(),
            PressedTo::Ground => self.input.is_low(),
        }
    }

    /// Waits for the pin edge that means "pressed": falling for [`PressedTo::Ground`],
    /// rising for [`PressedTo::Voltage`]. Interrupt driven, not debounced.
    pub async fn wait_for_press_edge(&mut self) {
        match self.pressed_to {
            PressedTo::Voltage => self.input.wait_for_rising_edge().await,
            PressedTo::Ground => self.input.wait_for_falling_edge().await,
        }
    }
}
