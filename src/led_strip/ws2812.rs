//! A [`PixelSink`] for WS2812-style LED strips driven by a CPU-fed PIO state machine.
//!
//! Each [`put_pixel`](PixelSink::put_pixel) pushes one word into the state machine's TX
//! FIFO and waits while the FIFO is full, so the renderer never runs ahead of the strip.
//!
//! # Example
//!
//! ```no_run
//! # #![no_std]
//! # #![no_main]
//! # use panic_probe as _;
//! use christmas_lights::color::WHITE;
//! use christmas_lights::led_strip::{Frame1d, write_frame, ws2812::Ws2812};
//!
//! # #[embassy_executor::main]
//! # async fn main(_spawner: embassy_executor::Spawner) -> ! {
//! let p = embassy_rp::init(Default::default());
//! let mut sink = Ws2812::new_pio0(p.PIO0, p.PIN_2);
//! write_frame(&mut sink, &Frame1d::<8>::filled(WHITE)).await;
//! core::future::pending().await
//! # }
//! ```

use embassy_rp::clocks::clk_sys_freq;
use embassy_rp::pio::program::{
    Assembler, JmpCondition, OutDestination, SetDestination, SideSet,
};
use embassy_rp::pio::{
    Common, Config, FifoJoin, Instance, LoadedProgram, Pio, PioPin, ShiftConfig,
    ShiftDirection, StateMachine,
};
use embassy_rp::{Peri, bind_interrupts};
use fixed::types::U24F8;
use static_cell::StaticCell;

use super::PixelSink;

// WS2812 bit timing in PIO cycles: T1 low-to-high lead, T2 data, T3 tail.
const T1: u8 = 2;
const T2: u8 = 5;
const T3: u8 = 3;
// Each instruction takes one cycle plus its delay.
const T1_DELAY: u8 = T1 - 1;
const T2_DELAY: u8 = T2 - 1;
const T3_DELAY: u8 = T3 - 1;
/// WS2812 data rate in kilohertz.
const WS2812_KHZ: u32 = 800;
/// State machine clock in kilohertz: one bit takes T1 + T2 + T3 cycles.
const PIO_KHZ: u32 = WS2812_KHZ * (T1 + T2 + T3) as u32;
/// Bits per pixel shifted out by the state machine.
const BITS_PER_PIXEL: u8 = 24;

bind_interrupts!(pub struct Pio0Irqs {
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<embassy_rp::peripherals::PIO0>;
});

static PIO0_COMMON: StaticCell<Common<'static, embassy_rp::peripherals::PIO0>> = StaticCell::new();

fn load_ws2812_program<'d, PIO: Instance>(common: &mut Common<'d, PIO>) -> LoadedProgram<'d, PIO> {
    let side_set = SideSet::new(false, 1, false);
    let mut assembler: Assembler<32> = Assembler::new_with_side_set(side_set);

    let mut wrap_target = assembler.label();
    let mut wrap_source = assembler.label();
    let mut do_zero = assembler.label();
    assembler.set_with_side_set(SetDestination::PINDIRS, 1, 0);
    assembler.bind(&mut wrap_target);
    assembler.out_with_delay_and_side_set(OutDestination::X, 1, T3_DELAY, 0);
    assembler.jmp_with_delay_and_side_set(JmpCondition::XIsZero, &mut do_zero, T1_DELAY, 1);
    assembler.jmp_with_delay_and_side_set(JmpCondition::Always, &mut wrap_target, T2_DELAY, 1);
    assembler.bind(&mut do_zero);
    assembler.nop_with_delay_and_side_set(T2_DELAY, 0);
    assembler.bind(&mut wrap_source);

    let program = assembler.assemble_with_wrap(wrap_source, wrap_target);
    common.load_program(&program)
}

/// CPU-fed WS2812 transmitter on one PIO state machine.
pub struct Ws2812<'d, PIO: Instance, const SM: usize> {
    sm: StateMachine<'d, PIO, SM>,
}

impl<'d, PIO: Instance, const SM: usize> Ws2812<'d, PIO, SM> {
    /// Loads the WS2812 program, configures the state machine for 800 kilohertz GRB output on
    /// `pin` and enables it.
    pub fn new(
        common: &mut Common<'d, PIO>,
        mut sm: StateMachine<'d, PIO, SM>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let program = load_ws2812_program(common);
        let mut cfg = Config::default();

        let out_pin = common.make_pio_pin(pin);
        cfg.set_out_pins(&[&out_pin]);
        cfg.set_set_pins(&[&out_pin]);
        cfg.use_program(&program, &[&out_pin]);

        let clock_khz = U24F8::from_num(clk_sys_freq() / 1000);
        cfg.clock_divider = clock_khz.saturating_div(U24F8::from_num(PIO_KHZ));

        cfg.fifo_join = FifoJoin::TxOnly;
        cfg.shift_out = ShiftConfig {
            auto_fill: true,
            threshold: BITS_PER_PIXEL,
            direction: ShiftDirection::Left,
        };

        sm.set_config(&cfg);
        sm.set_enable(true);

        Self { sm }
    }
}

impl Ws2812<'static, embassy_rp::peripherals::PIO0, 0> {
    /// Binds PIO0's interrupt and builds a transmitter on state machine 0.
    ///
    /// # Panics
    ///
    /// Panics if called more than once.
    pub fn new_pio0(
        pio: Peri<'static, embassy_rp::peripherals::PIO0>,
        pin: Peri<'static, impl PioPin>,
    ) -> Self {
        let Pio { common, sm0, .. } = Pio::new(pio, Pio0Irqs);
        // PIO0's shared registers stay owned for the life of the program.
        let common = PIO0_COMMON.init(common);
        Self::new(common, sm0, pin)
    }
}

impl<PIO: Instance, const SM: usize> PixelSink for Ws2812<'_, PIO, SM> {
    async fn put_pixel(&mut self, word: u32) {
        // Autopull takes the top 24 bits, so the GRB word moves up one byte.
        self.sm.tx().wait_push(word.wrapping_shl(8)).await;
    }
}
