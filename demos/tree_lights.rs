//! Christmas lights on a tree whose pixel positions have been captured in 3D.
//!
//! Data on GPIO2, button to ground on GPIO5, UART0 on GPIO0 (TX) and GPIO1 (RX). Hold the
//! button while powering up to enter spotlight mode: the onboard LED turns on and each byte
//! received on the serial port lights that pixel, which is how positions are captured.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use christmas_lights::{
    Result, TREE_LEN,
    animation::{Animator, TREE_SHOW},
    button::{Button, PressedTo},
    layout::Layout,
    led_strip::ws2812::Ws2812,
    spotlight::{Mode, Spotlight, spotlight_render_loop, spotlight_serial_loop},
};
use defmt::info;
use embassy_executor::Spawner;
use embassy_futures::select::{Either, select};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, BufferedUart, Config};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

const DATA_PIN: u8 = 2;
const SEED: u64 = 0x7EE5_2025;
const UART_BUFFER_LEN: usize = 16;

bind_interrupts!(struct UartIrqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
});

static SPOTLIGHT: Spotlight<TREE_LEN> = Spotlight::new();
static TX_BUFFER: StaticCell<[u8; UART_BUFFER_LEN]> = StaticCell::new();
static RX_BUFFER: StaticCell<[u8; UART_BUFFER_LEN]> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());
    info!("WS2812 christmas tree, using pin {}", DATA_PIN);

    let mut sink = Ws2812::new_pio0(p.PIO0, p.PIN_2);
    let button = Button::new(p.PIN_5, PressedTo::Ground);

    match Mode::at_startup(button.is_pressed()) {
        Mode::Spotlight => {
            let _onboard_led = Output::new(p.PIN_25, Level::High);
            let uart = BufferedUart::new(
                p.UART0,
                p.PIN_0,
                p.PIN_1,
                UartIrqs,
                TX_BUFFER.init([0; UART_BUFFER_LEN]),
                RX_BUFFER.init([0; UART_BUFFER_LEN]),
                Config::default(),
            );
            // Both loops run forever; the render loop reads what the serial loop selects.
            match select(
                spotlight_render_loop(&SPOTLIGHT, &mut sink),
                spotlight_serial_loop(uart, &SPOTLIGHT),
            )
            .await
            {
                Either::First(never) | Either::Second(never) => never,
            }
        }
        Mode::Animating => {
            let mut animator = Animator::<TREE_LEN>::new(TREE_SHOW, Layout::tree(), SEED);
            loop {
                let cycle = animator.next_cycle();
                info!("{} ({})", cycle.pattern.name(), cycle.direction.as_str());
                animator.play(&cycle, &mut sink, &mut Delay).await;
            }
        }
    }
}
