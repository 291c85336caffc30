//! Christmas lights on a plain 200-pixel WS2812 strip.
//!
//! Data on GPIO2, button to ground on GPIO5. Hold the button while powering up to enter
//! spotlight mode: the onboard LED turns on and each press moves the lit pixel along.
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use christmas_lights::{
    Result, STRIP_LEN,
    animation::{Animator, STRIP_SHOW},
    button::{Button, PressedTo},
    layout::Layout,
    led_strip::ws2812::Ws2812,
    spotlight::{Mode, Spotlight, spotlight_edge_loop, spotlight_render_loop},
};
use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

const DATA_PIN: u8 = 2;
const SEED: u64 = 0x5EED_2025;

static SPOTLIGHT: Spotlight<STRIP_LEN> = Spotlight::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());
    info!("WS2812 christmas lights, using pin {}", DATA_PIN);

    let mut sink = Ws2812::new_pio0(p.PIO0, p.PIN_2);
    let button = Button::new(p.PIN_5, PressedTo::Ground);

    match Mode::at_startup(button.is_pressed()) {
        Mode::Spotlight => {
            let _onboard_led = Output::new(p.PIN_25, Level::High);
            spawner.spawn(edge_task(button))?;
            spotlight_render_loop(&SPOTLIGHT, &mut sink).await
        }
        Mode::Animating => {
            let mut animator = Animator::<STRIP_LEN>::new(STRIP_SHOW, Layout::linear(), SEED);
            loop {
                let cycle = animator.next_cycle();
                info!("{} ({})", cycle.pattern.name(), cycle.direction.as_str());
                animator.play(&cycle, &mut sink, &mut Delay).await;
            }
        }
    }
}

#[embassy_executor::task]
async fn edge_task(button: Button<'static>) -> ! {
    spotlight_edge_loop(button, &SPOTLIGHT).await
}
