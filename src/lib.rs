//! Procedural christmas-light patterns for WS2812 strips on the Pico 1 and 2.
//!
//! The crate has two halves:
//!
//! - A pure core that runs anywhere: the [color model](mod@color), the
//!   [pattern generators](mod@pattern), the 3D [layout](mod@layout) of pixels on a tree,
//!   the [animation driver](mod@animation) and the [spotlight](mod@spotlight) input mode.
//! - Thin device adapters (PIO pixel sink, button) used by the firmware images in `demos/`.
//!
//! # Glossary
//!
//! - **GRB word:** packed color with green in bits 16..24, red in 8..16 and blue in 0..8.
//! - **Frame:** one full pass writing a word to every pixel index in order.
//! - **Time index:** the abstract animation clock handed to patterns, one step per frame.
//! - **Spotlight mode:** manual single-pixel mode chosen by holding the button at power-up.
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):**
//!   the RP2040 and RP2350 state machines that generate the WS2812 bitstream.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

pub mod animation;
#[cfg(not(feature = "host"))]
pub mod button;
pub mod color;
mod error;
pub mod layout;
pub mod led_strip;
pub mod pattern;
pub mod spotlight;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};

/// Number of pixels on the plain strip driven by the strip demo.
pub const STRIP_LEN: usize = 200;

/// Number of pixels on the tree, fixed by the generated position table.
pub const TREE_LEN: usize = layout::POSITIONS.len();
