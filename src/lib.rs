//! Driver for the ESP32-C3 OLED module.
//!
//! The module pairs an SSD1306 controller with a small 72x40 panel. The controller still
//! addresses a full 128x64 frame, and only the window starting at column 28, row 24 is wired to
//! glass. This crate keeps a full-frame buffer in memory and shifts every drawing call by that
//! offset, so callers draw in panel coordinates starting at `(0, 0)`.
//!
//! ```rust,no_run
//! use esp32c3_oled::{prelude::*, DEFAULT_ADDRESS};
//!
//! fn run<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), DisplayError> {
//!     let mut disp = Esp32c3OledDisplay::connect(i2c, DEFAULT_ADDRESS, VccSource::Internal)?;
//!
//!     disp.rect(0, 0, 72, 40, 1);
//!     disp.text("Hello", 2, 2, 1);
//!     disp.ellipse(56, 11, 10, 8, 1, true);
//!     disp.show()
//! }
//! ```
//!
//! With the default `graphics` feature the display is also an [embedded-graphics] draw target
//! whose bounding box is the visible 72x40 window.
//!
//! [embedded-graphics]: https://docs.rs/embedded-graphics

#![no_std]

extern crate embedded_hal as hal;

pub mod builder;
pub mod command;
pub mod display;
pub mod displays;
pub mod framebuffer;
pub mod interface;
pub mod mode;
pub mod prelude;
pub mod properties;
pub mod vcc;

pub use crate::builder::Builder;
pub use crate::interface::{I2cInterface, DEFAULT_ADDRESS};
pub use crate::mode::graphics::{Esp32c3OledDisplay, GraphicsMode};
pub use display_interface::DisplayError;
