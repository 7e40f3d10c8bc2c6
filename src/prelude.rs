//! Crate prelude

pub use display_interface::{DisplayError, WriteOnlyDataCommand};

pub use crate::{
    builder::Builder,
    display::DisplayVariant,
    displays::esp32c3::Esp32c3Oled,
    framebuffer::{Framebuffer, PixelOperation},
    interface::I2cInterface,
    mode::graphics::{Esp32c3OledDisplay, GraphicsMode},
    vcc::VccSource,
};
