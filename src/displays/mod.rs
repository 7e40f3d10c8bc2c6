//! Supported modules

pub mod esp32c3;
pub mod ssd1306;
