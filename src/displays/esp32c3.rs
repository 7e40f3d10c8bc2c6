//! ESP32-C3 OLED module variant

use display_interface::{DisplayError, WriteOnlyDataCommand};

use crate::{display::DisplayVariant, vcc::VccSource};

/// SSD1306 driving a 72x40 panel that sits at column 28, row 24 of the 128x64 frame
#[derive(Debug, Clone, Copy, Default)]
pub struct Esp32c3Oled {}

impl DisplayVariant for Esp32c3Oled {
    const WIDTH: u8 = 128;
    const HEIGHT: u8 = 64;
    const X_OFFSET: i32 = 28;
    const Y_OFFSET: i32 = 24;
    const VISIBLE_WIDTH: u8 = 72;
    const VISIBLE_HEIGHT: u8 = 40;

    fn init_column_mode<DI>(iface: &mut DI, vcc: VccSource) -> Result<(), DisplayError>
    where
        DI: WriteOnlyDataCommand,
    {
        super::ssd1306::init_column_mode_common(iface, Self::dimensions(), vcc)
    }
}
