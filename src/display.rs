//! Display variant description

use display_interface::{DisplayError, WriteOnlyDataCommand};

use crate::vcc::VccSource;

/// Geometry and power-on behaviour of one physical module.
pub trait DisplayVariant {
    /// Width of the controller frame in pixels
    const WIDTH: u8;
    /// Height of the controller frame in pixels, a multiple of 8
    const HEIGHT: u8;
    /// Column of the controller frame shown at the left edge of the panel
    const X_OFFSET: i32;
    /// Row of the controller frame shown at the top edge of the panel
    const Y_OFFSET: i32;
    /// Width of the part of the frame wired to glass
    const VISIBLE_WIDTH: u8;
    /// Height of the part of the frame wired to glass
    const VISIBLE_HEIGHT: u8;

    /// Controller frame dimensions as `(width, height)`
    fn dimensions() -> (u8, u8) {
        (Self::WIDTH, Self::HEIGHT)
    }

    /// Number of 8 pixel tall pages in the controller frame
    fn pages() -> u8 {
        Self::HEIGHT / 8
    }

    /// Send the power-on configuration sequence, leaving the display switched on in horizontal
    /// addressing mode.
    fn init_column_mode<DI>(iface: &mut DI, vcc: VccSource) -> Result<(), DisplayError>
    where
        DI: WriteOnlyDataCommand;
}
