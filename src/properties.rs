//! Container to store and set display properties

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};

use crate::{command::Command, display::DisplayVariant, vcc::VccSource};

/// Display properties struct
pub struct DisplayProperties<DV, DI> {
    _variant: DV,
    iface: DI,
    vcc: VccSource,
}

impl<DV, DI> DisplayProperties<DV, DI>
where
    DI: WriteOnlyDataCommand,
    DV: DisplayVariant,
{
    /// Create new DisplayProperties instance
    pub fn new(variant: DV, iface: DI, vcc: VccSource) -> DisplayProperties<DV, DI> {
        DisplayProperties {
            _variant: variant,
            iface,
            vcc,
        }
    }

    /// Initialise the display in horizontal addressing mode (i.e. a byte walks down a column of
    /// 8 pixels and the column pointer wraps into the next page) with column 0 on the left and
    /// column _(display_width - 1)_ on the right.
    pub fn init_column_mode(&mut self) -> Result<(), DisplayError> {
        DV::init_column_mode(&mut self.iface, self.vcc)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("display initialised, vcc: {}", self.vcc);

        Ok(())
    }

    /// Send a full frame. The column and page windows are reset to cover the whole controller
    /// frame first, so `buffer` must hold `pages * width` bytes in page-major order.
    pub fn draw(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        let (width, _) = DV::dimensions();

        for cmd in [
            Command::ColumnAddress(0, width - 1),
            Command::PageAddress(0, DV::pages() - 1),
        ] {
            cmd.send(&mut self.iface)?;
        }

        self.iface.send_data(DataFormat::U8(buffer))
    }

    /// Get display dimensions
    pub fn get_dimensions(&self) -> (u8, u8) {
        DV::dimensions()
    }

    /// Get the supply configuration the display was set up with
    pub fn get_vcc(&self) -> VccSource {
        self.vcc
    }

    /// Turn the display on or off. The display can be drawn to and retains all
    /// of its memory even while off.
    pub fn display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        #[cfg(feature = "defmt")]
        defmt::debug!("display on: {}", on);

        Command::DisplayOn(on).send(&mut self.iface)
    }

    /// Set the display contrast
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        Command::Contrast(contrast).send(&mut self.iface)
    }

    /// Show RAM contents inverted (`true`) or normally (`false`)
    pub fn set_invert(&mut self, invert: bool) -> Result<(), DisplayError> {
        Command::Invert(invert).send(&mut self.iface)
    }

    /// Release the display interface
    pub fn release(self) -> DI {
        self.iface
    }
}
