//! Interface factory
//!
//! ```rust,no_run
//! use esp32c3_oled::{prelude::*, DEFAULT_ADDRESS};
//!
//! fn build<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<Esp32c3OledDisplay<I2C>, DisplayError> {
//!     let mut disp: Esp32c3OledDisplay<_> = Builder::new(Esp32c3Oled {})
//!         .with_vcc(VccSource::External)
//!         .connect_i2c(i2c, DEFAULT_ADDRESS)
//!         .into();
//!
//!     disp.init()?;
//!     Ok(disp)
//! }
//! ```

use display_interface::WriteOnlyDataCommand;
use hal::i2c::I2c;

use crate::{
    display::DisplayVariant, interface::I2cInterface, properties::DisplayProperties,
    vcc::VccSource,
};

/// Builder struct. Driver options and interface are set using its methods.
#[derive(Clone, Copy)]
pub struct Builder<DV> {
    variant: DV,
    vcc: VccSource,
}

impl<DV> Builder<DV>
where
    DV: DisplayVariant,
{
    /// Create new builder with the internal charge pump selected
    pub fn new(variant: DV) -> Self {
        Self {
            variant,
            vcc: VccSource::default(),
        }
    }

    /// Select where the panel supply comes from
    pub fn with_vcc(self, vcc: VccSource) -> Self {
        Self { vcc, ..self }
    }

    /// Finish the builder and use some interface to communicate with the display
    pub fn connect<DI>(self, interface: DI) -> DisplayProperties<DV, DI>
    where
        DI: WriteOnlyDataCommand,
    {
        DisplayProperties::new(self.variant, interface, self.vcc)
    }

    /// Finish the builder with an [`I2cInterface`] on `address`
    pub fn connect_i2c<I2C>(self, i2c: I2C, address: u8) -> DisplayProperties<DV, I2cInterface<I2C>>
    where
        I2C: I2c,
    {
        self.connect(I2cInterface::new(i2c, address))
    }
}
