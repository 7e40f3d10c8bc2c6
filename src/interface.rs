//! I2C transport for the SSD1306
//!
//! Every command byte travels in its own write, prefixed with a control byte that has the
//! continuation bit set and D/C# cleared (`0x80`). Pixel data goes out as one transaction made
//! of two adjacent writes, the data control byte (`0x40`) and then the payload, so there is no
//! stop condition between them and the payload slice never needs copying.

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use hal::i2c::{I2c, Operation};

/// Default 7-bit I2C address of the module.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Control byte preceding a single command byte (Co = 1, D/C# = 0).
pub const COMMAND_PREFIX: u8 = 0x80;

/// Control byte preceding a run of display RAM bytes (Co = 0, D/C# = 1).
pub const DATA_PREFIX: u8 = 0x40;

/// SSD1306 I2C interface
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface talking to the device at `address`.
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address in use.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and hand back the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> WriteOnlyDataCommand for I2cInterface<I2C>
where
    I2C: I2c,
{
    fn send_commands(&mut self, cmds: DataFormat<'_>) -> Result<(), DisplayError> {
        let DataFormat::U8(cmds) = cmds else {
            return Err(DisplayError::DataFormatNotImplemented);
        };

        for &cmd in cmds {
            self.i2c
                .write(self.address, &[COMMAND_PREFIX, cmd])
                .map_err(|_e| {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("command {=u8:#x} not acknowledged", cmd);
                    DisplayError::BusWriteError
                })?;
        }

        Ok(())
    }

    fn send_data(&mut self, buf: DataFormat<'_>) -> Result<(), DisplayError> {
        let DataFormat::U8(buf) = buf else {
            return Err(DisplayError::DataFormatNotImplemented);
        };

        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&[DATA_PREFIX]), Operation::Write(buf)],
            )
            .map_err(|_e| {
                #[cfg(feature = "defmt")]
                defmt::warn!("data transfer of {=usize} bytes failed", buf.len());
                DisplayError::BusWriteError
            })
    }
}
