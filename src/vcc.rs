//! Panel supply selection

/// Where the panel driving voltage comes from.
///
/// Selected once when the display is built; it changes the precharge period and the charge
/// pump setting written during initialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VccSource {
    /// The controller's internal charge pump generates VCC. Used by the ESP32-C3 module.
    #[default]
    Internal,
    /// VCC is supplied externally and the charge pump stays off.
    External,
}

impl VccSource {
    /// Precharge period register value: phase 2 in the high nibble, phase 1 in the low nibble.
    pub fn precharge(self) -> (u8, u8) {
        match self {
            VccSource::Internal => (0x1, 0xF),
            VccSource::External => (0x2, 0x2),
        }
    }

    /// Whether the internal charge pump must be enabled.
    pub fn charge_pump(self) -> bool {
        self == VccSource::Internal
    }
}
