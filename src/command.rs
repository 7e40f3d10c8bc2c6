//! SSD1306 commands

use display_interface::{DataFormat::U8, DisplayError, WriteOnlyDataCommand};

/// SSD1306 commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Set contrast. Higher number is higher contrast. Default = 0x7F
    Contrast(u8),
    /// Turn entire display on. If set, all pixels will
    /// be set to on, if not, the value in memory will be used.
    AllOn(bool),
    /// Invert display.
    Invert(bool),
    /// Turn display on or off.
    DisplayOn(bool),
    /// Set memory addressing mode
    AddressMode(AddrMode),
    /// Set the column window for horizontal addressing: start, end (inclusive)
    ColumnAddress(u8, u8),
    /// Set the page window for horizontal addressing: start, end (inclusive)
    PageAddress(u8, u8),
    /// Set display start line from 0-63
    StartLine(u8),
    /// Reverse columns from 127-0
    SegmentRemap(bool),
    /// Set multipex ratio from 15-63 (MUX-1)
    Multiplex(u8),
    /// Scan from COM[n-1] to COM0 (where N is mux ratio)
    ReverseComDir(bool),
    /// Set vertical shift
    DisplayOffset(u8),
    /// Setup com hardware configuration
    /// Value indicates alternative (true) or sequential (false) pin layout
    ComPinConfig(bool),
    /// Set up display clock.
    /// First value is oscillator frequency, increasing with higher value
    /// Second value is divide ratio - 1
    DisplayClockDiv(u8, u8),
    /// Set up phase 1 and 2 of precharge period. each value is from 0-63
    PreChargePeriod(u8, u8),
    /// Set Vcomh Deselect level
    VcomhDeselect(VcomhLevel),
    /// Enable or disable the internal charge pump
    ChargePump(bool),
}

impl Command {
    /// Encode the command into its wire bytes. Returns the buffer and the number of used bytes.
    pub fn encode(self) -> ([u8; 3], usize) {
        match self {
            Command::Contrast(val) => ([0x81, val, 0], 2),
            Command::AllOn(on) => ([0xA4 | (on as u8), 0, 0], 1),
            Command::Invert(inv) => ([0xA6 | (inv as u8), 0, 0], 1),
            Command::DisplayOn(on) => ([0xAE | (on as u8), 0, 0], 1),
            Command::AddressMode(mode) => ([0x20, mode as u8, 0], 2),
            Command::ColumnAddress(start, end) => ([0x21, start, end], 3),
            Command::PageAddress(start, end) => ([0x22, start, end], 3),
            Command::StartLine(line) => ([0x40 | (0x3F & line), 0, 0], 1),
            Command::SegmentRemap(remap) => ([0xA0 | (remap as u8), 0, 0], 1),
            Command::Multiplex(ratio) => ([0xA8, ratio, 0], 2),
            Command::ReverseComDir(rev) => ([0xC0 | ((rev as u8) << 3), 0, 0], 1),
            Command::DisplayOffset(offset) => ([0xD3, offset, 0], 2),
            Command::ComPinConfig(alt) => ([0xDA, 0x02 | ((alt as u8) << 4), 0], 2),
            Command::DisplayClockDiv(fosc, div) => {
                ([0xD5, ((0xF & fosc) << 4) | (0xF & div), 0], 2)
            }
            Command::PreChargePeriod(phase1, phase2) => {
                ([0xD9, ((0xF & phase2) << 4) | (0xF & phase1), 0], 2)
            }
            Command::VcomhDeselect(level) => ([0xDB, level as u8, 0], 2),
            Command::ChargePump(en) => ([0x8D, 0x10 | ((en as u8) << 2), 0], 2),
        }
    }

    /// Send command to SSD1306
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), DisplayError>
    where
        DI: WriteOnlyDataCommand,
    {
        let (data, len) = self.encode();
        iface.send_commands(U8(&data[0..len]))
    }
}

/// Horizontal, vertical or page addressing for the display RAM pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddrMode {
    /// Column pointer wraps into the next page at the end of the column window
    Horizontal = 0b00,
    /// Page pointer advances first
    Vertical = 0b01,
    /// Pointer stays within one page
    Page = 0b10,
}

/// Vcomh Deselect level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VcomhLevel {
    /// 0.65 * Vcc
    V065 = 0b000_0000,
    /// 0.77 * Vcc
    V077 = 0b010_0000,
    /// 0.83 * Vcc
    V083 = 0b011_0000,
}
