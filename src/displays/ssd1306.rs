//! Power-on sequence shared by SSD1306 based modules

use display_interface::{DisplayError, WriteOnlyDataCommand};

use crate::{
    command::{AddrMode, Command, VcomhLevel},
    vcc::VccSource,
};

/// Wide, short panels route COM lines sequentially; everything else uses the alternative layout.
pub fn alternative_com_pins(dimensions: (u8, u8)) -> bool {
    let (width, height) = dimensions;
    u16::from(width) <= 2 * u16::from(height)
}

/// Full configuration sequence, in the order the controller expects it.
pub fn init_sequence(dimensions: (u8, u8), vcc: VccSource) -> [Command; 16] {
    let (_, height) = dimensions;
    let (phase1, phase2) = vcc.precharge();

    [
        Command::DisplayOn(false),
        Command::AddressMode(AddrMode::Horizontal),
        Command::StartLine(0),
        // column 127 mapped to SEG0
        Command::SegmentRemap(true),
        Command::Multiplex(height - 1),
        // scan from COM[N-1] to COM0
        Command::ReverseComDir(true),
        Command::DisplayOffset(0),
        Command::ComPinConfig(alternative_com_pins(dimensions)),
        Command::DisplayClockDiv(0x8, 0x0),
        Command::PreChargePeriod(phase1, phase2),
        Command::VcomhDeselect(VcomhLevel::V083),
        Command::Contrast(0xFF),
        // output follows RAM contents
        Command::AllOn(false),
        Command::Invert(false),
        Command::ChargePump(vcc.charge_pump()),
        Command::DisplayOn(true),
    ]
}

/// Send [`init_sequence`] one command at a time
pub fn init_column_mode_common<DI>(
    iface: &mut DI,
    dimensions: (u8, u8),
    vcc: VccSource,
) -> Result<(), DisplayError>
where
    DI: WriteOnlyDataCommand,
{
    for cmd in init_sequence(dimensions, vcc) {
        cmd.send(iface)?;
    }

    Ok(())
}
