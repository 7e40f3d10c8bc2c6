//! Bus-level behaviour: exact I2C traffic for init, flush and the runtime commands.
//!
//! Run with: cargo test --test bus

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};
use embedded_hal::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use esp32c3_oled::{prelude::*, DEFAULT_ADDRESS};

const ADDR: u8 = DEFAULT_ADDRESS;

/// Power-on sequence with the internal charge pump, 128x64 frame
const INIT_INTERNAL_VCC: &[u8] = &[
    0xAE, // display off
    0x20, 0x00, // horizontal addressing
    0x40, // start line 0
    0xA1, // segment remap
    0xA8, 0x3F, // multiplex 64
    0xC8, // reversed COM scan
    0xD3, 0x00, // display offset
    0xDA, 0x12, // alternative COM pins
    0xD5, 0x80, // clock divider
    0xD9, 0xF1, // precharge
    0xDB, 0x30, // VCOMH 0.83 * Vcc
    0x81, 0xFF, // contrast max
    0xA4, // follow RAM
    0xA6, // not inverted
    0x8D, 0x14, // charge pump on
    0xAF, // display on
];

/// Column window 0..=127, page window 0..=7
const FULL_WINDOW: &[u8] = &[0x21, 0x00, 0x7F, 0x22, 0x00, 0x07];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// One `[0x80, cmd]` write per command byte
fn commands(bytes: &[u8]) -> Vec<I2cTransaction> {
    bytes
        .iter()
        .map(|&b| I2cTransaction::write(ADDR, vec![0x80, b]))
        .collect()
}

/// Data control byte and payload as two writes inside one transaction
fn data(payload: &[u8]) -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::transaction_start(ADDR),
        I2cTransaction::write(ADDR, vec![0x40]),
        I2cTransaction::write(ADDR, payload.to_vec()),
        I2cTransaction::transaction_end(ADDR),
    ]
}

fn flush_of(payload: &[u8]) -> Vec<I2cTransaction> {
    let mut expectations = commands(FULL_WINDOW);
    expectations.extend(data(payload));
    expectations
}

/// Display built without any bus traffic
fn unconnected(i2c: &I2cMock) -> Esp32c3OledDisplay<I2cMock> {
    Builder::new(Esp32c3Oled {})
        .connect_i2c(i2c.clone(), ADDR)
        .into()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn connect_runs_init_then_blank_flush() {
    let mut expectations = commands(INIT_INTERNAL_VCC);
    expectations.extend(flush_of(&[0u8; 1024]));

    let mut i2c = I2cMock::new(&expectations);
    let disp = Esp32c3OledDisplay::connect(i2c.clone(), ADDR, VccSource::Internal).unwrap();

    assert!(disp.buffer().iter().all(|&b| b == 0));
    assert_eq!(disp.get_dimensions(), (128, 64));
    i2c.done();
}

#[test]
fn external_vcc_changes_precharge_and_charge_pump() {
    let mut init = INIT_INTERNAL_VCC.to_vec();
    init[15] = 0x22;
    init[23] = 0x10;

    let mut expectations = commands(&init);
    expectations.extend(flush_of(&[0u8; 1024]));

    let mut i2c = I2cMock::new(&expectations);
    let mut disp: Esp32c3OledDisplay<_> = Builder::new(Esp32c3Oled {})
        .with_vcc(VccSource::External)
        .connect_i2c(i2c.clone(), ADDR)
        .into();
    disp.init().unwrap();

    i2c.done();
}

#[test]
fn init_clears_stale_buffer_contents() {
    let mut expectations = commands(INIT_INTERNAL_VCC);
    expectations.extend(flush_of(&[0u8; 1024]));

    let mut i2c = I2cMock::new(&expectations);
    let mut disp = unconnected(&i2c);
    disp.fill(1);
    disp.init().unwrap();

    assert!(disp.buffer().iter().all(|&b| b == 0));
    i2c.done();
}

#[test]
fn show_sends_window_then_whole_buffer() {
    let mut expected = Framebuffer::<128, 8>::new();
    expected.rect(28, 24, 72, 40, 1);
    expected.text("Hello", 30, 26, 1);

    let mut i2c = I2cMock::new(&flush_of(expected.as_bytes()));
    let mut disp = unconnected(&i2c);
    disp.rect(0, 0, 72, 40, 1);
    disp.text("Hello", 2, 2, 1);
    disp.show().unwrap();

    i2c.done();
}

#[test]
fn every_flush_resends_the_window() {
    let mut expectations = flush_of(&[0u8; 1024]);
    expectations.extend(flush_of(&[0xFFu8; 1024]));

    let mut i2c = I2cMock::new(&expectations);
    let mut disp = unconnected(&i2c);
    disp.flush().unwrap();
    disp.fill(1);
    disp.flush().unwrap();

    i2c.done();
}

#[test]
fn runtime_commands() {
    let mut i2c = I2cMock::new(&commands(&[0xAE, 0xAF, 0x81, 0x42, 0xA7, 0xA6]));
    let mut disp = unconnected(&i2c);

    disp.poweroff().unwrap();
    disp.poweron().unwrap();
    disp.contrast(0x42).unwrap();
    disp.invert(true).unwrap();
    disp.invert(false).unwrap();

    i2c.done();
}

#[test]
fn bus_error_aborts_init() {
    let expectations =
        [I2cTransaction::write(ADDR, vec![0x80, 0xAE]).with_error(ErrorKind::Other)];

    let mut i2c = I2cMock::new(&expectations);
    let result = Esp32c3OledDisplay::connect(i2c.clone(), ADDR, VccSource::Internal);

    assert!(matches!(result, Err(DisplayError::BusWriteError)));
    i2c.done();
}

/// Bus that acknowledges single writes and fails every multi-operation transaction
struct DataNack;

impl embedded_hal::i2c::ErrorType for DataNack {
    type Error = ErrorKind;
}

impl embedded_hal::i2c::I2c for DataNack {
    fn transaction(
        &mut self,
        _address: u8,
        operations: &mut [embedded_hal::i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        if operations.len() > 1 {
            Err(ErrorKind::Other)
        } else {
            Ok(())
        }
    }
}

#[test]
fn bus_error_during_data_transfer_is_reported() {
    let mut disp: Esp32c3OledDisplay<DataNack> = Builder::new(Esp32c3Oled {})
        .connect_i2c(DataNack, ADDR)
        .into();

    disp.poweron().unwrap();
    assert!(matches!(disp.show(), Err(DisplayError::BusWriteError)));
}

#[test]
fn custom_address_is_used() {
    let mut i2c = I2cMock::new(&[I2cTransaction::write(0x3D, vec![0x80, 0xAF])]);
    let mut disp: Esp32c3OledDisplay<_> = Builder::new(Esp32c3Oled {})
        .connect_i2c(i2c.clone(), 0x3D)
        .into();

    disp.poweron().unwrap();
    i2c.done();
}

#[test]
fn interface_rejects_wide_formats() {
    let mut i2c = I2cMock::new(&[]);
    let mut iface = I2cInterface::new(i2c.clone(), ADDR);

    assert!(matches!(
        iface.send_commands(DataFormat::U16(&[0x00AE])),
        Err(DisplayError::DataFormatNotImplemented)
    ));
    assert!(matches!(
        iface.send_data(DataFormat::U16(&[0xFFFF])),
        Err(DisplayError::DataFormatNotImplemented)
    ));

    assert_eq!(iface.address(), ADDR);
    i2c.done();
}

#[test]
fn release_hands_back_the_bus() {
    let i2c = I2cMock::new(&[I2cTransaction::write(ADDR, vec![0x80, 0xAE])]);
    let disp = unconnected(&i2c);

    let mut bus = disp.release().release().release();
    embedded_hal::i2c::I2c::write(&mut bus, ADDR, &[0x80, 0xAE]).unwrap();
    bus.done();
}
