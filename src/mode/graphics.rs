//! Buffered display module for use with the [embedded-graphics] crate
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyleBuilder},
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     text::{Baseline, Text},
//! };
//! use esp32c3_oled::{prelude::*, DEFAULT_ADDRESS};
//!
//! fn run_display<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), DisplayError> {
//!     let mut disp = Esp32c3OledDisplay::connect(i2c, DEFAULT_ADDRESS, VccSource::Internal)?;
//!
//!     let text_style = MonoTextStyleBuilder::new()
//!         .font(&FONT_6X10)
//!         .text_color(BinaryColor::On)
//!         .build();
//!     Text::with_baseline("Hello world!", Point::zero(), text_style, Baseline::Top)
//!         .draw(&mut disp)?;
//!
//!     disp.flush()
//! }
//! ```
//!
//! [embedded-graphics]: https://docs.rs/embedded-graphics

use display_interface::{DisplayError, WriteOnlyDataCommand};
use hal::i2c::I2c;

use crate::{
    builder::Builder,
    display::DisplayVariant,
    displays::esp32c3::Esp32c3Oled,
    framebuffer::Framebuffer,
    interface::I2cInterface,
    properties::DisplayProperties,
    vcc::VccSource,
};

/// The ESP32-C3 module over I2C with its full 128x64 frame buffered
pub type Esp32c3OledDisplay<I2C> = GraphicsMode<Esp32c3Oled, I2cInterface<I2C>>;

/// Graphics mode handler
///
/// Holds the whole controller frame in memory. The drawing methods take panel coordinates and
/// add the variant's offset before touching the buffer; sizes, lengths and radii pass through
/// unchanged. Nothing reaches the display until [`show`](Self::show) is called.
///
/// `W` and `P` must match the variant's width and page count.
pub struct GraphicsMode<DV, DI, const W: usize = 128, const P: usize = 8>
where
    DI: WriteOnlyDataCommand,
    DV: DisplayVariant,
{
    properties: DisplayProperties<DV, DI>,
    buffer: Framebuffer<W, P>,
}

impl<DV, DI, const W: usize, const P: usize> From<DisplayProperties<DV, DI>>
    for GraphicsMode<DV, DI, W, P>
where
    DI: WriteOnlyDataCommand,
    DV: DisplayVariant,
{
    fn from(properties: DisplayProperties<DV, DI>) -> Self {
        GraphicsMode::new(properties)
    }
}

impl<I2C> GraphicsMode<Esp32c3Oled, I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Take the bus, initialise the display and push a blank frame to it
    pub fn connect(i2c: I2C, address: u8, vcc: VccSource) -> Result<Self, DisplayError> {
        let mut disp: Self = Builder::new(Esp32c3Oled {})
            .with_vcc(vcc)
            .connect_i2c(i2c, address)
            .into();
        disp.init()?;

        Ok(disp)
    }
}

impl<DV, DI, const W: usize, const P: usize> GraphicsMode<DV, DI, W, P>
where
    DI: WriteOnlyDataCommand,
    DV: DisplayVariant,
{
    /// Create new GraphicsMode instance. No bus traffic happens until [`init`](Self::init).
    pub fn new(properties: DisplayProperties<DV, DI>) -> Self {
        const {
            assert!(W == DV::WIDTH as usize && P * 8 == DV::HEIGHT as usize);
        }

        GraphicsMode {
            properties,
            buffer: Framebuffer::new(),
        }
    }

    /// Release all resources used by GraphicsMode
    pub fn release(self) -> DisplayProperties<DV, DI> {
        self.properties
    }

    /// Run the power-on sequence, then clear the buffer and flush it so the panel starts blank
    /// instead of showing whatever the controller RAM held.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.properties.init_column_mode()?;
        self.clear();
        self.flush()
    }

    /// Write the whole buffer out to the display
    pub fn flush(&mut self) -> Result<(), DisplayError> {
        self.properties.draw(self.buffer.as_bytes())
    }

    /// Same as [`flush`](Self::flush)
    pub fn show(&mut self) -> Result<(), DisplayError> {
        self.flush()
    }

    /// Clear the display buffer. You need to call `display.flush()` for any effect on the screen
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    /// Buffered bytes in controller order
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// The underlying bitmap, in controller coordinates
    pub fn framebuffer(&self) -> &Framebuffer<W, P> {
        &self.buffer
    }

    /// Get display dimensions
    pub fn get_dimensions(&self) -> (u8, u8) {
        self.properties.get_dimensions()
    }

    /// Switch the panel off. The display can be drawn to and retains all of its memory while
    /// off.
    pub fn poweroff(&mut self) -> Result<(), DisplayError> {
        self.properties.display_on(false)
    }

    /// Switch the panel back on
    pub fn poweron(&mut self) -> Result<(), DisplayError> {
        self.properties.display_on(true)
    }

    /// Set the display contrast
    pub fn contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.properties.set_contrast(contrast)
    }

    /// Show the RAM contents inverted or not
    pub fn invert(&mut self, invert: bool) -> Result<(), DisplayError> {
        self.properties.set_invert(invert)
    }

    /// Set every pixel of the frame to `color`
    pub fn fill(&mut self, color: u8) {
        self.buffer.fill(color);
    }

    /// Turn a pixel on or off. A non-zero `color` is treated as on, `0` as off. If the shifted
    /// coordinates are out of the bounds of the frame, this method call is a noop.
    pub fn pixel(&mut self, x: i32, y: i32, color: u8) {
        let (x, y) = Self::shift(x, y);
        self.buffer.pixel(x, y, color);
    }

    /// Read back a pixel, `None` if it falls outside the frame
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<bool> {
        let (x, y) = Self::shift(x, y);
        self.buffer.get_pixel(x, y)
    }

    /// Straight segment between two points
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u8) {
        let (x1, y1) = Self::shift(x1, y1);
        let (x2, y2) = Self::shift(x2, y2);
        self.buffer.line(x1, y1, x2, y2, color);
    }

    /// Horizontal span going right from `(x, y)`
    pub fn hline(&mut self, x: i32, y: i32, length: i32, color: u8) {
        let (x, y) = Self::shift(x, y);
        self.buffer.hline(x, y, length, color);
    }

    /// Vertical span going down from `(x, y)`
    pub fn vline(&mut self, x: i32, y: i32, length: i32, color: u8) {
        let (x, y) = Self::shift(x, y);
        self.buffer.vline(x, y, length, color);
    }

    /// Rectangle outline
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        let (x, y) = Self::shift(x, y);
        self.buffer.rect(x, y, w, h, color);
    }

    /// Solid rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        let (x, y) = Self::shift(x, y);
        self.buffer.fill_rect(x, y, w, h, color);
    }

    /// Ellipse outline, or solid ellipse when `filled` is set
    pub fn ellipse(&mut self, x: i32, y: i32, rx: i32, ry: i32, color: u8, filled: bool) {
        let (x, y) = Self::shift(x, y);
        self.buffer.ellipse(x, y, rx, ry, color, filled);
    }

    /// Text in the built-in 8x8 font
    pub fn text(&mut self, s: &str, x: i32, y: i32, color: u8) {
        let (x, y) = Self::shift(x, y);
        self.buffer.text(s, x, y, color);
    }

    fn shift(x: i32, y: i32) -> (i32, i32) {
        (x.saturating_add(DV::X_OFFSET), y.saturating_add(DV::Y_OFFSET))
    }
}

#[cfg(feature = "graphics")]
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{Dimensions, OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
    Pixel,
};

#[cfg(feature = "graphics")]
impl<DV, DI, const W: usize, const P: usize> DrawTarget for GraphicsMode<DV, DI, W, P>
where
    DI: WriteOnlyDataCommand,
    DV: DisplayVariant,
{
    type Color = BinaryColor;
    type Error = DisplayError;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bb = self.bounding_box();

        pixels
            .into_iter()
            .filter(|Pixel(pos, _color)| bb.contains(*pos))
            .for_each(|Pixel(pos, color)| self.pixel(pos.x, pos.y, color.is_on().into()));

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let Rectangle {
            top_left: Point { x, y },
            size: Size { width, height },
        } = area.intersection(&self.bounding_box());

        // both fit in a u8 after clipping to the panel
        self.fill_rect(x, y, width as i32, height as i32, color.is_on().into());

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill_solid(&self.bounding_box(), color)
    }
}

#[cfg(feature = "graphics")]
impl<DV, DI, const W: usize, const P: usize> OriginDimensions for GraphicsMode<DV, DI, W, P>
where
    DI: WriteOnlyDataCommand,
    DV: DisplayVariant,
{
    fn size(&self) -> Size {
        Size::new(DV::VISIBLE_WIDTH.into(), DV::VISIBLE_HEIGHT.into())
    }
}
