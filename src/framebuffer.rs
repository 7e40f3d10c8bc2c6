//! In-memory 1 bit per pixel bitmap
//!
//! The controller uses page addressing, which means that every byte in the framebuffer represents
//! an aligned vertical group of 8 pixels, and the next byte represents the next group to the
//! right, until it wraps around to a new page. Bit 0 is the top pixel of the group.
//!
//! Drawing never fails: anything that falls outside the bitmap is clipped.

use font8x8::legacy::BASIC_LEGACY;

/// Width and height of one glyph cell of the built-in font
pub const GLYPH_SIZE: i32 = 8;

/// Largest ellipse radius accepted by [`Framebuffer::ellipse`]
pub const MAX_RADIUS: i32 = u16::MAX as i32;

/// Operations to perform on a buffered pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelOperation {
    /// Set the pixel to 1
    Set,
    /// Set the pixel to 0
    Clear,
}

impl From<u8> for PixelOperation {
    /// `0` clears, any other value sets
    fn from(color: u8) -> Self {
        if color == 0 {
            Self::Clear
        } else {
            Self::Set
        }
    }
}

impl PixelOperation {
    fn apply(self, cell: &mut u8, mask: u8) {
        match self {
            PixelOperation::Set => *cell |= mask,
            PixelOperation::Clear => *cell &= !mask,
        }
    }
}

/// `P` pages of `W` columns each, stored page after page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer<const W: usize, const P: usize> {
    pages: [[u8; W]; P],
}

impl<const W: usize, const P: usize> Default for Framebuffer<W, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const P: usize> Framebuffer<W, P> {
    const WIDTH: i32 = W as i32;
    const HEIGHT: i32 = P as i32 * 8;

    /// Create a blank (all off) framebuffer
    pub const fn new() -> Self {
        Self { pages: [[0; W]; P] }
    }

    /// Bitmap dimensions as `(width, height)` in pixels
    pub const fn dimensions(&self) -> (u32, u32) {
        (W as u32, P as u32 * 8)
    }

    /// Raw bytes in the order the controller expects them, `P * W` long
    pub fn as_bytes(&self) -> &[u8] {
        self.pages.as_flattened()
    }

    fn contains(x: i32, y: i32) -> bool {
        (0..Self::WIDTH).contains(&x) && (0..Self::HEIGHT).contains(&y)
    }

    /// Set every pixel to `color`
    pub fn fill(&mut self, color: u8) {
        let fill = match PixelOperation::from(color) {
            PixelOperation::Set => 0xFF,
            PixelOperation::Clear => 0x00,
        };
        self.pages.as_flattened_mut().fill(fill);
    }

    /// Turn a pixel on or off. A non-zero `color` is treated as on, `0` as off. If the X and Y
    /// coordinates are out of the bounds of the bitmap, this method call is a noop.
    pub fn pixel(&mut self, x: i32, y: i32, color: u8) {
        if Self::contains(x, y) {
            PixelOperation::from(color).apply(
                &mut self.pages[y as usize / 8][x as usize],
                1u8 << (y % 8),
            );
        }
    }

    /// Read a pixel back, `None` outside the bitmap
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<bool> {
        if Self::contains(x, y) {
            Some(self.pages[y as usize / 8][x as usize] & (1u8 << (y % 8)) != 0)
        } else {
            None
        }
    }

    /// Horizontal span of `length` pixels starting at `(x, y)` going right
    pub fn hline(&mut self, x: i32, y: i32, length: i32, color: u8) {
        self.fill_rect(x, y, length, 1, color);
    }

    /// Vertical span of `length` pixels starting at `(x, y)` going down
    pub fn vline(&mut self, x: i32, y: i32, length: i32, color: u8) {
        self.fill_rect(x, y, 1, length, color);
    }

    /// One pixel wide outline of a `w` x `h` rectangle with its top left corner at `(x, y)`
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        if w < 1 || h < 1 {
            return;
        }
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, y.saturating_add(h - 1), w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(x.saturating_add(w - 1), y, 1, h, color);
    }

    /// Solid `w` x `h` rectangle with its top left corner at `(x, y)`
    ///
    /// Works a page at a time: every column of a page gets the same mask.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: u8) {
        if w < 1 || h < 1 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = x.saturating_add(w).min(Self::WIDTH);
        let y1 = y.saturating_add(h).min(Self::HEIGHT);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let op = PixelOperation::from(color);
        for page in (y0 / 8)..=((y1 - 1) / 8) {
            // rows [top, bottom) of this page are inside the rectangle
            let top = (y0 - page * 8).max(0) as u32;
            let bottom = (y1 - page * 8).min(8) as u32;
            let mask = ((1u16 << bottom) - (1u16 << top)) as u8;
            for cell in self.pages[page as usize][x0 as usize..x1 as usize].iter_mut() {
                op.apply(cell, mask);
            }
        }
    }

    /// Straight segment from `(x1, y1)` to `(x2, y2)`, both ends included
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: u8) {
        let (mut x, mut y) = (i64::from(x1), i64::from(y1));
        let mut dx = i64::from(x2) - x;
        let mut dy = i64::from(y2) - y;
        let mut sx = if dx > 0 { 1 } else { -1 };
        let mut sy = if dy > 0 { 1 } else { -1 };
        dx = dx.abs();
        dy = dy.abs();

        // walk along the major axis
        let steep = dy > dx;
        if steep {
            core::mem::swap(&mut x, &mut y);
            core::mem::swap(&mut dx, &mut dy);
            core::mem::swap(&mut sx, &mut sy);
        }

        // only the steps whose major coordinate lands inside the bitmap are walked
        let limit = i64::from(if steep { Self::HEIGHT } else { Self::WIDTH });
        let (start, end) = if sx > 0 {
            ((-x).max(0), dx.min(limit - x))
        } else {
            ((x - limit + 1).max(0), dx.min(x + 1))
        };
        if start < end {
            // minor axis steps taken before step `start`
            let (dx2, dy2) = (2 * i128::from(dx), 2 * i128::from(dy));
            let minor = (dy2 * i128::from(start) - i128::from(dx)).div_euclid(dx2) + 1;
            let mut err = (dy2 - i128::from(dx) + dy2 * i128::from(start) - dx2 * minor) as i64;
            x += sx * start;
            y += sy * minor as i64;

            for _ in start..end {
                if steep {
                    self.pixel_wide(y, x, color);
                } else {
                    self.pixel_wide(x, y, color);
                }
                while err >= 0 {
                    y += sy;
                    err -= 2 * dx;
                }
                x += sx;
                err += 2 * dy;
            }
        }

        self.pixel(x2, y2, color);
    }

    /// Ellipse centred on `(x, y)` with horizontal radius `rx` and vertical radius `ry`, either
    /// as an outline or filled with horizontal spans
    ///
    /// Negative radii, or radii above [`MAX_RADIUS`], draw nothing.
    pub fn ellipse(&mut self, x: i32, y: i32, rx: i32, ry: i32, color: u8, filled: bool) {
        if !(0..=MAX_RADIUS).contains(&rx) || !(0..=MAX_RADIUS).contains(&ry) {
            return;
        }
        let (cx, cy) = (i64::from(x), i64::from(y));
        let (rx, ry) = (i64::from(rx), i64::from(ry));
        if rx == 0 && ry == 0 {
            self.pixel(x, y, color);
            return;
        }

        let two_a_square = 2 * rx * rx;
        let two_b_square = 2 * ry * ry;

        // first region, slope above -1
        let (mut px, mut py) = (rx, 0);
        let mut x_change = ry * ry * (1 - 2 * rx);
        let mut y_change = rx * rx;
        let mut err = 0;
        let mut stopping_x = two_b_square * rx;
        let mut stopping_y = 0;
        while stopping_x >= stopping_y {
            self.ellipse_points(cx, cy, px, py, color, filled);
            py += 1;
            stopping_y += two_a_square;
            err += y_change;
            y_change += two_a_square;
            if 2 * err + x_change > 0 {
                px -= 1;
                stopping_x -= two_b_square;
                err += x_change;
                x_change += two_b_square;
            }
        }

        // second region, slope below -1
        let (mut px, mut py) = (0, ry);
        let mut x_change = ry * ry;
        let mut y_change = rx * rx * (1 - 2 * ry);
        let mut err = 0;
        let mut stopping_x = 0;
        let mut stopping_y = two_a_square * ry;
        while stopping_x <= stopping_y {
            self.ellipse_points(cx, cy, px, py, color, filled);
            px += 1;
            stopping_x += two_b_square;
            err += x_change;
            x_change += two_b_square;
            if 2 * err + y_change > 0 {
                py -= 1;
                stopping_y -= two_a_square;
                err += y_change;
                y_change += two_a_square;
            }
        }
    }

    fn ellipse_points(&mut self, cx: i64, cy: i64, x: i64, y: i64, color: u8, filled: bool) {
        if filled {
            for row in [cy - y, cy + y] {
                self.fill_rect_wide(cx - x, row, 2 * x + 1, 1, color);
            }
        } else {
            self.pixel_wide(cx + x, cy - y, color);
            self.pixel_wide(cx - x, cy - y, color);
            self.pixel_wide(cx - x, cy + y, color);
            self.pixel_wide(cx + x, cy + y, color);
        }
    }

    /// Render `s` with the built-in 8x8 font, one cell per character starting at `(x, y)`.
    /// Only the glyph pixels are written, the cell background is left alone. Characters outside
    /// printable ASCII, control characters included, are drawn as `?`.
    pub fn text(&mut self, s: &str, x: i32, y: i32, color: u8) {
        for (i, c) in s.chars().enumerate() {
            let cell_x = i64::from(x) + i as i64 * i64::from(GLYPH_SIZE);
            if cell_x >= i64::from(Self::WIDTH) {
                break;
            }
            let glyph = match c {
                ' '..='~' => &BASIC_LEGACY[c as usize],
                _ => &BASIC_LEGACY[b'?' as usize],
            };

            // one byte per row, bit 0 is the leftmost pixel
            for (row, bits) in glyph.iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if bits & (1u8 << col) != 0 {
                        self.pixel_wide(
                            cell_x + i64::from(col),
                            i64::from(y) + row as i64,
                            color,
                        );
                    }
                }
            }
        }
    }

    fn pixel_wide(&mut self, x: i64, y: i64, color: u8) {
        if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
            self.pixel(x, y, color);
        }
    }

    fn fill_rect_wide(&mut self, x: i64, y: i64, w: i64, h: i64, color: u8) {
        // clamp into i32 range first, clipping happens in fill_rect
        let clamp = |v: i64| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let (x0, y0) = (clamp(x), clamp(y));
        let (x1, y1) = (clamp(x + w), clamp(y + h));
        self.fill_rect(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0), color);
    }
}

#[cfg(feature = "graphics")]
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
    Pixel,
};

#[cfg(feature = "graphics")]
impl<const W: usize, const P: usize> OriginDimensions for Framebuffer<W, P> {
    fn size(&self) -> Size {
        let (w, h) = self.dimensions();
        Size::new(w, h)
    }
}

#[cfg(feature = "graphics")]
impl<const W: usize, const P: usize> DrawTarget for Framebuffer<W, P> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        pixels
            .into_iter()
            .for_each(|Pixel(pos, color)| self.pixel(pos.x, pos.y, color.is_on().into()));
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let Rectangle { top_left, size } = *area;
        let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        self.fill_rect(
            top_left.x,
            top_left.y,
            clamp(size.width),
            clamp(size.height),
            color.is_on().into(),
        );
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on().into());
        Ok(())
    }
}
