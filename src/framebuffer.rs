//! Packed 1-bit frame buffer for the monochrome render path.
//!
//! The monochrome pipeline draws the vector layer here, runs the
//! checkerboard pass over the packed rows, composites glyphs on top and
//! only then blits to the panel. The buffer is the crate's own because the
//! dither pass needs raw row access with the panel's bit layout: row-major,
//! one bit per pixel, LSB-first within each byte.
//!
//! Out-of-bounds writes are silently dropped, so shapes that overhang the
//! frame mid-animation just lose their overhang.

use std::convert::Infallible;

use embedded_graphics::{
    Pixel,
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
};

use crate::dither::{PixelRows, RowInfo, set_row_bit};

/// Row-major packed 1-bit frame buffer.
pub struct MonoFrame {
    size: Size,
    row_bytes: usize,
    data: Vec<u8>,
}

impl MonoFrame {
    /// Allocate a buffer of the given size with every pixel off.
    pub fn new(size: Size) -> Self {
        let row_bytes = (size.width as usize).div_ceil(8);
        Self {
            size,
            row_bytes,
            data: vec![0; row_bytes * size.height as usize],
        }
    }

    /// Switch every pixel off again.
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    #[inline]
    fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x < self.size.width as i32
            && point.y < self.size.height as i32
    }

    #[inline]
    fn bit_at(&self, x: i32, y: i32) -> bool {
        let byte = y as usize * self.row_bytes + x as usize / 8;
        self.data[byte] & (1 << (x as usize % 8)) != 0
    }

    /// Write one pixel, dropping writes outside the buffer.
    pub fn set(&mut self, point: Point, color: BinaryColor) {
        if !self.in_bounds(point) {
            return;
        }
        let start = point.y as usize * self.row_bytes;
        let row = &mut self.data[start..start + self.row_bytes];
        set_row_bit(row, point.x, color.is_on());
    }

    /// Read one pixel, `None` outside the buffer.
    pub fn get(&self, point: Point) -> Option<BinaryColor> {
        if !self.in_bounds(point) {
            return None;
        }
        Some(if self.bit_at(point.x, point.y) {
            BinaryColor::On
        } else {
            BinaryColor::Off
        })
    }

    /// All pixels in row-major order, for blitting to a display.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel<BinaryColor>> + '_ {
        let width = self.size.width as i32;
        let height = self.size.height as i32;
        (0..height).flat_map(move |y| {
            (0..width).map(move |x| {
                let color = if self.bit_at(x, y) {
                    BinaryColor::On
                } else {
                    BinaryColor::Off
                };
                Pixel(Point::new(x, y), color)
            })
        })
    }
}

impl OriginDimensions for MonoFrame {
    fn size(&self) -> Size {
        self.size
    }
}

impl DrawTarget for MonoFrame {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set(point, color);
        }
        Ok(())
    }
}

impl PixelRows for MonoFrame {
    fn row_count(&self) -> i32 {
        self.size.height as i32
    }

    fn row_mut(&mut self, y: i32) -> Option<RowInfo<'_>> {
        if y < 0 || y >= self.size.height as i32 {
            return None;
        }
        let start = y as usize * self.row_bytes;
        Some(RowInfo {
            data: &mut self.data[start..start + self.row_bytes],
            min_x: 0,
            max_x: self.size.width as i32 - 1,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
