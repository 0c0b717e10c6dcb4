//! Checkerboard dither for 1-bit panels.
//!
//! Solid shapes on a 1-bit panel read as heavy ink blobs. Clearing every
//! other pixel in a checkerboard turns them into a 50% gray, which is how
//! the face fakes its accent shade on monochrome hardware. The pass runs
//! over the vector layer only; glyphs are composited afterwards at full
//! contrast.
//!
//! The pass knows nothing about frame buffers. It works on any
//! [`PixelRows`] implementor, one row of packed bits at a time, touching
//! only each row's visible x-range so non-rectangular panels dither
//! correctly.

/// One row of a packed 1-bit buffer, LSB-first within each byte.
pub struct RowInfo<'a> {
    /// Packed row bits; bit `x % 8` of byte `x / 8` is pixel `x`.
    pub data: &'a mut [u8],
    /// First visible x coordinate of this row.
    pub min_x: i32,
    /// Last visible x coordinate of this row, inclusive.
    pub max_x: i32,
}

/// Row-addressable access to a packed 1-bit pixel buffer.
pub trait PixelRows {
    /// Number of addressable rows.
    fn row_count(&self) -> i32;

    /// Mutable view of row `y`, or `None` outside the buffer.
    fn row_mut(&mut self, y: i32) -> Option<RowInfo<'_>>;
}

/// Write one bit in a packed row.
#[inline]
pub fn set_row_bit(data: &mut [u8], x: i32, value: bool) {
    let byte = x as usize / 8;
    let mask = 1u8 << (x as usize % 8);
    if value {
        data[byte] |= mask;
    } else {
        data[byte] &= !mask;
    }
}

/// Force every odd-parity pixel (`(x + y) % 2 != 0`) to background over the
/// first `rows` rows.
///
/// Even-parity pixels are untouched, so running the pass twice is the same
/// as running it once.
pub fn apply_checkerboard<T: PixelRows>(target: &mut T, rows: i32) {
    let rows = rows.min(target.row_count());
    for y in 0..rows {
        let Some(row) = target.row_mut(y) else {
            continue;
        };
        for x in row.min_x..=row.max_x {
            if (x + y) % 2 != 0 {
                set_row_bit(row.data, x, false);
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
