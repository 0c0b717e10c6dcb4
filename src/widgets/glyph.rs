//! Body glyphs: small pixel-art bitmaps composited over the vector layer.
//!
//! Art is stored as rows of bytes: `.` is transparent, `#` is inked with the
//! body's primary color, `+` with its secondary. Transparent pixels never
//! touch the target, which is what lets the round glyphs sit on the rings
//! without square halos.
//!
//! Each built-in glyph is exactly the drawing diameter of its body, so
//! centering a glyph on a body center makes art and vector outline coincide.

use embedded_graphics::{Drawable, Pixel, draw_target::DrawTarget, geometry::Point, geometry::Size};

use crate::palette::GlyphColors;

/// One transparent pixel-art bitmap.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    rows: &'static [&'static str],
}

impl Glyph {
    /// Wrap static art rows. All rows must share one length.
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    /// Art dimensions in pixels.
    pub fn size(&self) -> Size {
        let width = self.rows.first().map_or(0, |row| row.len());
        Size::new(width as u32, self.rows.len() as u32)
    }

    /// Composite the glyph with its center on `center`.
    ///
    /// Only inked pixels are drawn; whatever is already on the target shows
    /// through the transparent ones.
    pub fn draw_centered<D>(&self, display: &mut D, center: Point, colors: GlyphColors<D::Color>)
    where
        D: DrawTarget,
    {
        let size = self.size();
        let top_left = Point::new(
            center.x - size.width as i32 / 2,
            center.y - size.height as i32 / 2,
        );
        for (dy, row) in self.rows.iter().enumerate() {
            for (dx, byte) in row.bytes().enumerate() {
                let color = match byte {
                    b'#' => colors.primary,
                    b'+' => colors.secondary,
                    _ => continue,
                };
                Pixel(Point::new(top_left.x + dx as i32, top_left.y + dy as i32), color)
                    .draw(display)
                    .ok();
            }
        }
    }
}

/// The three body glyphs, each optional.
///
/// A missing glyph skips its composite step; the body still gets its vector
/// outline, so a face without art degrades to plain rings.
#[derive(Debug, Clone, Copy)]
pub struct GlyphSet {
    pub sun: Option<Glyph>,
    pub earth: Option<Glyph>,
    pub moon: Option<Glyph>,
}

impl GlyphSet {
    /// The built-in art.
    pub const fn builtin() -> Self {
        Self {
            sun: Some(SUN_GLYPH),
            earth: Some(EARTH_GLYPH),
            moon: Some(MOON_GLYPH),
        }
    }

    /// No art at all; every composite step becomes a no-op.
    pub const fn empty() -> Self {
        Self {
            sun: None,
            earth: None,
            moon: None,
        }
    }
}

// =============================================================================
// Built-in Art
// =============================================================================

/// Sun disc with a flare rim, 25x25.
pub const SUN_GLYPH: Glyph = Glyph::new(&[
    "..........+++++..........",
    ".......+++++++++++.......",
    ".....+++++#####+++++.....",
    "....++++#########++++....",
    "...+++#############+++...",
    "..+++###############+++..",
    "..++#################++..",
    ".+++###############+++++.",
    ".++#################+++..",
    "+++#################+++..",
    "++###################+++.",
    "++#####################++",
    "++#####################++",
    "++#####################++",
    "++###################+++.",
    "+++#################+++..",
    ".++#################+++..",
    ".+++###############+++++.",
    "..++#################++..",
    "..+++###############+++..",
    "...+++#############+++...",
    "....++++#########++++....",
    ".....+++++#####+++++.....",
    ".......+++++++++++.......",
    "..........+++++..........",
]);

/// Earth with landmasses, 15x15.
pub const EARTH_GLYPH: Glyph = Glyph::new(&[
    ".....#####.....",
    "...####++###...",
    "..####+++####..",
    ".####++++#####.",
    ".###+++++#####.",
    "####++++#######",
    "#####++########",
    "######+#####+##",
    "##########+++##",
    "#########++++##",
    ".########+++##.",
    ".#############.",
    "..#####++####..",
    "...#########...",
    ".....#####.....",
]);

/// Cratered moon, 11x11.
pub const MOON_GLYPH: Glyph = Glyph::new(&[
    "....###....",
    "..#######..",
    ".#########.",
    ".####+####.",
    "#####++####",
    "###########",
    "##+++######",
    ".#+++#####.",
    ".####+++##.",
    "..###++##..",
    "....###....",
]);

// =============================================================================
// Unit Tests
// =============================================================================
