//! Color roles of the face.
//!
//! Drawing code never names concrete colors; it asks the palette for a role
//! (`background`, `accent`, `outline`, per-body glyph colors). One palette
//! exists per target color type, so the same composer renders the color
//! panel and the 1-bit panel without per-pixel conversion.

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};

// =============================================================================
// Named Colors (Rgb565)
// =============================================================================

/// Pure black background.
pub const BLACK: Rgb565 = Rgb565::new(0, 0, 0);

/// Pure white.
pub const WHITE: Rgb565 = Rgb565::new(31, 63, 31);

/// Dark gray accent used for the battery arc, orbit highlight and ticks on
/// color panels (RGB 85,85,85 squeezed into 5-6-5).
pub const DARK_GRAY: Rgb565 = Rgb565::new(10, 21, 10);

/// Sun disc yellow.
pub const SUN_YELLOW: Rgb565 = Rgb565::new(31, 57, 5);

/// Sun flare orange.
pub const SUN_ORANGE: Rgb565 = Rgb565::new(31, 41, 0);

/// Earth ocean blue.
pub const EARTH_BLUE: Rgb565 = Rgb565::new(3, 25, 27);

/// Earth landmass green.
pub const EARTH_GREEN: Rgb565 = Rgb565::new(4, 34, 4);

/// Moon surface silver.
pub const MOON_SILVER: Rgb565 = Rgb565::new(25, 50, 25);

/// Moon crater gray.
pub const MOON_SHADOW: Rgb565 = Rgb565::new(15, 30, 15);

// =============================================================================
// Palette Roles
// =============================================================================

/// Primary/secondary pair a glyph is inked with (`#` and `+` pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphColors<C> {
    /// Color of `#` pixels.
    pub primary: C,
    /// Color of `+` pixels.
    pub secondary: C,
}

/// Every color the face draws with, by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacePalette<C> {
    /// Frame fill behind everything.
    pub background: C,
    /// Battery arc, moon-orbit highlight and tick dots.
    pub accent: C,
    /// Wide under-strokes and body outlines, sitting between the accent
    /// elements and the glyphs.
    pub outline: C,
    /// Sun glyph inks.
    pub sun: GlyphColors<C>,
    /// Earth glyph inks.
    pub earth: GlyphColors<C>,
    /// Moon glyph inks.
    pub moon: GlyphColors<C>,
}

impl FacePalette<Rgb565> {
    /// Palette for color panels: black frame, dark gray accents.
    pub const fn color() -> Self {
        Self {
            background: BLACK,
            accent: DARK_GRAY,
            outline: BLACK,
            sun: GlyphColors { primary: SUN_YELLOW, secondary: SUN_ORANGE },
            earth: GlyphColors { primary: EARTH_BLUE, secondary: EARTH_GREEN },
            moon: GlyphColors { primary: MOON_SILVER, secondary: MOON_SHADOW },
        }
    }
}

impl FacePalette<BinaryColor> {
    /// Palette for 1-bit panels: everything structural is lit, outlines and
    /// glyph shading fall back to the background.
    pub const fn monochrome() -> Self {
        Self {
            background: BinaryColor::Off,
            accent: BinaryColor::On,
            outline: BinaryColor::Off,
            sun: GlyphColors { primary: BinaryColor::On, secondary: BinaryColor::Off },
            earth: GlyphColors { primary: BinaryColor::On, secondary: BinaryColor::Off },
            moon: GlyphColors { primary: BinaryColor::On, secondary: BinaryColor::Off },
        }
    }
}
