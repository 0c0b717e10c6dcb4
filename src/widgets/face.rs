//! Face composition: the layer order that turns solver output into pixels.
//!
//! # Layer Order
//!
//! Vectors draw back to front: tick ring, battery arc, moon orbit ring, then
//! the body outlines. Outlines use the background-colored `outline` ink, so
//! each body carves a gap into whatever ring passes beneath it. Glyphs go on
//! top afterwards, sun last so it always wins the center.
//!
//! The two passes are split so the monochrome pipeline can dither between
//! them: vectors get the checkerboard treatment, glyph art does not.

use embedded_graphics::draw_target::DrawTarget;

use crate::config::{EARTH_OUTLINE_WIDTH, EARTH_RADIUS, MOON_OUTLINE_WIDTH, MOON_RADIUS};
use crate::palette::FacePalette;
use crate::state::FaceState;
use crate::widgets::glyph::GlyphSet;
use crate::widgets::rings::{
    draw_battery_arc, draw_body_outline, draw_orbit_ring, draw_tick_ring,
};

/// Draw the vector layer for the current state.
pub fn draw_face_vectors<D>(display: &mut D, face: &FaceState, palette: &FacePalette<D::Color>)
where
    D: DrawTarget,
{
    let positions = face.positions();
    let radii = face.radii();

    if face.tick_ring_visible() {
        draw_tick_ring(display, positions.sun, radii.tick_ring(), palette.accent);
    }
    draw_battery_arc(
        display,
        positions.sun,
        radii.earth,
        face.battery_percent(),
        palette.accent,
    );
    draw_orbit_ring(
        display,
        positions.earth,
        radii.moon,
        palette.outline,
        palette.accent,
    );
    draw_body_outline(
        display,
        positions.earth,
        EARTH_RADIUS,
        EARTH_OUTLINE_WIDTH,
        palette.outline,
    );
    draw_body_outline(
        display,
        positions.moon,
        MOON_RADIUS,
        MOON_OUTLINE_WIDTH,
        palette.outline,
    );
}

/// Composite the glyph layer over the vectors.
pub fn draw_face_glyphs<D>(
    display: &mut D,
    face: &FaceState,
    palette: &FacePalette<D::Color>,
    glyphs: &GlyphSet,
) where
    D: DrawTarget,
{
    let positions = face.positions();

    if let Some(glyph) = &glyphs.earth {
        glyph.draw_centered(display, positions.earth, palette.earth);
    }
    if let Some(glyph) = &glyphs.moon {
        glyph.draw_centered(display, positions.moon, palette.moon);
    }
    if let Some(glyph) = &glyphs.sun {
        glyph.draw_centered(display, positions.sun, palette.sun);
    }
}

/// Full render: vectors, then glyphs.
///
/// Color targets use this directly. The monochrome pipeline calls the two
/// passes itself with a dither step in between.
pub fn render_face<D>(
    display: &mut D,
    face: &FaceState,
    palette: &FacePalette<D::Color>,
    glyphs: &GlyphSet,
) where
    D: DrawTarget,
{
    draw_face_vectors(display, face, palette);
    draw_face_glyphs(display, face, palette, glyphs);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        geometry::{Point, Size},
        pixelcolor::BinaryColor,
        primitives::Rectangle,
    };

    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
    use crate::dither::apply_checkerboard;
    use crate::framebuffer::MonoFrame;
    use crate::settings::Settings;
    use crate::state::units;
    use crate::variant::Variant;

    fn screen() -> Rectangle {
        Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    fn midnight_face(variant: Variant, settings: Settings) -> FaceState {
        let mut face = FaceState::new(variant.options(), screen(), settings);
        face.handle_minute_tick(0, 0, units::MINUTE);
        face
    }

    #[test]
    fn test_bodies_render_at_solved_positions() {
        let mut frame = MonoFrame::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let face = midnight_face(Variant::Animated, Settings::default());
        render_face(
            &mut frame,
            &face,
            &FacePalette::monochrome(),
            &GlyphSet::builtin(),
        );
        // Midnight stacks everything straight up: sun center, earth above,
        // moon above earth. Glyph centers are all inked.
        assert_eq!(frame.get(Point::new(72, 84)), Some(BinaryColor::On), "sun center");
        assert_eq!(frame.get(Point::new(72, 42)), Some(BinaryColor::On), "earth center");
        assert_eq!(frame.get(Point::new(72, 23)), Some(BinaryColor::On), "moon center");
    }

    #[test]
    fn test_outlines_carve_the_battery_ring() {
        let mut frame = MonoFrame::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let mut face = midnight_face(Variant::Animated, Settings::default());
        face.handle_battery(0);
        draw_face_vectors(&mut frame, &face, &FacePalette::monochrome());
        // Empty battery draws the full earth-orbit ring
        assert_eq!(frame.get(Point::new(114, 84)), Some(BinaryColor::On), "ring east");
        assert_eq!(frame.get(Point::new(30, 84)), Some(BinaryColor::On), "ring west");
        // (81, 43) sits on the ring but inside the earth outline band, and
        // the outline paints background over it. Outlines after rings.
        assert_eq!(
            frame.get(Point::new(81, 43)),
            Some(BinaryColor::Off),
            "earth outline should carve the ring"
        );
    }

    #[test]
    fn test_tick_ring_follows_visibility() {
        let ticks_on = Settings { show_ticks: true };

        let mut frame = MonoFrame::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let face = midnight_face(Variant::Animated, ticks_on);
        draw_face_vectors(&mut frame, &face, &FacePalette::monochrome());
        assert_eq!(
            frame.get(Point::new(123, 84)),
            Some(BinaryColor::On),
            "animated face with ticks enabled draws the 3 o'clock dot"
        );

        let mut frame = MonoFrame::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let face = midnight_face(Variant::Classic, ticks_on);
        draw_face_vectors(&mut frame, &face, &FacePalette::monochrome());
        assert_eq!(
            frame.get(Point::new(123, 84)),
            Some(BinaryColor::Off),
            "classic face has no tick ring regardless of the setting"
        );
    }

    #[test]
    fn test_monochrome_pipeline_dithers_vectors_but_not_glyphs() {
        let mut frame = MonoFrame::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let mut face = midnight_face(Variant::Animated, Settings::default());
        face.handle_battery(0);
        let palette = FacePalette::monochrome();
        draw_face_vectors(&mut frame, &face, &palette);
        apply_checkerboard(&mut frame, SCREEN_HEIGHT as i32);
        draw_face_glyphs(&mut frame, &face, &palette, &GlyphSet::builtin());
        // Battery ring covers x offsets 42 and 43 on the horizontal axis.
        // Even parity survives the checkerboard, odd parity is cleared.
        assert_eq!(frame.get(Point::new(114, 84)), Some(BinaryColor::On), "even ring pixel");
        assert_eq!(frame.get(Point::new(115, 84)), Some(BinaryColor::Off), "odd ring pixel");
        // Odd parity inside the sun glyph is still lit: art lands after dither
        assert_eq!(frame.get(Point::new(73, 84)), Some(BinaryColor::On), "glyph beats dither");
    }

    #[test]
    fn test_empty_glyph_set_leaves_only_vectors() {
        let mut frame = MonoFrame::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        let face = midnight_face(Variant::Animated, Settings::default());
        render_face(
            &mut frame,
            &face,
            &FacePalette::monochrome(),
            &GlyphSet::empty(),
        );
        // Sun center has no vector coverage of its own, only glyph art
        assert_eq!(frame.get(Point::new(72, 84)), Some(BinaryColor::Off));
    }
}
