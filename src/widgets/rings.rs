//! Vector layer of the face: arcs, rings, outlines and tick dots.
//!
//! Everything here strokes or fills plain circles. The only angular
//! subtlety is the battery arc: the dial measures angles clockwise from
//! 12 o'clock while the drawing library measures them counterclockwise
//! from 3 o'clock, so a dial arc of sweep `s` starting at the top becomes
//! a library arc starting at `90 - s` degrees with a positive sweep.
//!
//! Draw errors are swallowed; a primitive the target cannot draw merely
//! disappears from the face.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Arc, Circle, PrimitiveStyle};

use crate::config::{
    BATTERY_ARC_WIDTH, MOON_ORBIT_RING_WIDTH, MOON_ORBIT_UNDER_WIDTH, TICK_DOT_RADIUS, diameter,
};
use crate::orbit::{TRIG_MAX_ANGLE, polar_offset};

/// Twelve filled hour dots on a ring of `ring_radius` around `center`.
pub fn draw_tick_ring<D>(display: &mut D, center: Point, ring_radius: i32, color: D::Color)
where
    D: DrawTarget,
{
    let style = PrimitiveStyle::with_fill(color);
    for i in 0..12 {
        let dot = polar_offset(center, TRIG_MAX_ANGLE * i / 12, ring_radius);
        Circle::with_center(dot, diameter(TICK_DOT_RADIUS))
            .into_styled(style)
            .draw(display)
            .ok();
    }
}

/// Depleted-charge arc on the earth-orbit circle.
///
/// The arc covers the *missing* charge: a full battery draws nothing and an
/// empty one draws the whole ring. It starts at 12 o'clock and sweeps
/// clockwise.
pub fn draw_battery_arc<D>(
    display: &mut D,
    center: Point,
    radius: i32,
    percent: u8,
    color: D::Color,
) where
    D: DrawTarget,
{
    let depleted = u32::from(100 - percent.min(100));
    if depleted == 0 {
        return;
    }
    let style = PrimitiveStyle::with_stroke(color, BATTERY_ARC_WIDTH);
    if depleted >= 100 {
        // A whole turn; the closed circle leaves no seam where an arc would
        Circle::with_center(center, diameter(radius))
            .into_styled(style)
            .draw(display)
            .ok();
        return;
    }
    let sweep = 360.0 * depleted as f32 / 100.0;
    let start = 90.0 - sweep;
    Arc::with_center(center, diameter(radius), start.deg(), sweep.deg())
        .into_styled(style)
        .draw(display)
        .ok();
}

/// Moon-orbit ring around the earth: a wide under-stroke that clears a path
/// through whatever is beneath, with the accent ring drawn over it.
pub fn draw_orbit_ring<D>(
    display: &mut D,
    center: Point,
    radius: i32,
    under_color: D::Color,
    ring_color: D::Color,
) where
    D: DrawTarget,
{
    Circle::with_center(center, diameter(radius))
        .into_styled(PrimitiveStyle::with_stroke(under_color, MOON_ORBIT_UNDER_WIDTH))
        .draw(display)
        .ok();
    Circle::with_center(center, diameter(radius))
        .into_styled(PrimitiveStyle::with_stroke(ring_color, MOON_ORBIT_RING_WIDTH))
        .draw(display)
        .ok();
}

/// Stroked outline around a body, drawn before its glyph so the body stands
/// clear of the rings behind it.
pub fn draw_body_outline<D>(
    display: &mut D,
    center: Point,
    body_radius: i32,
    width: u32,
    color: D::Color,
) where
    D: DrawTarget,
{
    Circle::with_center(center, diameter(body_radius))
        .into_styled(PrimitiveStyle::with_stroke(color, width))
        .draw(display)
        .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::BinaryColor;

    use crate::framebuffer::MonoFrame;

    const CENTER: Point = Point::new(72, 84);

    fn frame() -> MonoFrame {
        MonoFrame::new(Size::new(144, 168))
    }

    fn on(frame: &MonoFrame, x: i32, y: i32) -> bool {
        frame.get(Point::new(x, y)) == Some(BinaryColor::On)
    }

    // -------------------------------------------------------------------------
    // Battery Arc Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_full_battery_draws_nothing() {
        let mut frame = frame();
        draw_battery_arc(&mut frame, CENTER, 42, 100, BinaryColor::On);
        assert_eq!(frame.pixels().filter(|p| p.1.is_on()).count(), 0);
    }

    #[test]
    fn test_empty_battery_draws_the_whole_ring() {
        let mut frame = frame();
        draw_battery_arc(&mut frame, CENTER, 42, 0, BinaryColor::On);
        // All four cardinal points of the orbit circle are stroked
        assert!(on(&frame, 72 + 42, 84), "right of ring");
        assert!(on(&frame, 72 - 42, 84), "left of ring");
        assert!(on(&frame, 72, 84 - 42), "top of ring");
        assert!(on(&frame, 72, 84 + 42), "bottom of ring");
        assert!(!on(&frame, 72, 84), "center stays clear");
    }

    #[test]
    fn test_half_battery_covers_the_clockwise_half() {
        let mut frame = frame();
        draw_battery_arc(&mut frame, CENTER, 42, 50, BinaryColor::On);
        // 12 o'clock -> 6 o'clock through 3 o'clock is depleted
        assert!(on(&frame, 72 + 42, 84), "3 o'clock is on the depleted half");
        assert!(!on(&frame, 72 - 42, 84), "9 o'clock is on the charged half");
    }

    #[test]
    fn test_quarter_depleted_battery() {
        let mut frame = frame();
        draw_battery_arc(&mut frame, CENTER, 42, 75, BinaryColor::On);
        // Sweep 90 degrees: probe mid-arc, well away from the endpoints
        assert!(on(&frame, 72 + 30, 84 - 30), "1:30 direction is depleted");
        assert!(!on(&frame, 72, 84 + 42), "6 o'clock is still charged");
        assert!(!on(&frame, 72 - 42, 84), "9 o'clock is still charged");
    }

    #[test]
    fn test_battery_sweep_grows_with_depletion() {
        let lit = |percent: u8| {
            let mut frame = frame();
            draw_battery_arc(&mut frame, CENTER, 42, percent, BinaryColor::On);
            frame.pixels().filter(|p| p.1.is_on()).count()
        };
        let p75 = lit(75);
        let p50 = lit(50);
        let p25 = lit(25);
        assert!(p75 > 0);
        assert!(p50 > p75, "half depleted must stroke more than a quarter");
        assert!(p25 > p50);
    }

    // -------------------------------------------------------------------------
    // Tick Ring Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_tick_ring_dots_on_the_hours() {
        let mut frame = frame();
        draw_tick_ring(&mut frame, CENTER, 51, BinaryColor::On);
        // Dot 0 sits due right, dot 9 quarters later sits due up
        assert!(on(&frame, 72 + 51, 84), "3 o'clock dot");
        assert!(on(&frame, 72, 84 - 51), "12 o'clock dot");
        assert!(on(&frame, 72, 84 + 51), "6 o'clock dot");
        assert!(on(&frame, 72 - 51, 84), "9 o'clock dot");
    }

    #[test]
    fn test_tick_ring_is_dotted_not_solid() {
        let mut frame = frame();
        draw_tick_ring(&mut frame, CENTER, 51, BinaryColor::On);
        // Halfway between two dots the ring is empty: 15 degrees off the
        // x axis at radius 51 is (49, 13) from center
        assert!(!on(&frame, 72 + 49, 84 + 13), "between dots must stay clear");
    }

    // -------------------------------------------------------------------------
    // Orbit Ring and Outline Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_orbit_ring_under_stroke_clears_a_path() {
        let mut frame = frame();
        // Prefill a disc so the carve is observable
        Circle::with_center(CENTER, diameter(25))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut frame)
            .unwrap();
        draw_orbit_ring(&mut frame, CENTER, 19, BinaryColor::Off, BinaryColor::On);
        assert!(on(&frame, 72 + 12, 84), "inside the ring hole survives");
        assert!(!on(&frame, 72 + 17, 84), "under-stroke clears beneath the ring");
        assert!(on(&frame, 72 + 19, 84), "ring path is stroked");
        assert!(on(&frame, 72 + 24, 84), "outside the under-stroke survives");
    }

    #[test]
    fn test_body_outline_is_hollow() {
        let mut frame = frame();
        draw_body_outline(&mut frame, CENTER, 7, 5, BinaryColor::On);
        assert!(!on(&frame, 72, 84), "body interior is not painted");
        assert!(on(&frame, 72 + 7, 84), "stroke sits on the body radius");
        assert!(!on(&frame, 72 + 12, 84), "stroke ends within its width");
    }
}
