//! Orbital geometry: fixed-point angles and body positions.
//!
//! # Angle Convention
//!
//! Angles are integers on the lookup-table scale where [`TRIG_MAX_ANGLE`]
//! (0x10000) is one full turn. A polar offset is
//! `(cos(a) * r, sin(a) * r)` applied in screen coordinates, and because
//! screen y grows downward the angle runs *clockwise*: 0 points right,
//! a quarter turn points down. Both hand formulas add the three-quarter-turn
//! term that puts 12:00 straight up.
//!
//! # Fixed-Point Parity
//!
//! Trig values are scaled to [`TRIG_MAX_RATIO`] (0xFFFF) and truncated toward
//! zero, and every division in the angle and offset formulas is integer
//! division in the exact order written here. Trig itself runs through `f64`
//! so the cardinal angles land on exactly 0 and +/-0xFFFF; `f32` rounding
//! would lose the top pixel of the dial to an off-by-one.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::config::{
    EARTH_ORBIT_FIXED, EARTH_RADIUS, MOON_ORBIT_FIXED, MOON_ORBIT_UNDER_WIDTH,
    MOON_OUTLINE_WIDTH, MOON_RADIUS, SUN_RADIUS, diameter,
};

// =============================================================================
// Fixed-Point Trigonometry
// =============================================================================

/// One full turn on the integer angle scale.
pub const TRIG_MAX_ANGLE: i32 = 0x10000;

/// Unit scale of fixed-point trig values.
pub const TRIG_MAX_RATIO: i32 = 0xFFFF;

/// Cosine of a fixed-point angle, scaled to [`TRIG_MAX_RATIO`].
#[inline]
pub fn cos_fixed(angle: i32) -> i32 {
    let turns = f64::from(angle) * std::f64::consts::TAU / f64::from(TRIG_MAX_ANGLE);
    (turns.cos() * f64::from(TRIG_MAX_RATIO)) as i32
}

/// Sine of a fixed-point angle, scaled to [`TRIG_MAX_RATIO`].
#[inline]
pub fn sin_fixed(angle: i32) -> i32 {
    let turns = f64::from(angle) * std::f64::consts::TAU / f64::from(TRIG_MAX_ANGLE);
    (turns.sin() * f64::from(TRIG_MAX_RATIO)) as i32
}

/// Offset `center` by `radius` pixels in the direction of `angle`.
#[inline]
pub fn polar_offset(center: Point, angle: i32, radius: i32) -> Point {
    Point::new(
        center.x + cos_fixed(angle) * radius / TRIG_MAX_RATIO,
        center.y + sin_fixed(angle) * radius / TRIG_MAX_RATIO,
    )
}

// =============================================================================
// Hand Angles
// =============================================================================

/// Angle of the earth around the sun for the given time.
///
/// The hour hand moves continuously: each elapsed minute advances it by
/// 1/720 of a turn.
#[inline]
pub fn hour_angle(hour: u8, minute: u8) -> i32 {
    let hour = i32::from(hour % 12);
    let minute = i32::from(minute);
    TRIG_MAX_ANGLE * hour / 12 + TRIG_MAX_ANGLE * minute / (12 * 60) + TRIG_MAX_ANGLE * 3 / 4
}

/// Angle of the moon around the earth for the given minute.
#[inline]
pub fn minute_angle(minute: u8) -> i32 {
    TRIG_MAX_ANGLE * i32::from(minute) / 60 + TRIG_MAX_ANGLE * 3 / 4
}

// =============================================================================
// Orbit Radii
// =============================================================================

/// Orbit radii of the two moving bodies, in pixels.
///
/// Invariant: `0 < moon < earth`. The fixed preset satisfies it by
/// compile-time assertion; the frame derivation satisfies it for any panel
/// at least 25 pixels on its short side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbitRadii {
    /// Earth orbit radius around the frame center.
    pub earth: i32,
    /// Moon orbit radius around the earth.
    pub moon: i32,
}

impl OrbitRadii {
    /// Classic-panel preset used by the fixed-layout variants.
    pub const fn fixed() -> Self {
        Self {
            earth: EARTH_ORBIT_FIXED,
            moon: MOON_ORBIT_FIXED,
        }
    }

    /// Derive radii from the visible frame.
    ///
    /// Both scale with the short side of the frame, padded by the diameter
    /// of the body one level in, so the layout keeps its proportions when
    /// an obstruction shrinks the frame.
    pub fn from_frame(frame: &Rectangle) -> Self {
        let min_dim = frame.size.width.min(frame.size.height) as i32;
        Self {
            earth: (min_dim + diameter(SUN_RADIUS) as i32) / 4,
            moon: (min_dim + diameter(EARTH_RADIUS) as i32) / 8,
        }
    }

    /// Radius of the hour-tick ring, halfway between the earth orbit and its
    /// outermost moon excursion.
    #[inline]
    pub const fn tick_ring(&self) -> i32 {
        self.earth + self.moon / 2
    }
}

// =============================================================================
// Body Positions
// =============================================================================

/// Centers of the three bodies for one instant, derived per call and never
/// cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyPositions {
    /// Sun center; always the frame center.
    pub sun: Point,
    /// Earth center on the hour orbit.
    pub earth: Point,
    /// Moon center on the minute orbit around the earth.
    pub moon: Point,
}

/// Center of the frame, `origin + size / 2` with integer division.
///
/// This is one pixel below-right of `Rectangle::center` on even dimensions;
/// the dial layout depends on this variant of the rounding.
#[inline]
pub fn frame_center(frame: &Rectangle) -> Point {
    Point::new(
        frame.top_left.x + frame.size.width as i32 / 2,
        frame.top_left.y + frame.size.height as i32 / 2,
    )
}

/// Solve the three body centers for the given frame, radii and time.
pub fn body_positions(frame: &Rectangle, radii: OrbitRadii, hour: u8, minute: u8) -> BodyPositions {
    let sun = frame_center(frame);
    let earth = polar_offset(sun, hour_angle(hour, minute), radii.earth);
    let moon = polar_offset(earth, minute_angle(minute), radii.moon);
    BodyPositions { sun, earth, moon }
}

// =============================================================================
// Bounding Geometry
// =============================================================================

/// Square of side `diameter(radius)` centered on `center`; the footprint of
/// every circle, arc and glyph on the face.
#[inline]
pub fn bounding_square(center: Point, radius: i32) -> Rectangle {
    Rectangle::new(
        Point::new(center.x - radius, center.y - radius),
        Size::new(diameter(radius), diameter(radius)),
    )
}

/// Region occupied by the earth and its moon-orbit ring, for per-body dirty
/// marking. The margin is half the widest stroke drawn there, rounded up.
pub fn earth_region(earth: Point, radii: OrbitRadii) -> Rectangle {
    let margin = (MOON_ORBIT_UNDER_WIDTH as i32 + 1) / 2;
    bounding_square(earth, radii.moon + margin)
}

/// Region occupied by the moon and its outline, for per-body dirty marking.
pub fn moon_region(moon: Point) -> Rectangle {
    let margin = (MOON_OUTLINE_WIDTH as i32 + 1) / 2;
    bounding_square(moon, MOON_RADIUS + margin)
}

// =============================================================================
// Unit Tests
// =============================================================================
