//! Face layout constants.
//!
//! # Odd-Diameter Convention
//!
//! Every circular feature on the face (bodies, orbit rings, tick dots) is
//! described by an integer *radius* and drawn with diameter `2r + 1`. The
//! extra pixel keeps the circle symmetric around its integer center, so a
//! body at `(cx, cy)` extends exactly `r` pixels in all four directions.
//! [`diameter`] is the one place that conversion happens.
//!
//! Stroke widths and the fixed orbit radii come from the classic 144x168
//! panel the face was designed on; variants that derive radii from the frame
//! reproduce the same values on that panel (see `orbit::OrbitRadii`).

use std::time::Duration;

// =============================================================================
// Body Radii
// =============================================================================

/// Sun radius in pixels. The sun sits at the frame center.
pub const SUN_RADIUS: i32 = 12;

/// Earth radius in pixels. The earth orbits the sun once per 12 hours.
pub const EARTH_RADIUS: i32 = 7;

/// Moon radius in pixels. The moon orbits the earth once per hour.
pub const MOON_RADIUS: i32 = 5;

/// Convert a radius to the odd drawing diameter (`2r + 1`).
#[inline]
pub const fn diameter(radius: i32) -> u32 {
    (radius * 2 + 1) as u32
}

// =============================================================================
// Fixed Orbit Radii
// =============================================================================

/// Earth orbit radius used by the fixed-layout variants.
/// Equals `(min_dim + diameter(SUN_RADIUS)) / 4` on the classic 144x168 panel.
pub const EARTH_ORBIT_FIXED: i32 = 42;

/// Moon orbit radius used by the fixed-layout variants.
/// Equals `(min_dim + diameter(EARTH_RADIUS)) / 8` on the classic 144x168 panel.
pub const MOON_ORBIT_FIXED: i32 = 19;

// The moon's orbit must nest strictly inside the earth's. A moon orbit that
// reaches the sun would collide with the battery arc.
const _: () = assert!(MOON_ORBIT_FIXED < EARTH_ORBIT_FIXED);
const _: () = assert!(MOON_ORBIT_FIXED > 0);

// =============================================================================
// Stroke Widths
// =============================================================================

/// Battery arc stroke width, drawn on the earth-orbit circle.
pub const BATTERY_ARC_WIDTH: u32 = 2;

/// Wide under-stroke of the moon-orbit ring, drawn in the outline color so
/// the ring stays readable where it crosses the battery arc.
pub const MOON_ORBIT_UNDER_WIDTH: u32 = 6;

/// Highlight stroke of the moon-orbit ring, drawn over the under-stroke.
pub const MOON_ORBIT_RING_WIDTH: u32 = 2;

/// Earth outline stroke width.
pub const EARTH_OUTLINE_WIDTH: u32 = 5;

/// Moon outline stroke width. Same as the earth's; the two outlines are
/// drawn back to back with one style.
pub const MOON_OUTLINE_WIDTH: u32 = 5;

/// Radius of each of the twelve hour-tick dots.
pub const TICK_DOT_RADIUS: i32 = 1;

// =============================================================================
// Display Configuration
// =============================================================================

/// Default panel width in pixels (classic rectangular watch panel).
pub const SCREEN_WIDTH: u32 = 144;

/// Default panel height in pixels.
pub const SCREEN_HEIGHT: u32 = 168;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The simulator loop sleeps this long per pass.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Number of host-driven progress steps in one obstruction resize animation.
pub const RESIZE_STEPS: u32 = 16;

/// Height in pixels of the simulated obstruction (e.g. a notification bar
/// sliding in from the bottom). The animated variant shrinks the face frame
/// by this much.
pub const OBSTRUCTION_HEIGHT: u32 = 51;

/// Battery percentage the simulator starts with.
pub const INITIAL_BATTERY: u8 = 70;

/// Percentage step per simulated battery drain event.
pub const BATTERY_STEP: u8 = 10;

// =============================================================================
// Unit Tests
// =============================================================================
