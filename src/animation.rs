//! Frame resize animation for obstruction events.
//!
//! When the host reports that part of the panel is about to be covered (or
//! uncovered), the face animates its frame between the old and new bounds.
//! The host owns the clock: it announces the final bounds, feeds normalized
//! progress values, then announces completion. This module only interpolates.
//!
//! # Interpolation
//!
//! Progress is fixed-point on a 0..=[`ANIMATION_NORMALIZED_MAX`] scale. Each
//! frame dimension is blended as
//!
//! ```text
//! curr = start * (MAX - progress) / MAX + end * progress / MAX
//! ```
//!
//! with the two integer divisions kept separate. That order can round a
//! dimension one pixel low mid-animation, which is invisible in motion; the
//! completion snap copies the end bounds verbatim so no rounding survives
//! the animation.
//!
//! The frame origin stays pinned at (0, 0): obstructions only ever change
//! the usable size, and every mid-animation frame keeps the origin of the
//! final one.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

/// Full-scale progress value, matching the host animation service.
pub const ANIMATION_NORMALIZED_MAX: u32 = 65535;

/// Interpolated frame state across one resize animation.
///
/// Outside an animation `current()` simply reports the frame the face was
/// given. Progress values are trusted to lie in `0..=ANIMATION_NORMALIZED_MAX`
/// and to arrive monotonically; the host service guarantees both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AreaAnimation {
    start: Rectangle,
    end: Rectangle,
    curr: Rectangle,
}

impl AreaAnimation {
    /// Create a settled animation state over the given frame.
    pub const fn new(frame: Rectangle) -> Self {
        Self {
            start: frame,
            end: frame,
            curr: frame,
        }
    }

    /// The frame to lay out against right now.
    #[inline]
    pub const fn current(&self) -> Rectangle {
        self.curr
    }

    /// Begin a transition from the current frame toward `final_frame`.
    pub fn begin(&mut self, final_frame: Rectangle) {
        self.start = self.curr;
        self.end = final_frame;
    }

    /// Advance to `progress` on the normalized scale.
    pub fn step(&mut self, progress: u32) {
        let remaining = ANIMATION_NORMALIZED_MAX - progress;
        let lerp = |start: u32, end: u32| {
            start * remaining / ANIMATION_NORMALIZED_MAX + end * progress / ANIMATION_NORMALIZED_MAX
        };
        self.curr = Rectangle::new(
            Point::zero(),
            Size::new(
                lerp(self.start.size.width, self.end.size.width),
                lerp(self.start.size.height, self.end.size.height),
            ),
        );
    }

    /// Snap to the final frame exactly, including its origin.
    pub fn finish(&mut self) {
        self.curr = self.end;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
