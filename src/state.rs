//! Face render context and the host event surface.
//!
//! [`FaceState`] owns everything the face knows between repaints: the last
//! reported time and battery level, the persisted settings, the animated
//! frame and the orbit radii derived from it, plus the pending dirty marks.
//! The host feeds it through the `handle_*` methods, which mutate state and
//! record dirt but never draw; the host later collects the dirt with
//! [`FaceState::take_redraw`] and runs the draw sequence itself.
//!
//! One context is created when the face window loads and dropped when it
//! unloads. Nothing here is global or shared across threads.

use embedded_graphics::primitives::Rectangle;

use crate::{
    animation::AreaAnimation,
    orbit::{self, BodyPositions, OrbitRadii},
    render::{DirtyRegions, Redraw},
    settings::{InboxMessage, Settings},
    variant::{FaceOptions, LayerMode, RadiiMode},
};

/// Change-mask bits passed to the minute-tick handler, mirroring the host
/// tick service.
#[allow(dead_code)]
pub mod units {
    pub const SECOND: u8 = 1 << 0;
    pub const MINUTE: u8 = 1 << 1;
    pub const HOUR: u8 = 1 << 2;
    pub const DAY: u8 = 1 << 3;
}

/// Last reported dial time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockState {
    /// Hour on the dial, 0-11.
    pub hour: u8,
    /// Minute, 0-59.
    pub minute: u8,
}

/// All mutable face state plus the feature preset it was built with.
pub struct FaceState {
    options: FaceOptions,
    clock: ClockState,
    battery_percent: u8,
    settings: Settings,
    area: AreaAnimation,
    radii: OrbitRadii,
    dirty: DirtyRegions,
}

impl FaceState {
    /// Build a face over `frame` with the given preset and settings.
    ///
    /// Starts fully dirty so the first host repaint paints everything; the
    /// clock shows midnight and the battery reads full until the host
    /// delivers its bootstrap events.
    pub fn new(options: FaceOptions, frame: Rectangle, settings: Settings) -> Self {
        let mut dirty = DirtyRegions::new();
        dirty.mark_full();
        Self {
            options,
            clock: ClockState::default(),
            battery_percent: 100,
            settings,
            area: AreaAnimation::new(frame),
            radii: solve_radii(options.radii, &frame),
            dirty,
        }
    }

    // -------------------------------------------------------------------------
    // Inbound Events
    // -------------------------------------------------------------------------

    /// Tick-service callback. Reacts only when the MINUTE bit of
    /// `units_changed` is set; hours wrap onto the 12-hour dial here so the
    /// host can pass wall-clock hours straight through.
    pub fn handle_minute_tick(&mut self, hour: u8, minute: u8, units_changed: u8) {
        if units_changed & units::MINUTE == 0 {
            return;
        }
        let clock = ClockState { hour: hour % 12, minute };
        match self.options.layers {
            LayerMode::SharedCanvas => {
                self.clock = clock;
                self.dirty.mark_full();
            }
            LayerMode::PerBody => {
                let (old_earth, old_moon) = self.body_regions();
                self.clock = clock;
                let (new_earth, new_moon) = self.body_regions();
                for region in [old_earth, old_moon, new_earth, new_moon] {
                    self.dirty.mark_region(region);
                }
            }
        }
    }

    /// Battery-service callback. The arc spans the whole face, so any level
    /// change dirties the full frame.
    pub fn handle_battery(&mut self, percent: u8) {
        self.battery_percent = percent.min(100);
        self.dirty.mark_full();
    }

    /// Apply an inbound configuration message.
    ///
    /// Returns `true` when a recognized entry was applied; the caller is
    /// then expected to persist the settings. Unrecognized or malformed
    /// messages change nothing and leave the face clean.
    pub fn handle_message(&mut self, message: &InboxMessage) -> bool {
        if self.settings.apply_message(message) {
            self.dirty.mark_full();
            true
        } else {
            false
        }
    }

    /// Obstruction announcement: the frame will animate toward
    /// `final_frame`. Ignored by variants without the resize feature.
    pub fn handle_area_will_change(&mut self, final_frame: Rectangle) {
        if !self.options.resize_animation {
            return;
        }
        self.area.begin(final_frame);
    }

    /// One step of the obstruction animation on the normalized progress
    /// scale. Derived radii track the interpolated frame every step.
    pub fn handle_area_progress(&mut self, progress: u32) {
        if !self.options.resize_animation {
            return;
        }
        self.area.step(progress);
        self.refresh_radii();
        self.dirty.mark_full();
    }

    /// Obstruction animation finished; snap to the final frame exactly.
    pub fn handle_area_did_change(&mut self) {
        if !self.options.resize_animation {
            return;
        }
        self.area.finish();
        self.refresh_radii();
        self.dirty.mark_full();
    }

    // -------------------------------------------------------------------------
    // Render Queries
    // -------------------------------------------------------------------------

    /// Frame to lay the face out in right now.
    #[inline]
    pub const fn frame(&self) -> Rectangle {
        self.area.current()
    }

    /// Last reported dial time.
    #[inline]
    pub const fn clock(&self) -> ClockState {
        self.clock
    }

    /// Last reported battery level, 0-100.
    #[inline]
    pub const fn battery_percent(&self) -> u8 {
        self.battery_percent
    }

    /// Current settings snapshot.
    #[inline]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    /// Preset this face was built with.
    #[inline]
    pub const fn options(&self) -> FaceOptions {
        self.options
    }

    /// Orbit radii for the current frame.
    #[inline]
    pub const fn radii(&self) -> OrbitRadii {
        self.radii
    }

    /// Whether the tick ring should draw: the variant must have the feature
    /// and the user must have switched it on.
    #[inline]
    pub fn tick_ring_visible(&self) -> bool {
        self.options.tick_ring && self.settings.show_ticks
    }

    /// Solve the body centers for the current frame, radii and time.
    /// Positions are derived fresh on every call, never cached.
    pub fn positions(&self) -> BodyPositions {
        orbit::body_positions(&self.frame(), self.radii, self.clock.hour, self.clock.minute)
    }

    /// Hand pending dirt to the host, resetting to clean.
    pub fn take_redraw(&mut self) -> Option<Redraw> {
        self.dirty.take()
    }

    /// Whether a repaint is pending.
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_dirty()
    }

    fn body_regions(&self) -> (Rectangle, Rectangle) {
        let pos = self.positions();
        (orbit::earth_region(pos.earth, self.radii), orbit::moon_region(pos.moon))
    }

    fn refresh_radii(&mut self) {
        self.radii = solve_radii(self.options.radii, &self.frame());
    }
}

fn solve_radii(mode: RadiiMode, frame: &Rectangle) -> OrbitRadii {
    match mode {
        RadiiMode::Fixed => OrbitRadii::fixed(),
        RadiiMode::FromFrame => OrbitRadii::from_frame(frame),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
