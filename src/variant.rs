//! Face variants and their feature presets.
//!
//! The four published builds of the face differ only in layout policy, not in
//! drawing code: one renderer reads a [`FaceOptions`] preset and everything
//! downstream branches on that. [`Variant`] is the CLI-facing name for each
//! preset.
//!
//! # Variants
//!
//! - [`Variant::Classic`]: fixed orbit radii, one shared canvas
//! - [`Variant::Layered`]: fixed radii, per-body dirty regions
//! - [`Variant::Adaptive`]: radii derived from the frame
//! - [`Variant::Animated`]: derived radii, hour ticks, obstruction animation

use clap::ValueEnum;

/// Published face builds selectable on the command line.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, ValueEnum)]
pub enum Variant {
    /// Original layout: classic-panel radii, full-frame redraws.
    Classic,

    /// Splits the moving bodies onto their own dirty regions so a host with
    /// partial refresh only repaints what moved.
    Layered,

    /// Derives orbit radii from the frame, fitting any panel size.
    Adaptive,

    /// Everything above plus the hour-tick ring setting and the animated
    /// response to frame obstructions.
    #[default]
    Animated,
}

/// How orbit radii are chosen.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RadiiMode {
    /// Classic-panel constants, independent of the frame.
    Fixed,
    /// Recomputed from the visible frame, including mid-animation frames.
    FromFrame,
}

/// How redraws are scoped.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LayerMode {
    /// Any change dirties the whole frame.
    SharedCanvas,
    /// A minute tick dirties only the old and new body regions.
    PerBody,
}

/// Feature preset consumed by the renderer core.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceOptions {
    /// Orbit radius policy.
    pub radii: RadiiMode,
    /// Dirty-region granularity.
    pub layers: LayerMode,
    /// Whether the hour-tick ring feature exists (still gated at draw time
    /// by the `show_ticks` setting).
    pub tick_ring: bool,
    /// Whether the face responds to unobstructed-area events.
    pub resize_animation: bool,
}

impl Variant {
    /// Resolve the preset for this variant.
    pub const fn options(self) -> FaceOptions {
        match self {
            Self::Classic => FaceOptions {
                radii: RadiiMode::Fixed,
                layers: LayerMode::SharedCanvas,
                tick_ring: false,
                resize_animation: false,
            },
            Self::Layered => FaceOptions {
                radii: RadiiMode::Fixed,
                layers: LayerMode::PerBody,
                tick_ring: false,
                resize_animation: false,
            },
            Self::Adaptive => FaceOptions {
                radii: RadiiMode::FromFrame,
                layers: LayerMode::SharedCanvas,
                tick_ring: false,
                resize_animation: false,
            },
            Self::Animated => FaceOptions {
                radii: RadiiMode::FromFrame,
                layers: LayerMode::SharedCanvas,
                tick_ring: true,
                resize_animation: true,
            },
        }
    }
}
