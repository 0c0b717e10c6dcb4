//! Static text styles for the simulator HUD.
//!
//! `TextStyleBuilder` and `MonoTextStyle::new` are const fn in
//! embedded-graphics 0.8, so alignment styles live in read-only data. The
//! fonts are exposed as references rather than finished `MonoTextStyle`
//! values because the HUD ink depends on the active palette: callers build
//! `MonoTextStyle::new(HUD_VALUE_FONT, color)` with whatever color the
//! target needs.

use embedded_graphics::{
    mono_font::{MonoFont, ascii::FONT_6X10},
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_18_POINT;

// =============================================================================
// Text Alignment Styles (const - zero runtime cost)
// =============================================================================

/// Anchored at the top-left corner of the text box. Used for the time readout.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Anchored at the top-right corner. Used for the battery and ticks readouts.
pub const TOP_RIGHT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Font References (for dynamic color styles)
// =============================================================================

/// Large HUD font for the time readout (`ProFont` 18pt).
pub const HUD_VALUE_FONT: &MonoFont = &PROFONT_18_POINT;

/// Small HUD font (6x10 pixels) for the battery and ticks readouts.
pub const HUD_LABEL_FONT: &MonoFont = &FONT_6X10;
