//! Simulator HUD: time, battery and settings readouts in the top corners.
//!
//! The HUD is host-side chrome drawn straight on the simulator display after
//! the face has been blitted, so it never participates in dirty tracking or
//! dithering. Strings are built in `heapless::String` buffers; the styles
//! module provides the fonts and the palette provides the ink.

use core::fmt::Write;

use embedded_graphics::{
    Drawable,
    draw_target::DrawTarget,
    geometry::{Dimensions, Point},
    mono_font::MonoTextStyle,
    text::Text,
};
use heapless::String;

use crate::state::{ClockState, FaceState};
use crate::styles::{HUD_LABEL_FONT, HUD_VALUE_FONT, TOP_LEFT, TOP_RIGHT};

/// Horizontal inset from the display edges.
const HUD_MARGIN: i32 = 4;

/// Top inset of the first HUD line.
const HUD_TOP: i32 = 2;

/// Top inset of the second right-hand line.
const HUD_SECOND_LINE: i32 = 14;

/// Format the clock as `h:mm` on a 12-hour dial. Hour zero reads as 12.
fn time_text(clock: ClockState) -> String<8> {
    let display_hour = if clock.hour == 0 { 12 } else { clock.hour };
    let mut text = String::new();
    let _ = write!(text, "{}:{:02}", display_hour, clock.minute);
    text
}

fn battery_text(percent: u8) -> String<8> {
    let mut text = String::new();
    let _ = write!(text, "{percent}%");
    text
}

const fn ticks_text(enabled: bool) -> &'static str {
    if enabled { "TICKS ON" } else { "TICKS OFF" }
}

/// Draw the HUD overlay in `color`.
pub fn draw_hud<D>(display: &mut D, face: &FaceState, color: D::Color)
where
    D: DrawTarget,
{
    let value_style = MonoTextStyle::new(HUD_VALUE_FONT, color);
    let label_style = MonoTextStyle::new(HUD_LABEL_FONT, color);
    let right_edge = display.bounding_box().size.width as i32 - HUD_MARGIN;

    let time = time_text(face.clock());
    Text::with_text_style(&time, Point::new(HUD_MARGIN, HUD_TOP), value_style, TOP_LEFT)
        .draw(display)
        .ok();

    let battery = battery_text(face.battery_percent());
    Text::with_text_style(
        &battery,
        Point::new(right_edge, HUD_TOP),
        label_style,
        TOP_RIGHT,
    )
    .draw(display)
    .ok();

    Text::with_text_style(
        ticks_text(face.settings().show_ticks),
        Point::new(right_edge, HUD_SECOND_LINE),
        label_style,
        TOP_RIGHT,
    )
    .draw(display)
    .ok();
}

// =============================================================================
// Unit Tests
// =============================================================================
