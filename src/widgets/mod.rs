//! Widget layers for the orbital face.
//!
//! - [`rings`]: vector layer (tick ring, battery arc, orbit ring, outlines)
//! - [`glyph`]: transparent pixel-art bitmaps for the three bodies
//! - [`face`]: composition order tying both layers to a `FaceState`
//! - [`hud`]: simulator-only overlay drawn outside the face pipeline

mod face;
mod glyph;
mod hud;
mod rings;

pub use face::{draw_face_glyphs, draw_face_vectors, render_face};
pub use glyph::{Glyph, GlyphSet};
pub use hud::draw_hud;
pub use rings::{draw_battery_arc, draw_body_outline, draw_orbit_ring, draw_tick_ring};
