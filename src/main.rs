// Crate-level lints: pixel math casts are deliberate throughout
#![allow(clippy::cast_possible_truncation)] // f64->i32, u32->i32 casts in fixed-point trig
#![allow(clippy::cast_precision_loss)] // i32/u32->f32 in arc sweep calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is fine for our coordinate ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where the sign is known positive

//! Orbital clock face simulator.
//!
//! An analog watchface that tells time as a tiny solar system: the sun sits
//! at the frame center, the earth orbits it once per 12 hours (the hour
//! hand), and the moon orbits the earth once per hour (the minute hand). A
//! battery arc depletes clockwise along the earth orbit, and an optional
//! ring of twelve dots marks the hours.
//!
//! The face itself is host-event driven: it only re-renders when the host
//! reports a minute tick, a battery change, a settings push or an
//! unobstructed-area change. This binary is that host, faking the event
//! sources a watch runtime would provide and pumping them into [`state::FaceState`].
//!
//! # Pipeline
//!
//! ```text
//! host events -> FaceState (solver + dirty tracking)
//!                  |
//!                  v
//!   draw_face_vectors   rings, arcs, outlines
//!   apply_checkerboard  1-bit target only
//!   draw_face_glyphs    pixel art, sun last
//! ```
//!
//! # Controls (Simulator Mode)
//!
//! | Key | Action |
//! |-----|--------|
//! | `T` | Toggle the hour-tick ring (sends a settings push, persists) |
//! | `B` | Drop battery by 10%, wrapping back to 100% |
//! | `U` | Toggle a system obstruction (animated variant resizes the face) |
//! | `H` | Toggle the HUD overlay |
//!
//! Key repeat is ignored to prevent toggle spam when holding keys.

mod animation;
mod config;
mod dither;
mod framebuffer;
mod orbit;
mod palette;
mod render;
mod settings;
mod state;
mod styles;
mod variant;
mod widgets;

use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use chrono::{Local, Timelike};
use clap::Parser;
use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{
    BinaryColorTheme, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use tracing::{Level, debug, info, warn};

use animation::ANIMATION_NORMALIZED_MAX;
use config::{
    BATTERY_STEP, FRAME_TIME, INITIAL_BATTERY, OBSTRUCTION_HEIGHT, RESIZE_STEPS, SCREEN_HEIGHT,
    SCREEN_WIDTH,
};
use dither::apply_checkerboard;
use framebuffer::MonoFrame;
use palette::{FacePalette, WHITE};
use render::Redraw;
use settings::{CONFIG_VERSION_KEY, InboxMessage, MessageValue, SHOW_TICKS_KEY, Settings};
use state::{FaceState, units};
use variant::Variant;
use widgets::{GlyphSet, draw_face_glyphs, draw_face_vectors, draw_hud, render_face};

/// Orbital clock face simulator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Face variant to run.
    #[arg(long, value_enum, default_value_t = Variant::Animated)]
    variant: Variant,

    /// Render on a 1-bit framebuffer with checkerboard dithering.
    #[arg(long)]
    monochrome: bool,

    /// Display width in pixels.
    #[arg(long, default_value_t = SCREEN_WIDTH)]
    width: u32,

    /// Display height in pixels.
    #[arg(long, default_value_t = SCREEN_HEIGHT)]
    height: u32,

    /// Window pixel scaling.
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Path of the persisted settings file.
    #[arg(long, default_value = "orbit-face.toml")]
    settings: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.settings);
    let frame = Rectangle::new(Point::zero(), Size::new(cli.width, cli.height));
    let face = FaceState::new(cli.variant.options(), frame, settings);
    let host = Host::new(face, frame, cli.settings.clone());

    info!(variant = ?cli.variant, monochrome = cli.monochrome, "starting orbital face");
    if cli.monochrome {
        run_monochrome(host, &cli);
    } else {
        run_color(host, &cli);
    }
}

// =============================================================================
// Host-Side Event Sources
// =============================================================================

/// Everything the watch runtime would own: the wall clock, the battery
/// level, settings persistence and the unobstructed-area animation driver.
/// The face never sees any of this directly, only the events it produces.
struct Host {
    face: FaceState,
    full_frame: Rectangle,
    settings_path: PathBuf,
    battery: u8,
    hud_visible: bool,
    force_repaint: bool,
    obstructed: bool,
    /// `Some(step)` while an area change is animating.
    resize_step: Option<u32>,
    /// Last `(hour, minute)` pushed to the face.
    last_clock: Option<(u8, u8)>,
}

impl Host {
    fn new(mut face: FaceState, full_frame: Rectangle, settings_path: PathBuf) -> Self {
        face.handle_battery(INITIAL_BATTERY);
        Self {
            face,
            full_frame,
            settings_path,
            battery: INITIAL_BATTERY,
            hud_visible: true,
            force_repaint: false,
            obstructed: false,
            resize_step: None,
            last_clock: None,
        }
    }

    fn handle_key(&mut self, keycode: Keycode) {
        match keycode {
            // T: fake a settings push from the companion config page
            Keycode::T => {
                let show_ticks = !self.face.settings().show_ticks;
                let message = InboxMessage::new()
                    .with_entry(CONFIG_VERSION_KEY, MessageValue::Text(String::from("1")))
                    .with_entry(SHOW_TICKS_KEY, MessageValue::Int(i32::from(show_ticks)));
                if self.face.handle_message(&message) {
                    info!(show_ticks, "applied settings push");
                    if let Err(err) = self.face.settings().save(&self.settings_path) {
                        warn!("could not persist settings to {}: {err}", self.settings_path.display());
                    }
                }
            }
            // B: step the fake battery down, wrapping back to full
            Keycode::B => {
                self.battery = self.battery.checked_sub(BATTERY_STEP).unwrap_or(100);
                info!(percent = self.battery, "battery level");
                self.face.handle_battery(self.battery);
            }
            // U: toggle a system obstruction covering the bottom of the frame
            Keycode::U => {
                if !self.face.options().resize_animation {
                    debug!("variant does not animate area changes");
                } else if self.resize_step.is_some() {
                    debug!("area change already in flight");
                } else {
                    self.obstructed = !self.obstructed;
                    info!(obstructed = self.obstructed, "unobstructed area changing");
                    self.face.handle_area_will_change(self.target_frame());
                    self.resize_step = Some(0);
                }
            }
            // H: toggle the overlay; face state is untouched, so force a repaint
            Keycode::H => {
                self.hud_visible = !self.hud_visible;
                self.force_repaint = true;
            }
            _ => {}
        }
    }

    /// Push a minute tick when the wall clock rolls over.
    fn poll_clock(&mut self) {
        let now = Local::now();
        let clock = (now.hour() as u8, now.minute() as u8);
        if self.last_clock == Some(clock) {
            return;
        }
        let mut units_changed = units::MINUTE;
        if self.last_clock.map(|(hour, _)| hour) != Some(clock.0) {
            units_changed |= units::HOUR;
        }
        self.face.handle_minute_tick(clock.0, clock.1, units_changed);
        self.last_clock = Some(clock);
    }

    /// Advance an in-flight area animation by one frame.
    fn drive_resize(&mut self) {
        if let Some(step) = self.resize_step {
            let next = step + 1;
            if next >= RESIZE_STEPS {
                self.face.handle_area_did_change();
                self.resize_step = None;
                debug!("area change finished");
            } else {
                self.face.handle_area_progress(next * ANIMATION_NORMALIZED_MAX / RESIZE_STEPS);
                self.resize_step = Some(next);
            }
        }
    }

    /// Whether this frame needs a repaint, consuming the dirty state.
    ///
    /// The simulator window has no partial blit, so a partial redraw repaints
    /// everything anyway and the region list is only logged.
    fn take_repaint(&mut self) -> bool {
        let force = std::mem::take(&mut self.force_repaint);
        if !self.face.is_dirty() {
            return force;
        }
        if let Some(Redraw::Partial(regions)) = self.face.take_redraw() {
            debug!(regions = regions.len(), "partial repaint");
        }
        true
    }

    fn target_frame(&self) -> Rectangle {
        if self.obstructed {
            let size = Size::new(
                self.full_frame.size.width,
                self.full_frame.size.height.saturating_sub(OBSTRUCTION_HEIGHT),
            );
            Rectangle::new(self.full_frame.top_left, size)
        } else {
            self.full_frame
        }
    }
}

// =============================================================================
// Render Loops
// =============================================================================

fn run_color(mut host: Host, cli: &Cli) {
    let mut display: SimulatorDisplay<Rgb565> =
        SimulatorDisplay::new(Size::new(cli.width, cli.height));
    let output_settings = OutputSettingsBuilder::new().scale(cli.scale).build();
    let mut window = Window::new("Orbit Face", &output_settings);

    let palette = FacePalette::color();
    let glyphs = GlyphSet::builtin();

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    host.handle_key(keycode);
                }
                _ => {}
            }
        }

        host.poll_clock();
        host.drive_resize();

        if host.take_repaint() {
            display.clear(palette.background).ok();
            render_face(&mut display, &host.face, &palette, &glyphs);
            if host.hud_visible {
                draw_hud(&mut display, &host.face, WHITE);
            }
        }
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

fn run_monochrome(mut host: Host, cli: &Cli) {
    let mut display: SimulatorDisplay<BinaryColor> =
        SimulatorDisplay::new(Size::new(cli.width, cli.height));
    let output_settings = OutputSettingsBuilder::new()
        .scale(cli.scale)
        .theme(BinaryColorTheme::OledWhite)
        .build();
    let mut window = Window::new("Orbit Face (mono)", &output_settings);

    let palette = FacePalette::monochrome();
    let glyphs = GlyphSet::builtin();
    let mut frame = MonoFrame::new(Size::new(cli.width, cli.height));

    loop {
        let frame_start = Instant::now();

        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    host.handle_key(keycode);
                }
                _ => {}
            }
        }

        host.poll_clock();
        host.drive_resize();

        if host.take_repaint() {
            // Vector pass, dither, then art: glyphs must not be checkered
            frame.reset();
            draw_face_vectors(&mut frame, &host.face, &palette);
            apply_checkerboard(&mut frame, host.face.frame().size.height as i32);
            draw_face_glyphs(&mut frame, &host.face, &palette, &glyphs);

            display.draw_iter(frame.pixels()).ok();
            if host.hud_visible {
                draw_hud(&mut display, &host.face, BinaryColor::On);
            }
        }
        window.update(&display);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
