// Crate-level lints: Allow common graphics patterns that pedantic lints flag
#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for pixel math
#![allow(clippy::cast_precision_loss)] // u32/i32->f32 in graphics calculations
#![allow(clippy::cast_possible_wrap)] // u32->i32 wrapping is acceptable for our value ranges
#![allow(clippy::cast_sign_loss)] // i32->u32 where we know sign is positive
#![allow(clippy::too_many_lines)] // main() is long but well-structured

//! Dashboard simulator for an off-road competition vehicle.
//!
//! Renders the gauge cluster the driver sees in the car:
//! - Temperature bar gauge (gradient fill, wrap-around value)
//! - Tachometer (quarter arc + straight run, saturating at the arc limit)
//! - Fuel arc gauge (banded level colors)
//! - Digital speed readout
//! - Cyclic team banner
//! - Mode menu bar with a variable panel (startup manual, competition
//!   status, two-step RPM bound entry, diagnostics)
//!
//! # Controls (Simulator Mode)
//!
//! | Button | Key | Action |
//! |--------|-----|--------|
//! | Left   | `Left`  | Move menu selection left |
//! | Right  | `Right` | Move menu selection right |
//! | Up     | `Up`    | Two-Step: increment digit; otherwise bump temp gauge |
//! | Down   | `Down`  | Two-Step: decrement digit; otherwise drop temp gauge |
//! | Center | `Enter` | Activate selected mode; in Two-Step: next digit / confirm |
//!
//! While a two-step session is committed or invalid, `Enter` falls back to
//! menu activation so the mode can be reopened (which resets the session).
//!
//! Key repeat is ignored to prevent spam when holding keys.
//!
//! # Architecture
//!
//! ```text
//! ┌────────┬──────────────┬──────────────┐
//! │        │              │    SPEED     │
//! │  TEMP  │     TACH     ├──────────────┤
//! │        │              │    FUEL      │
//! │        ├──────────────┼──────────────┤
//! │        │    PANEL     │    BANNER    │
//! ├────────┴──────────────┴──────────────┤
//! │              MENU BAR                │
//! └──────────────────────────────────────┘
//! ```
//!
//! Every widget renders into a command list (a pure function of its state
//! and viewport) and the host replays the commands onto the simulator
//! display. Mutations mark their widget dirty; only dirty widgets repaint,
//! except after full-clear events (first frame, mode switch). The whole
//! loop is single-threaded: every mutation happens between frames, so a
//! render pass always sees a consistent snapshot.

mod colors;
mod config;
mod geometry;
mod modes;
mod render;
mod screens;
mod state;
mod styles;
mod thresholds;
mod twostep;
mod widgets;

use std::thread;
use std::time::Instant;

use colors::{BLACK, RED};
use config::{
    BANNER_H, BLINK_DIVISOR, BODY_HEIGHT, CENTER_COL_X, FRAME_TIME, FUEL_H, FUEL_MAX, MENU_HEIGHT, PANEL_H,
    RIGHT_COL_X, RIGHT_W, SCREEN_HEIGHT, SCREEN_WIDTH, SPEED_H, SPEED_MAX, TACH_H, TACH_MAX, TACH_W, TEMP_MAX, TEMP_W,
};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::{debug, info, warn};
use modes::Mode;
use render::{RenderState, paint};
use screens::{draw_diagnostic, draw_startup, draw_status, draw_two_step};
use state::GaugeError;
use twostep::{BoundsSink, LoggingSink, RpmBounds, SessionStatus, TwoStepEntry};
use widgets::{Banner, FuelGauge, MenuBar, Speedometer, Tachometer, TempGauge, WarningLight};

/// Banner frames rotated on the banner timer.
const BANNER_FRAMES: &[&str] = &["BOBCAT BAJA", "RACE READY", "CHECK TIRE PRESSURE"];

/// Width of the warning-light strip inside the competition panel.
const LIGHT_W: u32 = 48;

fn main() -> Result<(), GaugeError> {
    env_logger::init();

    // Initialize display and window (simulator mode)
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("Baja Dash", &output_settings);

    display.clear(BLACK).ok();
    window.update(&display);

    // ==========================================================================
    // Widgets and Session State
    // ==========================================================================

    let mut temp = TempGauge::new(TEMP_MAX)?;
    let mut tach = Tachometer::new(TACH_MAX)?;
    let mut fuel = FuelGauge::new(FUEL_MAX)?;
    let mut speed = Speedometer::new(SPEED_MAX)?;
    let mut menu = MenuBar::new();
    let mut banner = Banner::new(BANNER_FRAMES);
    let mut light = WarningLight::new("2-STEP", RED);

    let mut entry = TwoStepEntry::new();
    let mut sink = LoggingSink;
    let mut committed: Option<RpmBounds> = None;

    let mut active_mode = Mode::default();
    let mut render_state = RenderState::new();

    // Signal generation time parameter (advances each frame)
    let mut t = 0.0f32;
    // Frame counter for blink timing (wraps to avoid overflow)
    let mut frame_count = 0u32;

    // ==========================================================================
    // Main Render Loop
    // ==========================================================================

    loop {
        let frame_start = Instant::now();

        // Handle window events (close, HID button presses)
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => return Ok(()),
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    // Ignore OS key repeat to prevent spam when holding keys
                    if repeat {
                        continue;
                    }
                    let entering = active_mode == Mode::TwoStep && entry.status() == SessionStatus::Editing;
                    match keycode {
                        Keycode::Left => menu.move_selection(-1),
                        Keycode::Right => menu.move_selection(1),
                        Keycode::Up if entering => entry.adjust_digit(1),
                        Keycode::Down if entering => entry.adjust_digit(-1),
                        Keycode::Up => temp.add(5),
                        Keycode::Down => temp.add(-5),
                        Keycode::Return if entering => {
                            if let Some(bounds) = entry.advance() {
                                sink.send(bounds);
                                committed = Some(bounds);
                                // Committing returns the driver to the
                                // competition panel
                                active_mode = Mode::Competition;
                                render_state.mark_mode_switched();
                            } else if entry.status() == SessionStatus::Invalid {
                                warn!(
                                    "two-step bounds rejected: lower={:?} upper={:?}",
                                    entry.captured_lower(),
                                    entry.captured_upper()
                                );
                            }
                        }
                        Keycode::Return => {
                            let selected = menu.selected();
                            if selected != active_mode || selected == Mode::TwoStep {
                                info!("mode selected: {}", selected.label());
                                // The entry session lives only inside the
                                // two-step mode: destroyed on leaving,
                                // created fresh on every (re-)entry
                                if active_mode == Mode::TwoStep || selected == Mode::TwoStep {
                                    entry.reset();
                                }
                                active_mode = selected;
                                render_state.mark_mode_switched();
                            }
                        }
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        // ======================================================================
        // Generate Fake Sensor Data (simulator mode)
        // ======================================================================

        tach.set(fake_signal(t, 800.0, 4800.0, 0.08) as i32);
        speed.set(fake_signal(t, 0.0, 38.0, 0.05) as i32);
        fuel.set(fake_signal(t, 5.0, 95.0, 0.01) as i32);

        // Two-step warning light: blinks while the engine is inside the
        // configured bound window
        let armed = committed.is_some_and(|bounds| tach.value() >= i32::from(bounds.lower));
        let blink_on = (frame_count / BLINK_DIVISOR) % 2 == 0;
        if armed && blink_on {
            light.show();
        } else {
            light.hide();
        }

        // ======================================================================
        // Rendering
        // ======================================================================

        let force = render_state.need_full_clear();
        if force {
            display.clear(BLACK).ok();
        }

        if temp.take_dirty() || force {
            paint(&temp.render(0, 0, TEMP_W, BODY_HEIGHT), &mut display);
        }
        if tach.take_dirty() || force {
            paint(&tach.render(CENTER_COL_X, 0, TACH_W, TACH_H), &mut display);
        }
        if speed.take_dirty() || force {
            paint(&speed.render(RIGHT_COL_X, 0, RIGHT_W, SPEED_H), &mut display);
        }
        if fuel.take_dirty() || force {
            paint(&fuel.render(RIGHT_COL_X, SPEED_H, RIGHT_W, FUEL_H), &mut display);
        }

        // Variable panel: repainted every frame (entry outlines, blink and
        // status all live here)
        let panel = match active_mode {
            Mode::Startup => draw_startup(CENTER_COL_X, TACH_H, TACH_W, PANEL_H),
            Mode::TwoStep => draw_two_step(&entry, CENTER_COL_X, TACH_H, TACH_W, PANEL_H),
            Mode::Competition => draw_status(committed, CENTER_COL_X, TACH_H, TACH_W - LIGHT_W, PANEL_H),
            Mode::RearSteer | Mode::LapTime => {
                draw_diagnostic(active_mode.label(), CENTER_COL_X, TACH_H, TACH_W, PANEL_H)
            }
        };
        paint(&panel, &mut display);
        if active_mode == Mode::Competition {
            paint(
                &light.render(CENTER_COL_X + TACH_W - LIGHT_W, TACH_H, LIGHT_W, PANEL_H),
                &mut display,
            );
        }

        banner.tick();
        if banner.take_dirty() || force {
            debug!("banner frame {}", banner.current_frame());
            paint(&banner.render(RIGHT_COL_X, SPEED_H + FUEL_H, RIGHT_W, BANNER_H), &mut display);
        }
        if menu.take_dirty() || force {
            paint(&menu.render(0, BODY_HEIGHT, SCREEN_WIDTH, MENU_HEIGHT), &mut display);
        }

        // ======================================================================
        // Frame Pacing
        // ======================================================================

        render_state.end_frame();
        window.update(&display);

        t += 0.05;
        frame_count = frame_count.wrapping_add(1);

        // Periodic telemetry snapshot (~every 5 s at 50 FPS)
        if frame_count % 250 == 0 {
            debug!(
                "snapshot: rpm={} mph={} temp={}C fuel={}%",
                tach.value(),
                speed.value(),
                temp.value(),
                fuel.value()
            );
        }

        // Sleep to maintain target frame rate (~50 FPS)
        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Generate a sinusoidal signal oscillating between min and max values.
///
/// Used to simulate sensor readings in demo mode.
///
/// # Parameters
/// - `t`: Time parameter (advances each frame)
/// - `min`: Minimum output value
/// - `max`: Maximum output value
/// - `freq`: Oscillation frequency (higher = faster cycles)
fn fake_signal(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
