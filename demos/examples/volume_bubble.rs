// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted volume-bubble session against a logging host.
//!
//! This example shows how to combine:
//! - `perch_overlay::OverlayController` for the bubble/panel state machine,
//! - `perch_overlay::volume::VolumePanel` as the panel content,
//! - `perch_drop_zone` geometry for drawing the dismiss indicator.
//!
//! The session taps the bubble open, moves the slider, collapses the panel,
//! drags the bubble around and finally drops it on the dismiss zone.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p perch_demos --example volume_bubble`

use kurbo::{Point, Size};
use perch_gesture::{Phase, PointerSample, Position};
use perch_overlay::volume::{VolumeControl, VolumePanel};
use perch_overlay::{
    HostSurface, OverlayConfig, OverlayController, OverlayMode, PanelEvent, PanelRoute,
    SurfaceError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Host that logs every request instead of touching a window manager.
#[derive(Debug, Default)]
struct LoggingHost {
    torn_down: bool,
}

impl HostSurface for LoggingHost {
    fn show_bubble(&mut self, at: Position) -> Result<(), SurfaceError> {
        info!(x = at.x, y = at.y, "show bubble");
        Ok(())
    }

    fn hide_bubble(&mut self) -> Result<(), SurfaceError> {
        info!("hide bubble");
        Ok(())
    }

    fn move_bubble(&mut self, to: Position) -> Result<(), SurfaceError> {
        info!(x = to.x, y = to.y, "move bubble");
        Ok(())
    }

    fn show_panel(&mut self, at: Position) -> Result<(), SurfaceError> {
        // Panels hug the right edge and only take the bubble's height.
        info!(y = at.y, "show panel");
        Ok(())
    }

    fn hide_panel(&mut self) -> Result<(), SurfaceError> {
        info!("hide panel");
        Ok(())
    }

    fn show_dismiss_indicator(&mut self) -> Result<(), SurfaceError> {
        info!("show dismiss indicator");
        Ok(())
    }

    fn hide_dismiss_indicator(&mut self) -> Result<(), SurfaceError> {
        info!("hide dismiss indicator");
        Ok(())
    }

    fn request_teardown(&mut self) -> Result<(), SurfaceError> {
        if self.torn_down {
            return Err(SurfaceError::Rejected {
                reason: "already torn down",
            });
        }
        self.torn_down = true;
        info!("teardown requested");
        Ok(())
    }
}

/// In-memory music stream.
#[derive(Debug)]
struct MusicStream {
    level: i32,
}

impl VolumeControl for MusicStream {
    fn level(&self) -> i32 {
        self.level
    }

    fn max(&self) -> i32 {
        15
    }

    fn set_level(&mut self, level: i32) {
        self.level = level;
    }
}

const CONFIG: &str = r#"{ "drag_threshold": 10, "zone": { "half_width": 150.0, "height_threshold": 250.0 } }"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config: OverlayConfig = match serde_json::from_str(CONFIG) {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid overlay config; using defaults");
            OverlayConfig::default()
        }
    };

    let screen = Size::new(1000.0, 2000.0);
    let mut overlay = OverlayController::attach(&config, LoggingHost::default(), screen);
    if let Some(region) = overlay.dismiss_region() {
        info!(?region, "dismiss region");
    }

    let press = |x: f64, y: f64, phase: Phase| PointerSample::new(Point::new(x, y), phase);

    // Tap: open the panel.
    overlay.on_pointer_event(press(100.0, 200.0, Phase::Down));
    overlay.on_pointer_event(press(105.0, 202.0, Phase::Move));
    overlay.on_pointer_event(press(105.0, 202.0, Phase::Up));
    assert_eq!(overlay.mode(), OverlayMode::Panel);

    // Slider interaction is delegated to the panel content.
    let mut panel = VolumePanel::open(MusicStream { level: 7 });
    info!(percent = panel.readout().percent, "panel opened");
    if overlay.on_panel_event(PanelEvent::Control) == PanelRoute::Delegate {
        let readout = panel.on_slider(12);
        info!(level = readout.level, percent = readout.percent, "slider moved");
    }

    // Tap outside: collapse.
    overlay.on_panel_event(PanelEvent::OutsideTap);
    assert_eq!(overlay.mode(), OverlayMode::Bubble);

    // Drag somewhere and let go away from the zone.
    overlay.on_pointer_event(press(100.0, 200.0, Phase::Down));
    overlay.on_pointer_event(press(130.0, 205.0, Phase::Move));
    overlay.on_pointer_event(press(135.0, 210.0, Phase::Move));
    overlay.on_pointer_event(press(900.0, 1950.0, Phase::Up));
    info!(position = ?overlay.position(), "bubble parked");

    // Drag onto the zone: dismissed.
    overlay.on_pointer_event(press(135.0, 210.0, Phase::Down));
    overlay.on_pointer_event(press(520.0, 1900.0, Phase::Move));
    overlay.on_pointer_event(press(520.0, 1900.0, Phase::Up));
    assert_eq!(overlay.mode(), OverlayMode::Removed);

    // A late teardown from the host lifecycle is a no-op.
    overlay.teardown();
    info!(torn_down = overlay.surface().torn_down, "session finished");
}
