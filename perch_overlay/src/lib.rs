// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Overlay: a bubble that drags, dismisses, and expands into a panel.
//!
//! ## Overview
//!
//! A screen overlay shows a small draggable *bubble*. The user can:
//!
//! - drag it anywhere on screen,
//! - drop it on a bottom-centre drop zone to dismiss it for good,
//! - tap it to expand into a larger *panel* (here, a volume slider), and
//! - tap outside the panel's controls to collapse back into the bubble.
//!
//! [`OverlayController`] owns the only real state of that system: the
//! [`OverlayMode`] (`Bubble ⇄ Panel → Removed`) and the shared anchor
//! [`Position`]. It classifies raw pointer input with
//! [`perch_gesture::GestureRecognizer`], hit-tests releases with
//! [`perch_drop_zone::Zone`], and asks a host-provided [`HostSurface`] to
//! show, hide, and move the visual elements. It never renders anything itself.
//!
//! ## Workflow
//!
//! 1) Implement [`HostSurface`] over your window manager and
//!    [`ScreenMetrics`](perch_drop_zone::ScreenMetrics) over your display info.
//! 2) [`OverlayController::attach`] with an [`OverlayConfig`]; the bubble appears.
//! 3) Forward bubble pointer samples to [`OverlayController::on_pointer_event`].
//! 4) While the panel shows, hit-test panel input yourself and forward it as a
//!    [`PanelEvent`]. [`PanelRoute::Delegate`] means "give it to the panel
//!    content", for example [`volume::VolumePanel::on_slider`].
//! 5) When the mode becomes [`OverlayMode::Removed`] the host has been asked to
//!    tear down; drop the controller.
//!
//! ```
//! use kurbo::{Point, Size};
//! use perch_overlay::{
//!     HostSurface, OverlayConfig, OverlayController, OverlayMode, PanelEvent, SurfaceError,
//! };
//! use perch_gesture::{PointerSample, Position};
//!
//! #[derive(Default)]
//! struct Host {
//!     panel_at: Option<Position>,
//! }
//!
//! impl HostSurface for Host {
//!     fn show_bubble(&mut self, _: Position) -> Result<(), SurfaceError> { Ok(()) }
//!     fn hide_bubble(&mut self) -> Result<(), SurfaceError> { Ok(()) }
//!     fn move_bubble(&mut self, _: Position) -> Result<(), SurfaceError> { Ok(()) }
//!     fn show_panel(&mut self, at: Position) -> Result<(), SurfaceError> {
//!         self.panel_at = Some(at);
//!         Ok(())
//!     }
//!     fn hide_panel(&mut self) -> Result<(), SurfaceError> { Ok(()) }
//!     fn show_dismiss_indicator(&mut self) -> Result<(), SurfaceError> { Ok(()) }
//!     fn hide_dismiss_indicator(&mut self) -> Result<(), SurfaceError> { Ok(()) }
//!     fn request_teardown(&mut self) -> Result<(), SurfaceError> { Ok(()) }
//! }
//!
//! let screen = Size::new(1000.0, 2000.0);
//! let mut overlay = OverlayController::attach(&OverlayConfig::default(), Host::default(), screen);
//!
//! // Tap the bubble.
//! overlay.on_pointer_event(PointerSample::down(Point::new(100.0, 200.0)));
//! overlay.on_pointer_event(PointerSample::up(Point::new(104.0, 203.0)));
//! assert_eq!(overlay.mode(), OverlayMode::Panel);
//! assert_eq!(overlay.surface().panel_at, Some(Position::new(50, 200)));
//!
//! // Tap outside the slider.
//! overlay.on_panel_event(PanelEvent::OutsideTap);
//! assert_eq!(overlay.mode(), OverlayMode::Bubble);
//! ```
//!
//! ## Threading
//!
//! Everything runs synchronously on the thread that delivers input. Nothing
//! blocks or suspends, and samples are processed strictly in delivery order.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: `no_std` builds relying on `libm` for floating-point math.
//! - `serde`: (de)serialization of [`OverlayConfig`] and the types it contains.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod position;
mod surface;

pub mod volume;

pub use config::OverlayConfig;
pub use controller::{OverlayController, OverlayMode, PanelEvent, PanelRoute};
pub use position::OverlayPositionStore;
pub use surface::{HostSurface, SurfaceError, Visibility};

pub use perch_drop_zone::{ScreenMetrics, Zone};
pub use perch_gesture::{PointerSample, Position};
