// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay mode state machine.
//!
//! ## Transitions
//!
//! | From   | Event                               | Effect                                             | To      |
//! |--------|-------------------------------------|----------------------------------------------------|---------|
//! | Bubble | press start                         | show indicator                                     | Bubble  |
//! | Bubble | drag move                           | store position, move bubble                        | Bubble  |
//! | Bubble | drag end outside the zone           | hide indicator                                     | Bubble  |
//! | Bubble | drag end inside the zone            | hide indicator, hide bubble, request teardown      | Removed |
//! | Bubble | tap                                 | hide bubble, show panel at the stored position     | Panel   |
//! | Panel  | [`PanelEvent::OutsideTap`]          | hide panel, show bubble at the stored position     | Bubble  |
//! | Panel  | [`PanelEvent::Control`]             | none; the host handles it                          | Panel   |
//! | any    | [`OverlayController::teardown`]     | hide everything visible, request teardown          | Removed |
//!
//! The indicator is shown from the moment of the press, before the drag
//! threshold is crossed, so the target is visible before the user commits.
//!
//! A tap never consults the drop zone. `Up` produces `Tap` followed by
//! `DragEnd`; by the time `DragEnd` arrives the controller is already in
//! `Panel`, so that `DragEnd` only hides the indicator.
//!
//! ## Failures
//!
//! Input while `Removed`, and panel events outside `Panel`, are ignored and
//! logged. A host call that returns an error is logged and the transition
//! completes anyway, so a detached view can never wedge the state machine.

use kurbo::{Point, Rect};
use perch_drop_zone::{ScreenMetrics, Zone};
use perch_gesture::{GestureEvent, GestureRecognizer, PointerSample, Position};

use crate::config::OverlayConfig;
use crate::position::OverlayPositionStore;
use crate::surface::{HostSurface, SurfaceError, Visibility};

/// Which representation of the overlay is active.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OverlayMode {
    /// The compact, draggable bubble.
    Bubble,
    /// The expanded panel.
    Panel,
    /// Dismissed or torn down. Terminal.
    Removed,
}

/// Input addressed to the expanded panel, already hit-tested by the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanelEvent {
    /// A press outside the panel's interactive regions.
    OutsideTap,
    /// Interaction with a control inside the panel, such as the volume slider.
    Control,
}

/// How a [`PanelEvent`] was handled.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanelRoute {
    /// The panel collapsed back into the bubble.
    Collapsed,
    /// The host should forward the event to the panel content.
    Delegate,
    /// The panel is not showing; nothing happened.
    Ignored,
}

/// Owns the overlay's mode and position and drives a [`HostSurface`].
#[derive(Debug)]
pub struct OverlayController<S, M> {
    surface: S,
    metrics: M,
    zone: Zone,
    recognizer: GestureRecognizer,
    positions: OverlayPositionStore,
    mode: OverlayMode,
    visible: Visibility,
}

impl<S: HostSurface, M: ScreenMetrics> OverlayController<S, M> {
    /// Create a controller and show the bubble at the configured initial position.
    pub fn attach(config: &OverlayConfig, surface: S, metrics: M) -> Self {
        let mut controller = Self {
            surface,
            metrics,
            zone: config.zone,
            recognizer: GestureRecognizer::with_threshold(config.drag_threshold),
            positions: OverlayPositionStore::new(config.initial_position),
            mode: OverlayMode::Bubble,
            visible: Visibility::empty(),
        };
        controller.show_bubble();
        controller
    }

    /// Feed a raw pointer sample delivered to the bubble.
    ///
    /// Samples arriving outside [`OverlayMode::Bubble`] are ignored; the panel
    /// receives its input through [`OverlayController::on_panel_event`].
    pub fn on_pointer_event(&mut self, sample: PointerSample) {
        if self.mode != OverlayMode::Bubble {
            tracing::debug!(mode = ?self.mode, phase = ?sample.phase, "pointer sample ignored outside bubble mode");
            return;
        }

        let events = self
            .recognizer
            .on_pointer_event(sample, self.positions.get());
        for event in events {
            self.on_gesture(event);
        }
    }

    /// Feed a panel event.
    pub fn on_panel_event(&mut self, event: PanelEvent) -> PanelRoute {
        if self.mode != OverlayMode::Panel {
            tracing::debug!(mode = ?self.mode, ?event, "panel event ignored outside panel mode");
            return PanelRoute::Ignored;
        }

        match event {
            PanelEvent::OutsideTap => {
                self.hide_panel();
                self.show_bubble();
                self.enter(OverlayMode::Bubble);
                PanelRoute::Collapsed
            }
            PanelEvent::Control => PanelRoute::Delegate,
        }
    }

    /// Tear the overlay down from any mode.
    ///
    /// Hides every visible surface and requests teardown once. Repeated calls
    /// are no-ops and issue no host calls.
    pub fn teardown(&mut self) {
        if self.mode == OverlayMode::Removed {
            tracing::debug!("teardown requested while already removed");
            return;
        }
        self.recognizer.reset();
        self.hide_panel();
        self.hide_bubble();
        self.hide_indicator();
        self.remove();
    }

    /// The active mode.
    pub fn mode(&self) -> OverlayMode {
        self.mode
    }

    /// The overlay's anchor, or `None` once removed.
    pub fn position(&self) -> Option<Position> {
        (self.mode != OverlayMode::Removed).then(|| self.positions.get())
    }

    /// Surfaces the controller believes are visible.
    pub fn visibility(&self) -> Visibility {
        self.visible
    }

    /// True while a press on the bubble has crossed the drag threshold.
    pub fn is_dragging(&self) -> bool {
        self.recognizer.is_dragging()
    }

    /// The dismiss region for the current screen metrics, for drawing the indicator.
    pub fn dismiss_region(&self) -> Option<Rect> {
        self.zone.bounds(
            self.metrics.current_width(),
            self.metrics.current_height(),
        )
    }

    /// The dismiss target geometry.
    pub fn zone(&self) -> &Zone {
        &self.zone
    }

    /// The host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the host surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// The screen metrics provider.
    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    fn on_gesture(&mut self, event: GestureEvent) {
        match (self.mode, event) {
            (OverlayMode::Bubble, GestureEvent::PressStart) => self.show_indicator(),
            (OverlayMode::Bubble, GestureEvent::DragMove { new_position, .. }) => {
                self.positions.set(new_position);
                self.call("move_bubble", |s| s.move_bubble(new_position));
            }
            (OverlayMode::Bubble, GestureEvent::Tap) => {
                self.hide_bubble();
                let anchor = self.positions.get();
                self.visible.insert(Visibility::PANEL);
                self.call("show_panel", |s| s.show_panel(anchor));
                self.enter(OverlayMode::Panel);
            }
            (OverlayMode::Bubble, GestureEvent::DragEnd { raw }) => {
                self.hide_indicator();
                if self.over_zone(raw) {
                    self.hide_bubble();
                    self.remove();
                }
            }
            (_, GestureEvent::DragEnd { .. } | GestureEvent::Cancelled { .. }) => {
                self.hide_indicator();
            }
            (mode, event) => {
                tracing::debug!(?mode, ?event, "gesture event ignored");
            }
        }
    }

    fn over_zone(&self, raw: Point) -> bool {
        self.zone.contains(raw, &self.metrics)
    }

    fn enter(&mut self, to: OverlayMode) {
        tracing::debug!(from = ?self.mode, ?to, "overlay mode change");
        self.mode = to;
    }

    fn remove(&mut self) {
        self.enter(OverlayMode::Removed);
        self.call("request_teardown", |s| s.request_teardown());
    }

    fn show_bubble(&mut self) {
        let at = self.positions.get();
        self.visible.insert(Visibility::BUBBLE);
        self.call("show_bubble", |s| s.show_bubble(at));
    }

    fn hide_bubble(&mut self) {
        if self.visible.contains(Visibility::BUBBLE) {
            self.visible.remove(Visibility::BUBBLE);
            self.call("hide_bubble", |s| s.hide_bubble());
        }
    }

    fn hide_panel(&mut self) {
        if self.visible.contains(Visibility::PANEL) {
            self.visible.remove(Visibility::PANEL);
            self.call("hide_panel", |s| s.hide_panel());
        }
    }

    fn show_indicator(&mut self) {
        if !self.visible.contains(Visibility::DISMISS_INDICATOR) {
            self.visible.insert(Visibility::DISMISS_INDICATOR);
            self.call("show_dismiss_indicator", |s| s.show_dismiss_indicator());
        }
    }

    fn hide_indicator(&mut self) {
        if self.visible.contains(Visibility::DISMISS_INDICATOR) {
            self.visible.remove(Visibility::DISMISS_INDICATOR);
            self.call("hide_dismiss_indicator", |s| s.hide_dismiss_indicator());
        }
    }

    fn call(&mut self, name: &'static str, f: impl FnOnce(&mut S) -> Result<(), SurfaceError>) {
        if let Err(error) = f(&mut self.surface) {
            tracing::warn!(call = name, %error, "host surface call failed");
        }
    }
}
