// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dismiss-zone hit testing for draggable overlays.
//!
//! A [`Zone`] describes a band at the bottom-centre of the screen. Releasing a
//! dragged overlay inside it dismisses the overlay. The test runs against raw
//! screen coordinates of the pointer, not coordinates local to any surface.
//!
//! Screen metrics change on rotation and display-size changes, so zone bounds
//! are never cached: every query takes the *current* metrics, either directly
//! ([`is_in_zone`]) or through a [`ScreenMetrics`] provider
//! ([`Zone::contains`]).
//!
//! ```
//! use kurbo::{Point, Size};
//! use perch_drop_zone::{Zone, is_in_zone};
//!
//! let zone = Zone::default();
//! let screen = Size::new(1000.0, 2000.0);
//!
//! // Bottom band starts at 2000 - 250 = 1750; centre band is 500 ± 150.
//! assert!(is_in_zone(520.0, 1900.0, 1000.0, 2000.0, &zone));
//! assert!(!is_in_zone(900.0, 1950.0, 1000.0, 2000.0, &zone));
//! assert!(zone.contains(Point::new(520.0, 1900.0), &screen));
//! ```
//!
//! ## Degenerate metrics
//!
//! A screen with a non-positive or non-finite width or height has no zone:
//! every query answers `false`.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, Size};

/// Source of the live screen size, in the same pixel space as pointer samples.
pub trait ScreenMetrics {
    /// Current screen width.
    fn current_width(&self) -> f64;
    /// Current screen height.
    fn current_height(&self) -> f64;
}

/// Fixed metrics, handy for hosts that push size updates themselves.
impl ScreenMetrics for Size {
    fn current_width(&self) -> f64 {
        self.width
    }

    fn current_height(&self) -> f64 {
        self.height
    }
}

impl<M: ScreenMetrics + ?Sized> ScreenMetrics for &M {
    fn current_width(&self) -> f64 {
        (**self).current_width()
    }

    fn current_height(&self) -> f64 {
        (**self).current_height()
    }
}

/// Geometry of the dismiss target.
///
/// Owned by the host surface; read-only here.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Zone {
    /// Horizontal offset of the zone centre from the screen centre. Zero centres it.
    pub center_x: f64,
    /// Distance between the screen bottom and the indicator's anchor.
    ///
    /// Only used to place the indicator; it does not affect the hit test.
    pub bottom_margin_y: f64,
    /// Half the width of the centre band.
    pub half_width: f64,
    /// Height of the bottom band.
    pub height_threshold: f64,
}

impl Default for Zone {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            bottom_margin_y: 50.0,
            half_width: 150.0,
            height_threshold: 250.0,
        }
    }
}

impl Zone {
    /// Test a raw pointer position against the zone on a screen given by `metrics`.
    pub fn contains(&self, pt: Point, metrics: &impl ScreenMetrics) -> bool {
        is_in_zone(
            pt.x,
            pt.y,
            metrics.current_width(),
            metrics.current_height(),
            self,
        )
    }

    /// The dismiss region on a screen of the given size.
    ///
    /// The hit test excludes the left, right and top edges of this rectangle.
    /// Returns `None` for degenerate metrics.
    pub fn bounds(&self, screen_width: f64, screen_height: f64) -> Option<Rect> {
        if !metrics_usable(screen_width, screen_height) {
            return None;
        }
        let cx = screen_width / 2.0 + self.center_x;
        Some(Rect::new(
            cx - self.half_width,
            screen_height - self.height_threshold,
            cx + self.half_width,
            screen_height,
        ))
    }

    /// Where a host should anchor the indicator: bottom-centre, lifted by
    /// [`Zone::bottom_margin_y`].
    pub fn indicator_anchor(&self, screen_width: f64, screen_height: f64) -> Option<Point> {
        if !metrics_usable(screen_width, screen_height) {
            return None;
        }
        Some(Point::new(
            screen_width / 2.0 + self.center_x,
            screen_height - self.bottom_margin_y,
        ))
    }
}

/// Decide whether a raw pointer position lies inside the dismiss zone.
///
/// `y` must be strictly below the top of the bottom band and `x` strictly
/// within `half_width` of the zone centre.
pub fn is_in_zone(x: f64, y: f64, screen_width: f64, screen_height: f64, zone: &Zone) -> bool {
    if !metrics_usable(screen_width, screen_height) {
        tracing::debug!(
            screen_width,
            screen_height,
            "degenerate screen metrics; drop zone disabled"
        );
        return false;
    }

    let in_bottom_band = y > screen_height - zone.height_threshold;
    let offset = x - (screen_width / 2.0 + zone.center_x);
    let in_center_band = offset < zone.half_width && -offset < zone.half_width;

    in_bottom_band && in_center_band
}

fn metrics_usable(width: f64, height: f64) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
