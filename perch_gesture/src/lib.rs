// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Perch Gesture: tap versus drag classification for a draggable overlay.
//!
//! ## Overview
//!
//! A touch overlay receives a raw `Down → Move* → Up` pointer stream and has to
//! decide, per press, whether the user meant to *tap* the control or to *drag*
//! it somewhere else. This crate turns that stream into classified
//! [`GestureEvent`]s:
//!
//! - [`GestureEvent::PressStart`] on every `Down`.
//! - [`GestureEvent::DragMove`] once the pointer has left the drag threshold,
//!   carrying the new anchor [`Position`] for the control.
//! - [`GestureEvent::Tap`] on `Up` when the threshold was never crossed.
//! - [`GestureEvent::DragEnd`] on every `Up`, with the raw release coordinates.
//!
//! The decision is made at `Up`, never at `Down`: drag intent is only knowable
//! once movement exceeds the threshold.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use perch_gesture::{GestureEvent, GestureRecognizer, PointerSample, Position};
//!
//! let mut recognizer = GestureRecognizer::new();
//! let anchor = Position::new(50, 200);
//!
//! recognizer.on_pointer_event(PointerSample::down(Point::new(100.0, 200.0)), anchor);
//! recognizer.on_pointer_event(PointerSample::moved(Point::new(105.0, 202.0)), anchor);
//! let events = recognizer.on_pointer_event(PointerSample::up(Point::new(105.0, 202.0)), anchor);
//!
//! assert_eq!(events[0], GestureEvent::Tap);
//! assert!(matches!(events[1], GestureEvent::DragEnd { .. }));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` builds relying on `libm` for floating-point math.
//! - `serde`: `Serialize`/`Deserialize` for [`Position`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod recognizer;

pub use recognizer::{
    DEFAULT_DRAG_THRESHOLD, DragSession, GestureEvent, GestureEvents, GestureRecognizer,
};

use kurbo::Point;

/// Anchor coordinates of the overlay in screen pixels.
///
/// No clamping is applied: positions may leave the screen during fast drags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Horizontal anchor.
    pub x: i32,
    /// Vertical anchor.
    pub y: i32,
}

impl Position {
    /// Create a position from its two coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return this position shifted by `(dx, dy)`.
    ///
    /// Saturates instead of overflowing for absurd pointer deltas.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Phase of a raw pointer sample.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Pointer pressed.
    Down,
    /// Pointer moved while pressed.
    Move,
    /// Pointer released.
    Up,
    /// The platform aborted the gesture (for example, a system gesture stole it).
    Cancel,
}

/// A single raw input event in screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerSample {
    /// Raw screen position of the pointer.
    pub position: Point,
    /// Which part of the press this sample belongs to.
    pub phase: Phase,
}

impl PointerSample {
    /// Create a sample.
    pub const fn new(position: Point, phase: Phase) -> Self {
        Self { position, phase }
    }

    /// Shorthand for a [`Phase::Down`] sample.
    pub const fn down(position: Point) -> Self {
        Self::new(position, Phase::Down)
    }

    /// Shorthand for a [`Phase::Move`] sample.
    pub const fn moved(position: Point) -> Self {
        Self::new(position, Phase::Move)
    }

    /// Shorthand for a [`Phase::Up`] sample.
    pub const fn up(position: Point) -> Self {
        Self::new(position, Phase::Up)
    }

    /// Shorthand for a [`Phase::Cancel`] sample.
    pub const fn cancel(position: Point) -> Self {
        Self::new(position, Phase::Cancel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_adds_deltas() {
        let p = Position::new(50, 200).offset(30, -5);
        assert_eq!(p, Position::new(80, 195));
    }

    #[test]
    fn offset_saturates() {
        let p = Position::new(i32::MAX - 1, i32::MIN + 1).offset(10, -10);
        assert_eq!(p, Position::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn sample_shorthands_set_phase() {
        let pt = Point::new(1.0, 2.0);
        assert_eq!(PointerSample::down(pt).phase, Phase::Down);
        assert_eq!(PointerSample::moved(pt).phase, Phase::Move);
        assert_eq!(PointerSample::up(pt).phase, Phase::Up);
        assert_eq!(PointerSample::cancel(pt).phase, Phase::Cancel);
    }
}
