// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture recognition state machine.
//!
//! [`GestureRecognizer`] owns at most one [`DragSession`], tied one-to-one to a
//! `Down … Up` pointer sequence:
//!
//! 1. **Down** opens a session, recording the raw pointer position and the
//!    control's current anchor. Any stale session is discarded.
//! 2. **Move** computes truncated integer deltas from the *start* pointer
//!    position. Once either axis exceeds the threshold the session is dragging,
//!    and stays dragging until it closes.
//! 3. **Up** emits [`GestureEvent::Tap`] if the session never started dragging,
//!    then always [`GestureEvent::DragEnd`], and closes the session.
//!
//! Deltas are always measured against the start pointer, never accumulated per
//! move, so a slow drag made of many sub-threshold moves is still recognized.
//!
//! ## Protocol errors
//!
//! `Move`, `Up` and `Cancel` with no open session are ignored (an empty
//! [`GestureEvents`] is returned) and logged at `debug` level.
//!
//! ```
//! use kurbo::Point;
//! use perch_gesture::{GestureEvent, GestureRecognizer, PointerSample, Position};
//!
//! let mut recognizer = GestureRecognizer::with_threshold(10);
//! let anchor = Position::new(0, 0);
//!
//! recognizer.on_pointer_event(PointerSample::down(Point::new(100.0, 200.0)), anchor);
//! let events = recognizer.on_pointer_event(PointerSample::moved(Point::new(130.0, 205.0)), anchor);
//! assert_eq!(
//!     events[0],
//!     GestureEvent::DragMove {
//!         new_position: Position::new(30, 5),
//!         raw: Point::new(130.0, 205.0),
//!     }
//! );
//! assert!(recognizer.session().is_some_and(|s| s.is_dragging));
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::{Phase, PointerSample, Position};

/// Default drag threshold in device pixels.
pub const DEFAULT_DRAG_THRESHOLD: u32 = 10;

/// Events emitted for a single pointer sample.
///
/// `Up` yields at most two events (`Tap` then `DragEnd`), so this never spills.
pub type GestureEvents = SmallVec<[GestureEvent; 2]>;

/// A classified gesture event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// A press began.
    PressStart,
    /// The pointer moved beyond the threshold; the control should follow.
    DragMove {
        /// Start anchor shifted by the truncated pointer delta.
        new_position: Position,
        /// Raw pointer position of the move.
        raw: Point,
    },
    /// The press ended without ever crossing the drag threshold.
    Tap,
    /// The press ended. Always emitted on `Up`, after [`GestureEvent::Tap`] if any.
    DragEnd {
        /// Raw pointer position of the release.
        raw: Point,
    },
    /// The platform aborted the press. No tap is reported for it.
    Cancelled {
        /// Raw pointer position at cancellation.
        raw: Point,
    },
}

/// State of an open press.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Control anchor when the press began.
    pub start_position: Position,
    /// Raw pointer position when the press began.
    pub start_pointer: Point,
    /// True once any move has exceeded the threshold. Never reverts within a session.
    pub is_dragging: bool,
}

impl DragSession {
    /// Truncated integer delta from the start pointer to `raw`.
    ///
    /// Truncation is toward zero, so `-10.9` becomes `-10`.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "pointer deltas are deliberately truncated to whole pixels"
    )]
    pub fn delta(&self, raw: Point) -> (i32, i32) {
        let d: Vec2 = raw - self.start_pointer;
        // `as` truncates toward zero and saturates; NaN maps to 0.
        (d.x as i32, d.y as i32)
    }
}

/// Converts raw pointer samples into [`GestureEvent`]s.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    session: Option<DragSession>,
    /// Per-axis displacement (device pixels) that must be exceeded to start a drag.
    pub threshold: u32,
}

impl GestureRecognizer {
    /// Create a recognizer with [`DEFAULT_DRAG_THRESHOLD`].
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_DRAG_THRESHOLD)
    }

    /// Create a recognizer with a custom drag threshold.
    pub fn with_threshold(threshold: u32) -> Self {
        Self {
            session: None,
            threshold,
        }
    }

    /// Feed one raw sample.
    ///
    /// `anchor` is the control's current position; it is only read on `Down`.
    pub fn on_pointer_event(&mut self, sample: PointerSample, anchor: Position) -> GestureEvents {
        match sample.phase {
            Phase::Down => self.on_down(sample.position, anchor),
            Phase::Move => self.on_move(sample.position),
            Phase::Up => self.on_up(sample.position),
            Phase::Cancel => self.on_cancel(sample.position),
        }
    }

    /// Open a new session. Always emits [`GestureEvent::PressStart`].
    pub fn on_down(&mut self, raw: Point, anchor: Position) -> GestureEvents {
        if let Some(stale) = self.session.take() {
            tracing::debug!(?stale, "discarding stale drag session on pointer down");
        }
        self.session = Some(DragSession {
            start_position: anchor,
            start_pointer: raw,
            is_dragging: false,
        });
        smallvec::smallvec![GestureEvent::PressStart]
    }

    /// Track movement of the open session.
    ///
    /// Emits [`GestureEvent::DragMove`] for the move that crosses the threshold
    /// and for every move after it in the same session.
    pub fn on_move(&mut self, raw: Point) -> GestureEvents {
        let threshold = self.threshold;
        let Some(session) = self.session.as_mut() else {
            tracing::debug!(x = raw.x, y = raw.y, "pointer move without an open session");
            return GestureEvents::new();
        };

        let (dx, dy) = session.delta(raw);
        if !session.is_dragging && (dx.unsigned_abs() > threshold || dy.unsigned_abs() > threshold)
        {
            session.is_dragging = true;
        }

        if session.is_dragging {
            smallvec::smallvec![GestureEvent::DragMove {
                new_position: session.start_position.offset(dx, dy),
                raw,
            }]
        } else {
            GestureEvents::new()
        }
    }

    /// Close the open session, classifying it as a tap or the end of a drag.
    pub fn on_up(&mut self, raw: Point) -> GestureEvents {
        let Some(session) = self.session.take() else {
            tracing::debug!(x = raw.x, y = raw.y, "pointer up without an open session");
            return GestureEvents::new();
        };

        let mut events = GestureEvents::new();
        if !session.is_dragging {
            events.push(GestureEvent::Tap);
        }
        events.push(GestureEvent::DragEnd { raw });
        events
    }

    /// Abort the open session without classifying it.
    pub fn on_cancel(&mut self, raw: Point) -> GestureEvents {
        if self.session.take().is_none() {
            tracing::debug!(x = raw.x, y = raw.y, "pointer cancel without an open session");
            return GestureEvents::new();
        }
        smallvec::smallvec![GestureEvent::Cancelled { raw }]
    }

    /// Drop any open session silently.
    ///
    /// Returns `true` if a session was open.
    pub fn reset(&mut self) -> bool {
        self.session.take().is_some()
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// True if a session is open and has crossed the threshold.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some_and(|s| s.is_dragging)
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn drive(recognizer: &mut GestureRecognizer, samples: &[PointerSample]) -> Vec<GestureEvent> {
        let anchor = Position::new(50, 200);
        samples
            .iter()
            .flat_map(|s| recognizer.on_pointer_event(*s, anchor))
            .collect()
    }

    #[test]
    fn small_moves_end_in_tap() {
        let mut r = GestureRecognizer::new();

        let events = drive(
            &mut r,
            &[
                PointerSample::down(Point::new(100.0, 200.0)),
                PointerSample::moved(Point::new(105.0, 202.0)),
                PointerSample::up(Point::new(105.0, 202.0)),
            ],
        );

        assert_eq!(
            events,
            [
                GestureEvent::PressStart,
                GestureEvent::Tap,
                GestureEvent::DragEnd {
                    raw: Point::new(105.0, 202.0)
                },
            ]
        );
        assert!(r.session().is_none());
    }

    #[test]
    fn exactly_threshold_is_not_a_drag() {
        let mut r = GestureRecognizer::new();
        r.on_down(Point::new(100.0, 200.0), Position::default());

        let moved = r.on_move(Point::new(110.0, 190.0));

        assert!(moved.is_empty());
        assert!(!r.is_dragging());
        assert_eq!(r.on_up(Point::new(110.0, 190.0))[0], GestureEvent::Tap);
    }

    #[test]
    fn fractional_excess_is_truncated_away() {
        let mut r = GestureRecognizer::new();
        r.on_down(Point::new(100.0, 200.0), Position::default());

        // 10.9 truncates to 10, which does not exceed the threshold.
        assert!(r.on_move(Point::new(110.9, 200.0)).is_empty());
        assert!(r.on_move(Point::new(89.1, 200.0)).is_empty());
        assert!(!r.is_dragging());
    }

    #[test]
    fn crossing_threshold_moves_anchor_from_start() {
        let mut r = GestureRecognizer::new();

        let events = drive(
            &mut r,
            &[
                PointerSample::down(Point::new(100.0, 200.0)),
                PointerSample::moved(Point::new(130.0, 205.0)),
                PointerSample::moved(Point::new(135.0, 210.0)),
            ],
        );

        assert_eq!(
            events,
            [
                GestureEvent::PressStart,
                GestureEvent::DragMove {
                    new_position: Position::new(80, 205),
                    raw: Point::new(130.0, 205.0),
                },
                GestureEvent::DragMove {
                    new_position: Position::new(85, 210),
                    raw: Point::new(135.0, 210.0),
                },
            ]
        );
    }

    #[test]
    fn dragging_is_sticky_and_suppresses_tap() {
        let mut r = GestureRecognizer::new();
        r.on_down(Point::new(100.0, 200.0), Position::new(50, 200));
        r.on_move(Point::new(100.0, 260.0));

        // Returning near the start keeps the drag alive and still moves the control.
        let back = r.on_move(Point::new(101.0, 201.0));
        assert!(r.is_dragging());
        assert_eq!(
            back[0],
            GestureEvent::DragMove {
                new_position: Position::new(51, 201),
                raw: Point::new(101.0, 201.0),
            }
        );

        let up = r.on_up(Point::new(101.0, 201.0));
        assert_eq!(
            up.as_slice(),
            [GestureEvent::DragEnd {
                raw: Point::new(101.0, 201.0)
            }]
        );
    }

    #[test]
    fn negative_axis_exceeding_threshold_drags() {
        let mut r = GestureRecognizer::new();
        r.on_down(Point::new(100.0, 200.0), Position::new(0, 0));

        let events = r.on_move(Point::new(100.0, 188.0));

        assert!(r.is_dragging());
        assert!(matches!(
            events[0],
            GestureEvent::DragMove {
                new_position: Position { x: 0, y: -12 },
                ..
            }
        ));
    }

    #[test]
    fn custom_threshold_is_respected() {
        let mut r = GestureRecognizer::with_threshold(2);
        r.on_down(Point::new(0.0, 0.0), Position::default());

        assert!(!r.on_move(Point::new(3.0, 0.0)).is_empty());
    }

    #[test]
    fn move_and_up_without_down_are_ignored() {
        let mut r = GestureRecognizer::new();

        assert!(r.on_move(Point::new(1.0, 1.0)).is_empty());
        assert!(r.on_up(Point::new(1.0, 1.0)).is_empty());
        assert!(r.on_cancel(Point::new(1.0, 1.0)).is_empty());
        assert!(r.session().is_none());
    }

    #[test]
    fn down_discards_stale_session() {
        let mut r = GestureRecognizer::new();
        r.on_down(Point::new(0.0, 0.0), Position::new(1, 1));
        r.on_move(Point::new(50.0, 50.0));
        assert!(r.is_dragging());

        let events = r.on_down(Point::new(300.0, 300.0), Position::new(7, 8));

        assert_eq!(events.as_slice(), [GestureEvent::PressStart]);
        let session = r.session().copied().unwrap();
        assert!(!session.is_dragging);
        assert_eq!(session.start_position, Position::new(7, 8));
        assert_eq!(session.start_pointer, Point::new(300.0, 300.0));
    }

    #[test]
    fn anchor_is_only_read_on_down() {
        let mut r = GestureRecognizer::new();
        r.on_pointer_event(
            PointerSample::down(Point::new(0.0, 0.0)),
            Position::new(10, 10),
        );

        let events = r.on_pointer_event(
            PointerSample::moved(Point::new(20.0, 0.0)),
            Position::new(999, 999),
        );

        assert!(matches!(
            events[0],
            GestureEvent::DragMove {
                new_position: Position { x: 30, y: 10 },
                ..
            }
        ));
    }

    #[test]
    fn cancel_closes_session_without_tap() {
        let mut r = GestureRecognizer::new();
        r.on_down(Point::new(0.0, 0.0), Position::default());

        let events = r.on_cancel(Point::new(1.0, 1.0));

        assert_eq!(
            events.as_slice(),
            [GestureEvent::Cancelled {
                raw: Point::new(1.0, 1.0)
            }]
        );
        assert!(r.session().is_none());
    }

    #[test]
    fn reset_reports_whether_session_was_open() {
        let mut r = GestureRecognizer::new();
        assert!(!r.reset());
        r.on_down(Point::new(0.0, 0.0), Position::default());
        assert!(r.reset());
        assert!(r.session().is_none());
    }
}
