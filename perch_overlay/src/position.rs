// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared anchor position of the overlay.

use perch_gesture::Position;

/// Holds the overlay's current on-screen anchor across bubble/panel switches.
///
/// Values are stored as given. Nothing is clamped to the screen, so a fast drag
/// may park the anchor off-screen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayPositionStore {
    current: Position,
}

impl OverlayPositionStore {
    /// Create a store holding `initial`.
    pub const fn new(initial: Position) -> Self {
        Self { current: initial }
    }

    /// The current anchor.
    pub const fn get(&self) -> Position {
        self.current
    }

    /// Replace the current anchor.
    pub fn set(&mut self, position: Position) {
        self.current = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_raw_value() {
        let mut store = OverlayPositionStore::new(Position::new(50, 200));
        assert_eq!(store.get(), Position::new(50, 200));

        store.set(Position::new(-40, 99_999));
        assert_eq!(store.get(), Position::new(-40, 99_999));
    }
}
