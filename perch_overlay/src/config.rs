// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use perch_drop_zone::Zone;
use perch_gesture::{DEFAULT_DRAG_THRESHOLD, Position};

/// Tunables for an [`OverlayController`](crate::OverlayController).
///
/// With the `serde` feature every field is optional in serialized form and
/// falls back to its default.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayConfig {
    /// Per-axis pointer displacement, in device pixels, that turns a press into a drag.
    pub drag_threshold: u32,
    /// Dismiss target geometry.
    pub zone: Zone,
    /// Where the bubble appears when the controller attaches.
    pub initial_position: Position,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
            zone: Zone::default(),
            initial_position: Position::new(50, 200),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_overlay() {
        let config = OverlayConfig::default();
        assert_eq!(config.drag_threshold, 10);
        assert_eq!(config.zone.half_width, 150.0);
        assert_eq!(config.zone.height_threshold, 250.0);
        assert_eq!(config.initial_position, Position::new(50, 200));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_document_keeps_other_defaults() {
        let config: OverlayConfig = serde_json::from_str(
            r#"{ "drag_threshold": 24, "initial_position": { "x": 0, "y": 640 } }"#,
        )
        .unwrap();

        assert_eq!(config.drag_threshold, 24);
        assert_eq!(config.initial_position, Position::new(0, 640));
        assert_eq!(config.zone, Zone::default());
    }
}
