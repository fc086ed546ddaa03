// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Volume slider content for the expanded panel.
//!
//! The controller does not depend on this module. A host routes
//! [`PanelRoute::Delegate`](crate::PanelRoute::Delegate) slider input here and
//! renders the returned [`VolumeReadout`].
//!
//! ```
//! use perch_overlay::volume::{VolumeControl, VolumePanel};
//!
//! struct Stream { level: i32 }
//!
//! impl VolumeControl for Stream {
//!     fn level(&self) -> i32 { self.level }
//!     fn max(&self) -> i32 { 15 }
//!     fn set_level(&mut self, level: i32) { self.level = level; }
//! }
//!
//! let mut panel = VolumePanel::open(Stream { level: 7 });
//! assert_eq!(panel.readout().percent, 46);
//!
//! let readout = panel.on_slider(15);
//! assert_eq!(readout.percent, 100);
//! ```

/// Audio level collaborator.
pub trait VolumeControl {
    /// Current level.
    fn level(&self) -> i32;
    /// Highest level the stream accepts.
    fn max(&self) -> i32;
    /// Apply a new level.
    fn set_level(&mut self, level: i32);
}

/// Integer percentage `level * 100 / max`, truncated.
///
/// A non-positive `max` yields 0 instead of dividing.
pub fn percent(level: i32, max: i32) -> i32 {
    if max <= 0 {
        return 0;
    }
    level.saturating_mul(100) / max
}

/// What the panel should display.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VolumeReadout {
    /// Slider position.
    pub level: i32,
    /// Slider range end.
    pub max: i32,
    /// Label percentage.
    pub percent: i32,
}

/// Slider state bound to a [`VolumeControl`].
#[derive(Debug)]
pub struct VolumePanel<V> {
    volume: V,
    readout: VolumeReadout,
}

impl<V: VolumeControl> VolumePanel<V> {
    /// Read the current level and range from `volume`.
    pub fn open(volume: V) -> Self {
        let readout = Self::read(&volume);
        Self { volume, readout }
    }

    /// Re-read level and range, for example after an external volume change.
    pub fn refresh(&mut self) -> VolumeReadout {
        self.readout = Self::read(&self.volume);
        self.readout
    }

    /// The user moved the slider to `progress`.
    ///
    /// The level is clamped to `0..=max` before it is applied. With no usable
    /// range the previous percentage is kept.
    pub fn on_slider(&mut self, progress: i32) -> VolumeReadout {
        let max = self.readout.max;
        let level = if max > 0 { progress.clamp(0, max) } else { progress };
        self.volume.set_level(level);
        self.readout.level = level;
        if max > 0 {
            self.readout.percent = percent(level, max);
        } else {
            tracing::debug!(level, max, "volume range unusable; keeping previous percentage");
        }
        self.readout
    }

    /// The last computed readout.
    pub fn readout(&self) -> VolumeReadout {
        self.readout
    }

    /// The wrapped collaborator.
    pub fn volume(&self) -> &V {
        &self.volume
    }

    /// Give the collaborator back.
    pub fn into_inner(self) -> V {
        self.volume
    }

    fn read(volume: &V) -> VolumeReadout {
        let level = volume.level();
        let max = volume.max();
        VolumeReadout {
            level,
            max,
            percent: percent(level, max),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    struct FakeStream {
        level: i32,
        max: i32,
        writes: Vec<i32>,
    }

    impl FakeStream {
        fn new(level: i32, max: i32) -> Self {
            Self {
                level,
                max,
                writes: Vec::new(),
            }
        }
    }

    impl VolumeControl for FakeStream {
        fn level(&self) -> i32 {
            self.level
        }

        fn max(&self) -> i32 {
            self.max
        }

        fn set_level(&mut self, level: i32) {
            self.level = level;
            self.writes.push(level);
        }
    }

    #[test]
    fn percent_truncates() {
        assert_eq!(percent(7, 15), 46);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 66);
        assert_eq!(percent(15, 15), 100);
    }

    #[test]
    fn percent_guards_zero_max() {
        assert_eq!(percent(7, 0), 0);
        assert_eq!(percent(7, -3), 0);
    }

    #[test]
    fn open_reads_stream() {
        let panel = VolumePanel::open(FakeStream::new(7, 15));
        assert_eq!(
            panel.readout(),
            VolumeReadout {
                level: 7,
                max: 15,
                percent: 46
            }
        );
    }

    #[test]
    fn slider_writes_level_and_updates_percent() {
        let mut panel = VolumePanel::open(FakeStream::new(0, 15));

        let readout = panel.on_slider(10);

        assert_eq!(readout.level, 10);
        assert_eq!(readout.percent, 66);
        assert_eq!(panel.volume().writes, [10]);
    }

    #[test]
    fn slider_is_clamped_to_range() {
        let mut panel = VolumePanel::open(FakeStream::new(5, 15));

        assert_eq!(panel.on_slider(40).level, 15);
        assert_eq!(panel.on_slider(-2).level, 0);
        assert_eq!(panel.into_inner().writes, [15, 0]);
    }

    #[test]
    fn zero_max_keeps_previous_percent() {
        let mut panel = VolumePanel::open(FakeStream::new(3, 0));
        assert_eq!(panel.readout().percent, 0);

        let readout = panel.on_slider(2);

        assert_eq!(readout.percent, 0);
        assert_eq!(readout.level, 2);
        assert_eq!(panel.volume().writes, [2]);
    }

    #[test]
    fn refresh_picks_up_external_changes() {
        let mut panel = VolumePanel::open(FakeStream::new(3, 15));
        panel.volume.level = 12;

        assert_eq!(panel.refresh().percent, 80);
    }
}
