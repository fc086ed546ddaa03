// Copyright 2025 the Perch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-side rendering collaborator.
//!
//! The controller never owns a window or a view. It only tells the host which
//! surfaces should be visible and where, through [`HostSurface`]. A host backed
//! by a platform window manager typically maps `show_*` to adding a view,
//! `hide_*` to removing it, and `move_bubble` to a layout update.
//!
//! Every call may fail (for example, the view was already detached). The
//! controller logs such failures and keeps going; see
//! [`OverlayController`](crate::OverlayController).

use perch_gesture::Position;
use thiserror::Error;

/// Failure reported by a host surface call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
    /// The surface is no longer attached to the window manager.
    #[error("surface is detached from the window manager")]
    Detached,
    /// The host refused the request.
    #[error("host rejected the request: {reason}")]
    Rejected {
        /// Short host-provided explanation.
        reason: &'static str,
    },
}

/// Visual operations the controller requests from the host.
pub trait HostSurface {
    /// Show the bubble with its anchor at `at`.
    fn show_bubble(&mut self, at: Position) -> Result<(), SurfaceError>;
    /// Hide (or destroy) the bubble.
    fn hide_bubble(&mut self) -> Result<(), SurfaceError>;
    /// Move the visible bubble to `to`.
    fn move_bubble(&mut self, to: Position) -> Result<(), SurfaceError>;
    /// Show the panel anchored from the bubble position `at`.
    ///
    /// How the panel interprets the value (full carry, vertical only, …) is a
    /// layout decision of the host.
    fn show_panel(&mut self, at: Position) -> Result<(), SurfaceError>;
    /// Hide the panel.
    fn hide_panel(&mut self) -> Result<(), SurfaceError>;
    /// Show the drop-zone indicator.
    fn show_dismiss_indicator(&mut self) -> Result<(), SurfaceError>;
    /// Hide the drop-zone indicator.
    fn hide_dismiss_indicator(&mut self) -> Result<(), SurfaceError>;
    /// Ask the host to tear the overlay down. Issued once, on entering
    /// [`OverlayMode::Removed`](crate::OverlayMode::Removed).
    fn request_teardown(&mut self) -> Result<(), SurfaceError>;
}

impl<S: HostSurface + ?Sized> HostSurface for &mut S {
    fn show_bubble(&mut self, at: Position) -> Result<(), SurfaceError> {
        (**self).show_bubble(at)
    }

    fn hide_bubble(&mut self) -> Result<(), SurfaceError> {
        (**self).hide_bubble()
    }

    fn move_bubble(&mut self, to: Position) -> Result<(), SurfaceError> {
        (**self).move_bubble(to)
    }

    fn show_panel(&mut self, at: Position) -> Result<(), SurfaceError> {
        (**self).show_panel(at)
    }

    fn hide_panel(&mut self) -> Result<(), SurfaceError> {
        (**self).hide_panel()
    }

    fn show_dismiss_indicator(&mut self) -> Result<(), SurfaceError> {
        (**self).show_dismiss_indicator()
    }

    fn hide_dismiss_indicator(&mut self) -> Result<(), SurfaceError> {
        (**self).hide_dismiss_indicator()
    }

    fn request_teardown(&mut self) -> Result<(), SurfaceError> {
        (**self).request_teardown()
    }
}

bitflags::bitflags! {
    /// Surfaces the controller currently considers visible.
    ///
    /// This is logical visibility: it is updated even if the host call that
    /// should have produced it failed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Visibility: u8 {
        /// The compact bubble.
        const BUBBLE            = 0b0000_0001;
        /// The expanded panel.
        const PANEL             = 0b0000_0010;
        /// The drop-zone indicator.
        const DISMISS_INDICATOR = 0b0000_0100;
    }
}
