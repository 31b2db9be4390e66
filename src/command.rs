//! Command-based control for cyclers.

use crate::color::Color;
use crate::config::TickInterval;
use crate::mode::CycleMode;

/// Actions for controlling a cycler.
///
/// One variant per control a host UI offers, so widget callbacks can forward
/// user input without holding on to the cycler's internals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CyclerAction {
    /// Select mode (stopped only).
    SetMode(CycleMode),
    /// Set tick interval (stopped only).
    SetInterval(TickInterval),
    /// Start cycling.
    Start,
    /// Stop cycling.
    Stop,
    /// Start if stopped, stop if running.
    Toggle,
    /// Advance one tick now.
    Step,
    /// Continue the cycle from a given color.
    ResumeFrom(Color),
    /// Return to the start color.
    Reset,
    /// Enter or leave fullscreen.
    SetFullscreen(bool),
    /// Show or hide window decorations.
    SetDecorated(bool),
    /// Pointer moved over the surface.
    PointerMoved,
}
