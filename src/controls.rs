//! Auto-hiding of the host's control toolbar.
//!
//! While a cycle is running the controls get out of the way: every pointer
//! motion restarts a countdown, and when it expires the controls hide. The
//! next motion brings them back without arming a new countdown, so it takes a
//! second motion to start hiding again.

use crate::logging;
use crate::time::{TimeDuration, TimeInstant};

/// Visibility state machine for the control toolbar.
#[derive(Debug, Clone, Copy)]
pub struct ControlsAutoHide<I: TimeInstant> {
    visible: bool,
    armed_at: Option<I>,
    delay: I::Duration,
}

impl<I: TimeInstant> ControlsAutoHide<I> {
    /// Creates a tracker with visible controls and no pending hide.
    pub fn new(delay: I::Duration) -> Self {
        Self {
            visible: true,
            armed_at: None,
            delay,
        }
    }

    /// Handles pointer motion.
    ///
    /// Returns true if the controls were hidden and are now shown again.
    pub fn pointer_moved(&mut self, now: I, running: bool) -> bool {
        if !self.visible {
            self.visible = true;
            logging::trace!("controls shown");
            return true;
        }

        self.armed_at = if running { Some(now) } else { None };
        false
    }

    /// Hides the controls once the countdown has expired.
    ///
    /// Returns true on the call that hides them.
    pub fn service(&mut self, now: I) -> bool {
        match self.armed_at {
            Some(armed_at)
                if now.duration_since(armed_at).as_millis() >= self.delay.as_millis() =>
            {
                self.armed_at = None;
                self.visible = false;
                logging::trace!("controls hidden");
                true
            }
            _ => false,
        }
    }

    /// Time left before the controls hide, if a countdown is running.
    pub fn remaining(&self, now: I) -> Option<I::Duration> {
        self.armed_at
            .map(|armed_at| self.delay.saturating_sub(now.duration_since(armed_at)))
    }

    /// Cancels any countdown and shows the controls.
    ///
    /// Returns true if they had been hidden.
    pub fn reset(&mut self) -> bool {
        self.armed_at = None;
        let was_hidden = !self.visible;
        self.visible = true;
        was_hidden
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true while a hide countdown is running.
    pub fn is_armed(&self) -> bool {
        self.armed_at.is_some()
    }

    pub fn delay(&self) -> I::Duration {
        self.delay
    }
}
