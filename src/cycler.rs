//! Color cycler with run control and tick timing.
//!
//! Provides [`ColorCycler`], which owns a [`ColorSurface`] and steps it through
//! a [`CycleMode`] once per tick. All run state (mode, interval, current
//! color, toolbar visibility) lives in the cycler itself; the host only feeds
//! it time and user actions.

use crate::color::Color;
use crate::command::CyclerAction;
use crate::config::{CyclerConfig, TickInterval};
use crate::controls::ControlsAutoHide;
use crate::cycle::{ColorCycle, next_color};
use crate::logging;
use crate::mode::CycleMode;
use crate::surface::ColorSurface;
use crate::time::{TimeDuration, TimeInstant, TimeSource};

/// The current state of a color cycler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CyclerState {
    /// Not cycling. Mode and interval may be changed.
    Stopped,
    /// Cycling. Surface changes color every tick; configuration is locked.
    Running,
}

/// Timing information returned by service operations.
///
/// Indicates when the cycler needs to be serviced again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming<D> {
    /// Something is scheduled. Service again after the specified delay.
    Delay(D),

    /// Nothing is scheduled. No servicing is needed until the cycler is
    /// started or the pointer moves.
    Idle,
}

/// Errors that can occur during cycler operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CyclerError {
    /// Operation called from an invalid state.
    InvalidState {
        /// The state the operation requires
        expected: CyclerState,
        /// The actual current state
        actual: CyclerState,
    },
    /// Mode or interval change attempted while running.
    ConfigLocked,
}

impl core::fmt::Display for CyclerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CyclerError::InvalidState { expected, actual } => {
                write!(
                    f,
                    "invalid state: expected {:?}, but cycler is {:?}",
                    expected, actual
                )
            }
            CyclerError::ConfigLocked => {
                write!(f, "mode and interval cannot change while cycling")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CyclerError {}

/// Cycles a single surface through a color pattern.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `S` - Surface implementation type
/// * `T` - Time source implementation type
pub struct ColorCycler<'t, I: TimeInstant, S: ColorSurface, T: TimeSource<I>> {
    surface: S,
    time_source: &'t T,
    state: CyclerState,
    mode: CycleMode,
    interval: TickInterval,
    current_color: Color,
    start_color: Color,
    last_tick: Option<I>,
    ticks: u64,
    controls: ControlsAutoHide<I>,
}

impl<'t, I: TimeInstant, S: ColorSurface, T: TimeSource<I>> ColorCycler<'t, I, S, T> {
    /// Creates a stopped cycler and paints the configured start color.
    pub fn new(mut surface: S, time_source: &'t T, config: CyclerConfig) -> Self {
        let start_color = config.start_color();
        surface.fill(start_color);

        Self {
            surface,
            time_source,
            state: CyclerState::Stopped,
            mode: config.mode(),
            interval: config.interval(),
            current_color: start_color,
            start_color,
            last_tick: None,
            ticks: 0,
            controls: ControlsAutoHide::new(I::Duration::from_millis(u64::from(
                config.hide_delay_ms(),
            ))),
        }
    }

    /// Handles a cycler action by dispatching to the appropriate method.
    ///
    /// # Returns
    /// * `Ok(ServiceTiming)` - When to service next
    /// * `Err` - Operation failed (invalid state, locked configuration)
    pub fn handle_action(
        &mut self,
        action: CyclerAction,
    ) -> Result<ServiceTiming<I::Duration>, CyclerError> {
        match action {
            CyclerAction::SetMode(mode) => self.set_mode(mode)?,
            CyclerAction::SetInterval(interval) => self.set_interval(interval)?,
            CyclerAction::Start => self.start()?,
            CyclerAction::Stop => self.stop()?,
            CyclerAction::Toggle => {
                if self.is_running() {
                    self.stop()?
                } else {
                    self.start()?
                }
            }
            CyclerAction::Step => {
                self.tick();
            }
            CyclerAction::ResumeFrom(color) => self.resume_from(color),
            CyclerAction::Reset => self.reset(),
            CyclerAction::SetFullscreen(fullscreen) => self.surface.set_fullscreen(fullscreen),
            CyclerAction::SetDecorated(decorated) => self.surface.set_decorated(decorated),
            CyclerAction::PointerMoved => self.pointer_moved(),
        }
        Ok(self.next_service())
    }

    /// Starts cycling. The first tick is due one interval from now.
    ///
    /// Must be called from `Stopped` state.
    pub fn start(&mut self) -> Result<(), CyclerError> {
        if self.state != CyclerState::Stopped {
            return Err(CyclerError::InvalidState {
                expected: CyclerState::Stopped,
                actual: self.state,
            });
        }

        self.last_tick = Some(self.time_source.now());
        self.ticks = 0;
        self.state = CyclerState::Running;
        self.surface.set_controls_locked(true);

        logging::debug!(
            "cycler started: mode {}, interval {} ms",
            self.mode,
            self.interval.as_millis()
        );
        Ok(())
    }

    /// Stops cycling and keeps the current color on the surface.
    ///
    /// Must be called from `Running` state. Unlocks the configuration and
    /// brings back the controls if they were hidden.
    pub fn stop(&mut self) -> Result<(), CyclerError> {
        if self.state != CyclerState::Running {
            return Err(CyclerError::InvalidState {
                expected: CyclerState::Running,
                actual: self.state,
            });
        }

        self.last_tick = None;
        self.state = CyclerState::Stopped;
        self.surface.set_controls_locked(false);
        if self.controls.reset() {
            self.surface.set_controls_visible(true);
        }

        logging::debug!("cycler stopped after {} ticks", self.ticks);
        Ok(())
    }

    /// Selects the cycle mode.
    ///
    /// # Errors
    /// * `ConfigLocked` - Cycler is running
    pub fn set_mode(&mut self, mode: CycleMode) -> Result<(), CyclerError> {
        if self.is_running() {
            return Err(CyclerError::ConfigLocked);
        }
        self.mode = mode;
        logging::debug!("mode set to {}", mode);
        Ok(())
    }

    /// Sets the tick interval.
    ///
    /// # Errors
    /// * `ConfigLocked` - Cycler is running
    pub fn set_interval(&mut self, interval: TickInterval) -> Result<(), CyclerError> {
        if self.is_running() {
            return Err(CyclerError::ConfigLocked);
        }
        self.interval = interval;
        logging::debug!("interval set to {} ms", interval.as_millis());
        Ok(())
    }

    /// Services the cycler, ticking and hiding controls when due.
    ///
    /// At most one tick is applied per call; ticks missed because the host
    /// serviced late are dropped rather than replayed, and the next tick is
    /// scheduled one interval from now.
    ///
    /// # Returns
    /// - `ServiceTiming::Delay(duration)` - Service again after this delay
    /// - `ServiceTiming::Idle` - Stopped with nothing pending
    pub fn service(&mut self) -> ServiceTiming<I::Duration> {
        let now = self.time_source.now();

        if let Some(last_tick) = self.last_tick {
            let elapsed = now.duration_since(last_tick).as_millis();
            if elapsed >= u64::from(self.interval.as_millis()) {
                self.tick();
                self.ticks = self.ticks.wrapping_add(1);
                self.last_tick = Some(now);
            }
        }

        if self.controls.service(now) {
            self.surface.set_controls_visible(false);
        }

        self.next_service_at(now)
    }

    /// Advances one step immediately and paints the new color.
    ///
    /// Works in either state. Manual steps neither move the tick schedule
    /// nor count towards [`ticks`](Self::ticks).
    pub fn tick(&mut self) -> Color {
        self.set_color(next_color(self.current_color, self.mode));
        self.current_color
    }

    /// Replaces the current color, so the cycle continues from `color`.
    pub fn resume_from(&mut self, color: Color) {
        self.set_color(color);
        logging::trace!(
            "resuming from ({}, {}, {})",
            color.red,
            color.green,
            color.blue
        );
    }

    /// Returns to the configured start color.
    pub fn reset(&mut self) {
        self.set_color(self.start_color);
    }

    /// Handles pointer motion over the surface for controls auto-hiding.
    pub fn pointer_moved(&mut self) {
        let now = self.time_source.now();
        let running = self.is_running();
        if self.controls.pointer_moved(now, running) {
            self.surface.set_controls_visible(true);
        }
    }

    /// Returns the colors the next `N` ticks would produce, without ticking.
    pub fn upcoming<const N: usize>(&self) -> heapless::Vec<Color, N> {
        ColorCycle::new(self.current_color, self.mode)
            .take(N)
            .collect()
    }

    /// Returns the current state of the cycler.
    pub fn state(&self) -> CyclerState {
        self.state
    }

    /// Returns true if the cycler is currently running.
    pub fn is_running(&self) -> bool {
        self.state == CyclerState::Running
    }

    pub fn mode(&self) -> CycleMode {
        self.mode
    }

    pub fn interval(&self) -> TickInterval {
        self.interval
    }

    /// Returns the color currently on the surface.
    pub fn current_color(&self) -> Color {
        self.current_color
    }

    /// Returns the number of timer ticks since the last start.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns true if the controls are currently shown.
    pub fn controls_visible(&self) -> bool {
        self.controls.is_visible()
    }

    /// Returns a reference to the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns a mutable reference to the surface.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Consumes the cycler, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn set_color(&mut self, color: Color) {
        if color != self.current_color {
            self.surface.fill(color);
            self.current_color = color;
        }
    }

    fn next_service(&self) -> ServiceTiming<I::Duration> {
        self.next_service_at(self.time_source.now())
    }

    fn next_service_at(&self, now: I) -> ServiceTiming<I::Duration> {
        let tick_due = self.last_tick.map(|last_tick| {
            self.interval
                .to_duration::<I::Duration>()
                .saturating_sub(now.duration_since(last_tick))
        });
        let hide_due = self.controls.remaining(now);

        match (tick_due, hide_due) {
            (Some(tick), Some(hide)) => {
                if tick.as_millis() <= hide.as_millis() {
                    ServiceTiming::Delay(tick)
                } else {
                    ServiceTiming::Delay(hide)
                }
            }
            (Some(due), None) | (None, Some(due)) => ServiceTiming::Delay(due),
            (None, None) => ServiceTiming::Idle,
        }
    }
}
