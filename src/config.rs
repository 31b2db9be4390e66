//! Validated cycler configuration.
//!
//! Bad input is rejected here, at the boundary where a host turns widget
//! values or command-line text into a [`CyclerConfig`]. Nothing downstream
//! has to cope with an unknown mode or an out-of-range interval.

use crate::color::{BLACK, Color};
use crate::mode::{CycleMode, ModeError};
use crate::time::TimeDuration;
use core::fmt;

/// Shortest accepted tick interval.
pub const MIN_INTERVAL_MS: u32 = 1;

/// Longest accepted tick interval.
pub const MAX_INTERVAL_MS: u32 = 5000;

/// Tick interval used when none is configured.
pub const DEFAULT_INTERVAL_MS: u32 = 100;

/// Pointer inactivity before the controls hide while running.
pub const DEFAULT_HIDE_DELAY_MS: u32 = 3000;

/// Time between two ticks, in milliseconds, within
/// [`MIN_INTERVAL_MS`]..=[`MAX_INTERVAL_MS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickInterval(u32);

impl TickInterval {
    /// Validates a millisecond interval.
    pub const fn from_millis(millis: u32) -> Result<Self, ConfigError> {
        if millis < MIN_INTERVAL_MS || millis > MAX_INTERVAL_MS {
            Err(ConfigError::IntervalOutOfRange { millis })
        } else {
            Ok(TickInterval(millis))
        }
    }

    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Converts to the host's duration type.
    pub fn to_duration<D: TimeDuration>(self) -> D {
        D::from_millis(u64::from(self.0))
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        TickInterval(DEFAULT_INTERVAL_MS)
    }
}

impl TryFrom<u32> for TickInterval {
    type Error = ConfigError;

    fn try_from(millis: u32) -> Result<Self, Self::Error> {
        TickInterval::from_millis(millis)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Tick interval outside the accepted range.
    IntervalOutOfRange { millis: u32 },

    /// Controls hide delay of zero would hide them immediately.
    ZeroHideDelay,

    /// Mode selection not recognized.
    Mode(ModeError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IntervalOutOfRange { millis } => {
                write!(
                    f,
                    "tick interval {} ms is outside {}..={} ms",
                    millis, MIN_INTERVAL_MS, MAX_INTERVAL_MS
                )
            }
            ConfigError::ZeroHideDelay => {
                write!(f, "controls hide delay must be non-zero")
            }
            ConfigError::Mode(err) => {
                write!(f, "mode error: {}", err)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Mode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ModeError> for ConfigError {
    fn from(err: ModeError) -> Self {
        ConfigError::Mode(err)
    }
}

/// Everything a [`ColorCycler`](crate::ColorCycler) needs to know up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CyclerConfig {
    mode: CycleMode,
    interval: TickInterval,
    start_color: Color,
    hide_delay_ms: u32,
}

impl CyclerConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> CyclerConfigBuilder {
        CyclerConfigBuilder::new()
    }

    pub fn mode(&self) -> CycleMode {
        self.mode
    }

    pub fn interval(&self) -> TickInterval {
        self.interval
    }

    /// Color shown before the first tick.
    pub fn start_color(&self) -> Color {
        self.start_color
    }

    /// Pointer inactivity before the controls hide, in milliseconds.
    pub fn hide_delay_ms(&self) -> u32 {
        self.hide_delay_ms
    }
}

impl Default for CyclerConfig {
    fn default() -> Self {
        Self {
            mode: CycleMode::default(),
            interval: TickInterval::default(),
            start_color: BLACK,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
        }
    }
}

/// Builder for [`CyclerConfig`].
///
/// Mode lookups fail immediately since the caller is usually holding the raw
/// widget value; numeric ranges are checked in [`build`](Self::build).
#[derive(Debug, Clone, Copy)]
pub struct CyclerConfigBuilder {
    mode: CycleMode,
    interval_ms: u32,
    start_color: Color,
    hide_delay_ms: u32,
}

impl CyclerConfigBuilder {
    /// Creates a builder holding the defaults.
    pub fn new() -> Self {
        Self {
            mode: CycleMode::default(),
            interval_ms: DEFAULT_INTERVAL_MS,
            start_color: BLACK,
            hide_delay_ms: DEFAULT_HIDE_DELAY_MS,
        }
    }

    pub fn mode(mut self, mode: CycleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Selects the mode by picker index.
    ///
    /// # Errors
    /// * `Mode(UnknownIndex)` - Index is not 0, 1 or 2
    pub fn mode_index(mut self, index: i32) -> Result<Self, ConfigError> {
        self.mode = CycleMode::from_index(index)?;
        Ok(self)
    }

    /// Selects the mode by name (`rgb`, `bw`, `rainbow`).
    ///
    /// # Errors
    /// * `Mode(UnknownName)` - Name not recognized
    pub fn mode_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.mode = name.parse()?;
        Ok(self)
    }

    pub fn interval_millis(mut self, millis: u32) -> Self {
        self.interval_ms = millis;
        self
    }

    pub fn start_color(mut self, color: Color) -> Self {
        self.start_color = color;
        self
    }

    pub fn hide_delay_millis(mut self, millis: u32) -> Self {
        self.hide_delay_ms = millis;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `IntervalOutOfRange` - Interval outside 1..=5000 ms
    /// * `ZeroHideDelay` - Controls hide delay is zero
    pub fn build(self) -> Result<CyclerConfig, ConfigError> {
        let interval = TickInterval::from_millis(self.interval_ms)?;

        if self.hide_delay_ms == 0 {
            return Err(ConfigError::ZeroHideDelay);
        }

        Ok(CyclerConfig {
            mode: self.mode,
            interval,
            start_color: self.start_color,
            hide_delay_ms: self.hide_delay_ms,
        })
    }
}

impl Default for CyclerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_bounds_are_inclusive() {
        assert!(TickInterval::from_millis(MIN_INTERVAL_MS).is_ok());
        assert!(TickInterval::from_millis(MAX_INTERVAL_MS).is_ok());
        assert_eq!(
            TickInterval::from_millis(0),
            Err(ConfigError::IntervalOutOfRange { millis: 0 })
        );
        assert_eq!(
            TickInterval::from_millis(5001),
            Err(ConfigError::IntervalOutOfRange { millis: 5001 })
        );
    }

    #[test]
    fn default_config_matches_builder_defaults() {
        let built = CyclerConfig::builder().build().unwrap();
        assert_eq!(built, CyclerConfig::default());
        assert_eq!(built.interval().as_millis(), DEFAULT_INTERVAL_MS);
    }
}
