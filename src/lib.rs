#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Color`**: An 8-bit `Srgb<u8>` triple, the only state the cycle patterns read
//! - **`CycleMode`**: Which pattern to run (`Rgb`, `BlackWhite` or `Rainbow`)
//! - **`next_color`**: The pure step function computing the next color from the current one
//! - **`ColorCycle`**: Iterator over the colors a mode produces from a starting color
//! - **`CyclerConfig`**: Validated mode, tick interval, start color and controls hide delay
//! - **`ColorCycler`**: Drives a single surface through a pattern, one color per tick
//! - **`ColorSurface`**: Trait to implement for whatever displays the color
//! - **`TimeSource`**: Trait to implement for your timing system
//! - **`ControlsAutoHide`**: Hides the host's controls after pointer inactivity while running
//! - **`CyclerAction`**: Commands that can be sent to control a cycler
//!
//! No pattern keeps a phase counter: the next color is always derived from the
//! color currently displayed, so a cycle can be resumed from any observed triple.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod logging;

pub mod color;
pub mod command;
pub mod config;
pub mod controls;
pub mod cycle;
pub mod cycler;
pub mod mode;
pub mod surface;
pub mod time;

pub use color::{BLACK, BLUE, Color, GREEN, RED, WHITE};
pub use command::CyclerAction;
pub use config::{
    ConfigError, CyclerConfig, CyclerConfigBuilder, DEFAULT_HIDE_DELAY_MS, DEFAULT_INTERVAL_MS,
    MAX_INTERVAL_MS, MIN_INTERVAL_MS, TickInterval,
};
pub use controls::ControlsAutoHide;
pub use cycle::{ColorCycle, RAINBOW_PERIOD, next_black_white, next_color, next_rainbow, next_rgb};
pub use cycler::{ColorCycler, CyclerError, CyclerState, ServiceTiming};
pub use mode::{CycleMode, ModeError};
pub use surface::ColorSurface;
pub use time::{TimeDuration, TimeInstant, TimeSource};

#[cfg(feature = "std")]
pub use time::{StdClock, StdInstant};
