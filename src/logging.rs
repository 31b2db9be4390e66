//! Internal logging shim.
//!
//! Records go to `defmt` on embedded hosts and to the `log` facade on desktop
//! hosts. With neither feature enabled the macros expand to nothing, so every
//! argument must be a plain value that is used elsewhere as well.

macro_rules! debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::debug!($($arg)*);
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    }};
}

macro_rules! trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "defmt")]
        defmt::trace!($($arg)*);
        #[cfg(feature = "log")]
        log::trace!($($arg)*);
    }};
}

pub(crate) use debug;
pub(crate) use trace;
