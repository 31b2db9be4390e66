//! Cycle mode selection.

use core::fmt;
use core::str::FromStr;

/// Which color pattern a cycler runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleMode {
    /// Pure red, green, blue, repeat.
    #[default]
    Rgb,

    /// Toggle between black and white.
    BlackWhite,

    /// Continuous hue rotation in single-unit steps.
    Rainbow,
}

impl CycleMode {
    /// All modes in picker order.
    pub const ALL: [CycleMode; 3] = [CycleMode::Rgb, CycleMode::BlackWhite, CycleMode::Rainbow];

    /// Position of this mode in [`CycleMode::ALL`].
    pub const fn index(self) -> u8 {
        match self {
            CycleMode::Rgb => 0,
            CycleMode::BlackWhite => 1,
            CycleMode::Rainbow => 2,
        }
    }

    /// Looks up a mode by picker index.
    ///
    /// Takes a signed index because toolkit pickers report "nothing selected"
    /// as a negative value; that is rejected like any other unknown index.
    pub fn from_index(index: i32) -> Result<Self, ModeError> {
        match index {
            0 => Ok(CycleMode::Rgb),
            1 => Ok(CycleMode::BlackWhite),
            2 => Ok(CycleMode::Rainbow),
            _ => Err(ModeError::UnknownIndex(index)),
        }
    }

    /// Human-readable label for a mode picker.
    pub const fn label(self) -> &'static str {
        match self {
            CycleMode::Rgb => "Red, Green, Blue",
            CycleMode::BlackWhite => "Black, White",
            CycleMode::Rainbow => "Rainbow",
        }
    }
}

impl fmt::Display for CycleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for CycleMode {
    type Error = ModeError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        CycleMode::from_index(i32::from(index))
    }
}

impl From<CycleMode> for u8 {
    fn from(mode: CycleMode) -> Self {
        mode.index()
    }
}

impl FromStr for CycleMode {
    type Err = ModeError;

    /// Parses `rgb`, `bw`, `black-white` or `rainbow`, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("rgb") {
            Ok(CycleMode::Rgb)
        } else if s.eq_ignore_ascii_case("bw") || s.eq_ignore_ascii_case("black-white") {
            Ok(CycleMode::BlackWhite)
        } else if s.eq_ignore_ascii_case("rainbow") {
            Ok(CycleMode::Rainbow)
        } else {
            Err(ModeError::UnknownName)
        }
    }
}

/// Mode selection errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeError {
    /// Picker index outside `0..=2`.
    UnknownIndex(i32),

    /// Name not recognized.
    UnknownName,
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeError::UnknownIndex(index) => {
                write!(f, "unknown cycle mode index {} (expected 0, 1 or 2)", index)
            }
            ModeError::UnknownName => {
                write!(f, "unknown cycle mode name (expected rgb, bw or rainbow)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ModeError {}
