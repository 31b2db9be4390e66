//! Color step functions for each cycle mode.
//!
//! Each function maps the currently displayed color to the next one. None of
//! them keep a phase counter: the phase is read back from the channel values,
//! so a cycle picks up correctly from any color a caller hands it.

use crate::color::{BLACK, BLUE, Color, GREEN, RED, WHITE};
use crate::mode::CycleMode;
use palette::Srgb;

/// Number of ticks for one full turn of the rainbow wheel.
pub const RAINBOW_PERIOD: u32 = 6 * 255;

/// Computes the color following `color` in `mode`.
#[inline]
pub fn next_color(color: Color, mode: CycleMode) -> Color {
    match mode {
        CycleMode::Rgb => next_rgb(color),
        CycleMode::BlackWhite => next_black_white(color),
        CycleMode::Rainbow => next_rainbow(color),
    }
}

/// Red, then green, then blue, then red again.
///
/// The phase is inferred from which channel is lit. Anything without red or
/// green lit (including black) falls back to red.
#[inline]
pub fn next_rgb(color: Color) -> Color {
    if color.red != 0 {
        GREEN
    } else if color.green != 0 {
        BLUE
    } else {
        RED
    }
}

/// Black becomes white and white becomes black, keyed on the red channel.
#[inline]
pub fn next_black_white(color: Color) -> Color {
    if color.red == 0 { WHITE } else { BLACK }
}

/// One unit along the hue wheel.
///
/// The wheel is six edges, each holding one channel at 255 and one at 0 while
/// the third ramps:
///
/// | edge | red     | green   | blue    |
/// |------|---------|---------|---------|
/// | 1    | 255     | rising  | 0       |
/// | 2    | falling | 255     | 0       |
/// | 3    | 0       | 255     | rising  |
/// | 4    | 0       | falling | 255     |
/// | 5    | rising  | 0       | 255     |
/// | 6    | 255     | 0       | falling |
///
/// A corner belongs to the edge that starts there. Colors off the wheel walk
/// onto it one unit at a time: the brightest channel rises to 255, then the
/// darkest falls to 0.
pub fn next_rainbow(color: Color) -> Color {
    let (r, g, b) = (color.red, color.green, color.blue);

    if r == 255 && b == 0 && g < 255 {
        Srgb::new(r, g + 1, b)
    } else if g == 255 && b == 0 && r > 0 {
        Srgb::new(r - 1, g, b)
    } else if r == 0 && g == 255 && b < 255 {
        Srgb::new(r, g, b + 1)
    } else if r == 0 && b == 255 && g > 0 {
        Srgb::new(r, g - 1, b)
    } else if g == 0 && b == 255 && r < 255 {
        Srgb::new(r + 1, g, b)
    } else if r == 255 && g == 0 && b > 0 {
        Srgb::new(r, g, b - 1)
    } else {
        onto_wheel(r, g, b)
    }
}

fn onto_wheel(r: u8, g: u8, b: u8) -> Color {
    let max = r.max(g).max(b);
    if max < 255 {
        // Brightest channel first, r before g before b on ties.
        if r == max {
            Srgb::new(r + 1, g, b)
        } else if g == max {
            Srgb::new(r, g + 1, b)
        } else {
            Srgb::new(r, g, b + 1)
        }
    } else {
        // Saturated but nothing off; every channel is above zero here.
        let min = r.min(g).min(b);
        if r == min {
            Srgb::new(r - 1, g, b)
        } else if g == min {
            Srgb::new(r, g - 1, b)
        } else {
            Srgb::new(r, g, b - 1)
        }
    }
}

/// Endless iterator over the colors a mode produces.
///
/// The starting color itself is not yielded; the first item is the color one
/// tick later.
#[derive(Debug, Clone, Copy)]
pub struct ColorCycle {
    color: Color,
    mode: CycleMode,
}

impl ColorCycle {
    /// Creates an iterator that steps `mode` from `start`.
    pub fn new(start: Color, mode: CycleMode) -> Self {
        Self { color: start, mode }
    }

    /// Returns the most recently produced color (or the start color).
    pub fn current(&self) -> Color {
        self.color
    }

    /// Returns the mode being stepped.
    pub fn mode(&self) -> CycleMode {
        self.mode
    }
}

impl Iterator for ColorCycle {
    type Item = Color;

    fn next(&mut self) -> Option<Self::Item> {
        self.color = next_color(self.color, self.mode);
        Some(self.color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
