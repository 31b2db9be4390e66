//! 8-bit color type and named colors.
//!
//! Every cycle pattern works on whole 8-bit channel values, so the crate's
//! color is `palette::Srgb<u8>`. Surfaces that drive PWM or a float-based
//! renderer can convert with [`normalized`].

use palette::Srgb;

/// An RGB color with one 8-bit value per channel.
pub type Color = Srgb<u8>;

pub const BLACK: Color = Srgb::new(0, 0, 0);
pub const WHITE: Color = Srgb::new(255, 255, 255);
pub const RED: Color = Srgb::new(255, 0, 0);
pub const GREEN: Color = Srgb::new(0, 255, 0);
pub const BLUE: Color = Srgb::new(0, 0, 255);

/// Converts an 8-bit color to the 0.0-1.0 range.
#[inline]
pub fn normalized(color: Color) -> Srgb<f32> {
    color.into_format()
}

/// Returns the channels as an `(r, g, b)` tuple.
#[inline]
pub fn channels(color: Color) -> (u8, u8, u8) {
    (color.red, color.green, color.blue)
}

/// Returns true if the color lies on the rainbow wheel.
///
/// A color is on the wheel when one channel is saturated (255) and another
/// is fully off (0); the third channel is free.
#[inline]
pub fn on_wheel(color: Color) -> bool {
    let (r, g, b) = channels(color);
    r.max(g).max(b) == 255 && r.min(g).min(b) == 0
}
