//! Display surface abstraction.

use crate::color::Color;

/// Trait for whatever shows the cycling color.
///
/// Implement this for a window background, a terminal cell, an LED driver or
/// anything else that can be filled with a single color. Only [`fill`] is
/// required; the window-management hooks default to doing nothing so that
/// surfaces without a window can ignore them.
///
/// Handle any device errors internally - these methods cannot fail.
///
/// [`fill`]: ColorSurface::fill
pub trait ColorSurface {
    /// Fills the whole surface with `color`.
    fn fill(&mut self, color: Color);

    /// Enters or leaves fullscreen.
    fn set_fullscreen(&mut self, _fullscreen: bool) {}

    /// Shows or hides window decorations.
    fn set_decorated(&mut self, _decorated: bool) {}

    /// Shows or hides the control toolbar.
    fn set_controls_visible(&mut self, _visible: bool) {}

    /// Greys out the start button and the mode/interval pickers while a
    /// cycle is running, and restores them when it stops.
    fn set_controls_locked(&mut self, _locked: bool) {}
}

impl<S: ColorSurface + ?Sized> ColorSurface for &mut S {
    fn fill(&mut self, color: Color) {
        (**self).fill(color);
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        (**self).set_fullscreen(fullscreen);
    }

    fn set_decorated(&mut self, decorated: bool) {
        (**self).set_decorated(decorated);
    }

    fn set_controls_visible(&mut self, visible: bool) {
        (**self).set_controls_visible(visible);
    }

    fn set_controls_locked(&mut self, locked: bool) {
        (**self).set_controls_locked(locked);
    }
}
