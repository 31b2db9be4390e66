//! Shared test infrastructure for rgb-cycler integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use rgb_cycler::{Color, ColorSurface, TimeDuration, TimeInstant, TimeSource};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }
}

// ============================================================================
// Mock Surface
// ============================================================================

/// Mock surface that records fills and window-management calls
pub struct MockSurface {
    current_color: Color,
    fill_history: heapless::Vec<Color, 32>,
    pub fill_count: usize,
    pub fullscreen: bool,
    pub decorated: bool,
    pub controls_visible: bool,
    pub controls_locked: bool,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            current_color: Srgb::new(0, 0, 0),
            fill_history: heapless::Vec::new(),
            fill_count: 0,
            fullscreen: false,
            decorated: true,
            controls_visible: true,
            controls_locked: false,
        }
    }

    pub fn last_color(&self) -> Color {
        self.current_color
    }

    /// First 32 fills, in order
    pub fn fill_history(&self) -> &[Color] {
        &self.fill_history
    }
}

impl ColorSurface for MockSurface {
    fn fill(&mut self, color: Color) {
        self.current_color = color;
        self.fill_count += 1;
        let _ = self.fill_history.push(color);
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }

    fn set_decorated(&mut self, decorated: bool) {
        self.decorated = decorated;
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.controls_visible = visible;
    }

    fn set_controls_locked(&mut self, locked: bool) {
        self.controls_locked = locked;
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given duration
    pub fn advance(&self, duration: TestDuration) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + duration.0));
    }

    pub fn set_time(&self, time: TestInstant) {
        self.current_time.set(time);
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Re-export color constants from library for test convenience
// ============================================================================

#[allow(unused_imports)]
pub use rgb_cycler::{BLACK, BLUE, GREEN, RED, WHITE};

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn rgb(r: u8, g: u8, b: u8) -> Color {
    Srgb::new(r, g, b)
}

/// Number of channels that differ between two colors, and the largest
/// single-channel difference
pub fn channel_delta(a: Color, b: Color) -> (usize, u8) {
    let pairs = [(a.red, b.red), (a.green, b.green), (a.blue, b.blue)];
    let changed = pairs.iter().filter(|(x, y)| x != y).count();
    let largest = pairs.iter().map(|(x, y)| x.abs_diff(*y)).max().unwrap_or(0);
    (changed, largest)
}
