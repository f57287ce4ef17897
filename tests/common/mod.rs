//! Shared test infrastructure for joystick-reactor integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use joystick_reactor::{
    AnalogInput, AnalogSample, Board, BrightnessLevels, CursorPosition, DisplaySurface, Rect,
    TimeDuration, TimeInstant, TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps microseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_micros(&self) -> u64 {
        self.0
    }

    fn from_micros(micros: u64) -> Self {
        TestDuration(micros)
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    const EPOCH: Self = TestInstant(0);

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0.saturating_sub(earlier.0))
    }
}

/// Milliseconds to a test instant
pub fn ms(millis: u64) -> TestInstant {
    TestInstant(millis * 1_000)
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

    /// Advance time by the given number of microseconds
    pub fn advance_micros(&self, micros: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + micros));
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
// Mock Display
// ============================================================================

/// One primitive issued against the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    Fill(bool),
    Rect { rect: Rect, on: bool, filled: bool },
    Flush,
}

/// Display that records every primitive
pub struct MockSurface {
    ops: heapless::Vec<DrawOp, 64>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self {
            ops: heapless::Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl DisplaySurface for MockSurface {
    fn fill(&mut self, on: bool) {
        let _ = self.ops.push(DrawOp::Fill(on));
    }

    fn rect(&mut self, rect: Rect, on: bool, filled: bool) {
        let _ = self.ops.push(DrawOp::Rect { rect, on, filled });
    }

    fn flush(&mut self) {
        let _ = self.ops.push(DrawOp::Flush);
    }
}

// ============================================================================
// Mock Board
// ============================================================================

/// Board that records the state each command leaves behind
pub struct MockBoard {
    pub levels: BrightnessLevels,
    pub level_history: heapless::Vec<BrightnessLevels, 32>,
    pub outputs_enabled: bool,
    pub enable_history: heapless::Vec<bool, 32>,
    pub status_led: bool,
    pub reports: heapless::Vec<CursorPosition, 32>,
    pub display: MockSurface,
    pub display_borrows: usize,
}

impl MockBoard {
    /// Power-on state before any command: outputs running, LED dark
    pub fn new() -> Self {
        Self {
            levels: BrightnessLevels::OFF,
            level_history: heapless::Vec::new(),
            outputs_enabled: true,
            enable_history: heapless::Vec::new(),
            status_led: false,
            reports: heapless::Vec::new(),
            display: MockSurface::new(),
            display_borrows: 0,
        }
    }
}

impl Board for MockBoard {
    fn set_brightness(&mut self, levels: BrightnessLevels) {
        self.levels = levels;
        let _ = self.level_history.push(levels);
    }

    fn set_outputs_enabled(&mut self, enabled: bool) {
        self.outputs_enabled = enabled;
        let _ = self.enable_history.push(enabled);
    }

    fn set_status_led(&mut self, on: bool) {
        self.status_led = on;
    }

    fn with_display(&mut self, draw: impl FnOnce(&mut dyn DisplaySurface)) {
        self.display_borrows += 1;
        draw(&mut self.display);
    }

    fn report(&mut self, cursor: CursorPosition) {
        let _ = self.reports.push(cursor);
    }

    fn enter_bootloader(&mut self) -> ! {
        panic!("bootloader entered");
    }
}

// ============================================================================
// Mock ADC
// ============================================================================

/// ADC that replays a fixed list of samples, repeating the last one
pub struct MockAdc {
    samples: heapless::Vec<AnalogSample, 16>,
    next: usize,
}

impl MockAdc {
    pub fn new(samples: &[AnalogSample]) -> Self {
        Self {
            samples: heapless::Vec::from_slice(samples).unwrap(),
            next: 0,
        }
    }

    pub fn reads(&self) -> usize {
        self.next
    }
}

impl AnalogInput for MockAdc {
    fn read(&mut self) -> AnalogSample {
        let idx = self.next.min(self.samples.len() - 1);
        self.next += 1;
        self.samples[idx]
    }
}

// ============================================================================
// Mock Delay
// ============================================================================

/// Delay that counts requested milliseconds and panics once its budget is spent,
/// which is the only way out of a `-> !` loop in a test.
pub struct BudgetDelay {
    pub calls: usize,
    pub budget: usize,
    pub last_ms: u32,
}

impl BudgetDelay {
    pub fn new(budget: usize) -> Self {
        Self {
            calls: 0,
            budget,
            last_ms: 0,
        }
    }
}

impl embedded_hal::delay::DelayNs for BudgetDelay {
    fn delay_ns(&mut self, _ns: u32) {
        self.calls += 1;
        if self.calls >= self.budget {
            panic!("delay budget exhausted");
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.last_ms = ms;
        self.delay_ns(0);
    }
}
