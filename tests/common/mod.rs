//! Shared test infrastructure for simon-kernel integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use simon_kernel::{
    AnimationKind, Color, ColorSource, Controller, Light, LightBoard, TimeDuration, TimeInstant,
    TimeSource,
};

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

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn now_millis(&self) -> u64 {
        self.current_time.get().0
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Light
// ============================================================================

/// Mock output line that records every write
#[derive(Debug, Default)]
pub struct MockLight {
    on: bool,
    history: heapless::Vec<bool, 128>,
}

impl MockLight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn history(&self) -> &[bool] {
        &self.history
    }

    /// Number of off-to-on switches
    pub fn flashes(&self) -> usize {
        self.history.iter().filter(|on| **on).count()
    }
}

impl Light for MockLight {
    fn set(&mut self, on: bool) {
        self.on = on;
        let _ = self.history.push(on);
    }
}

pub fn mock_board() -> LightBoard<MockLight> {
    LightBoard::new([
        MockLight::new(),
        MockLight::new(),
        MockLight::new(),
        MockLight::new(),
    ])
}

// ============================================================================
// Scripted Colors
// ============================================================================

/// Color source replaying a fixed script, wrapping around at the end
pub struct ScriptedColors {
    script: heapless::Vec<Color, 16>,
    next: usize,
}

impl ScriptedColors {
    pub fn new(script: &[Color]) -> Self {
        Self {
            script: heapless::Vec::from_slice(script).unwrap(),
            next: 0,
        }
    }
}

impl ColorSource for ScriptedColors {
    fn next_color(&mut self) -> Color {
        let color = self.script[self.next % self.script.len()];
        self.next += 1;
        color
    }
}

// ============================================================================
// Controller Helpers
// ============================================================================

pub type TestController<'t, const N: usize = 16> =
    Controller<'t, TestInstant, MockTimeSource, MockLight, ScriptedColors, N>;

/// Poll interval used by the helpers, in milliseconds
pub const TICK_MS: u64 = 10;

/// Polls every tick until no animation plays. Returns the elapsed milliseconds.
pub fn run_until_idle<const N: usize>(
    controller: &mut TestController<'_, N>,
    timer: &MockTimeSource,
) -> u64 {
    let start = timer.now_millis();
    controller.poll();
    while controller.animation() != AnimationKind::None {
        assert!(
            timer.now_millis() - start < 60_000,
            "animation did not finish"
        );
        timer.advance(TICK_MS);
        controller.poll();
    }
    timer.now_millis() - start
}

/// Polls every tick while `kind` plays. Returns the highest step count seen.
pub fn run_while<const N: usize>(
    controller: &mut TestController<'_, N>,
    timer: &MockTimeSource,
    kind: AnimationKind,
) -> usize {
    let mut max_step = controller.animator().step();
    while controller.animation() == kind {
        timer.advance(TICK_MS);
        controller.poll();
        if controller.animation() == kind {
            max_step = max_step.max(controller.animator().step());
        }
    }
    max_step
}

/// Polls every tick for `millis` milliseconds.
pub fn run_for<const N: usize>(
    controller: &mut TestController<'_, N>,
    timer: &MockTimeSource,
    millis: u64,
) {
    let end = timer.now_millis() + millis;
    while timer.now_millis() < end {
        timer.advance(TICK_MS.min(end - timer.now_millis()));
        controller.poll();
    }
}

/// Drains the status outbox into a vector
pub fn drain_statuses<const N: usize>(
    controller: &mut TestController<'_, N>,
) -> Vec<simon_kernel::Status> {
    core::iter::from_fn(|| controller.next_status()).collect()
}
