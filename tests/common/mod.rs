//! Shared test infrastructure for led-ornament integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use led_ornament::{LedDriver, ToneOutput};

// ============================================================================
// Mock LED pins
// ============================================================================

/// A single pin-level operation, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedOp {
    /// `set_led_outputs(mask)`
    Outputs(u16),
    /// `select_ground_line(layer)`
    Ground(Option<usize>),
}

/// Mock LED pin driver that records operations and tracks how many LEDs were
/// ever energized at once (outputs driven while a ground line is asserted).
pub struct MockLedDriver {
    outputs: u16,
    ground: Option<usize>,
    max_fired: u32,
    ops: heapless::Vec<LedOp, 64>,
}

impl MockLedDriver {
    pub fn new() -> Self {
        Self {
            outputs: 0,
            ground: None,
            max_fired: 0,
            ops: heapless::Vec::new(),
        }
    }

    pub fn outputs(&self) -> u16 {
        self.outputs
    }

    pub fn ground(&self) -> Option<usize> {
        self.ground
    }

    /// Highest simultaneously energized LED count observed so far.
    pub fn max_fired(&self) -> u32 {
        self.max_fired
    }

    /// Recorded operations, oldest first (capped; later ops are dropped).
    pub fn ops(&self) -> &[LedOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    fn track(&mut self) {
        if self.ground.is_some() {
            self.max_fired = self.max_fired.max(self.outputs.count_ones());
        }
    }
}

impl LedDriver for MockLedDriver {
    fn set_led_outputs(&mut self, mask: u16) {
        self.outputs = mask;
        let _ = self.ops.push(LedOp::Outputs(mask));
        self.track();
    }

    fn select_ground_line(&mut self, layer: Option<usize>) {
        self.ground = layer;
        let _ = self.ops.push(LedOp::Ground(layer));
        self.track();
    }
}

// ============================================================================
// Mock tone output
// ============================================================================

/// Mock PWM tone output that records every written sample.
pub struct MockToneOutput {
    samples: heapless::Vec<u8, 64>,
}

impl MockToneOutput {
    pub fn new() -> Self {
        Self {
            samples: heapless::Vec::new(),
        }
    }

    pub fn last(&self) -> Option<u8> {
        self.samples.last().copied()
    }

    /// Written samples, oldest first (capped; later writes are dropped).
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }
}

impl ToneOutput for MockToneOutput {
    fn write_sample(&mut self, sample: u8) {
        let _ = self.samples.push(sample);
    }
}
