//! Event-based delivery of interrupt sources.

use crate::types::ButtonId;

/// A hardware event delivered to the engine.
///
/// Each variant corresponds to one hardware interrupt class:
/// a falling edge on a button line, the decimated ~100 ms animation tick, and
/// the high-rate sample/multiplex tick. Events are delivered one at a time
/// from a single interrupt context each; the engine never re-enters itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Falling edge on a button line.
    ButtonEdge(ButtonId),

    /// Decimated animation tick (~100 ms).
    LogicalTick,

    /// High-rate sample/multiplex tick.
    HighRateTick,
}
