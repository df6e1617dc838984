//! Time-multiplexed, current-limited display refresh.

use crate::matrix::{LAYER_COUNT, LED_COUNT, LedMatrix};

/// Hard cap on simultaneously energized LEDs (current budget).
pub const MAX_FIRED_LEDS: usize = 6;

/// Trait for abstracting the raw LED pins.
///
/// Implement this for your GPIO banks to allow the multiplexer to drive them.
/// Both operations are pin-level writes; handle any hardware errors
/// internally - these methods cannot fail.
pub trait LedDriver {
    /// Drives the 12 LED output lines from the low bits of `mask`.
    fn set_led_outputs(&mut self, mask: u16);

    /// Asserts the ground/select line of one layer, releasing the others, or
    /// releases all ground lines when `layer` is `None`.
    fn select_ground_line(&mut self, layer: Option<usize>);
}

/// Strobes one layer of the target matrix per high-rate tick, within the
/// simultaneous-LED budget.
///
/// Runs on every high-rate tick regardless of logical-tick boundaries: the
/// target matrix only changes on animation frames, but the display needs
/// continuous refreshing for persistence of vision. Each tick the multiplexer
/// clears all outputs first (break-before-make, so a layer's pattern never
/// ghosts onto the next layer's ground line), picks the next non-zero layer
/// round-robin, and energizes up to [`MAX_FIRED_LEDS`] of its set bits. The
/// bit-selection cursor persists across ticks, so a pattern with more lit
/// LEDs than the budget rotates through all of them over successive ticks.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DutyCycleMultiplexer {
    layer_cursor: usize,
    bit_cursor: usize,
}

impl DutyCycleMultiplexer {
    /// Creates a multiplexer starting its scan at layer 0, bit 0.
    #[inline]
    pub const fn new() -> Self {
        Self {
            layer_cursor: 0,
            bit_cursor: 0,
        }
    }

    /// Refreshes the display for one high-rate tick.
    pub fn strobe<L: LedDriver>(&mut self, matrix: &LedMatrix, leds: &mut L) {
        // break-before-make
        leds.set_led_outputs(0);
        leds.select_ground_line(None);

        let Some(layer) = self.next_lit_layer(matrix) else {
            return;
        };

        let fired = self.select_fired(matrix.layer(layer));
        leds.set_led_outputs(fired);
        leds.select_ground_line(Some(layer));
        self.layer_cursor = (layer + 1) % LAYER_COUNT;
    }

    /// Finds the next layer with any lit LED, scanning round-robin from the
    /// layer cursor.
    fn next_lit_layer(&self, matrix: &LedMatrix) -> Option<usize> {
        (0..LAYER_COUNT)
            .map(|offset| (self.layer_cursor + offset) % LAYER_COUNT)
            .find(|&layer| matrix.layer(layer) != 0)
    }

    /// Selects up to [`MAX_FIRED_LEDS`] set bits of `mask`, scanning
    /// round-robin from the bit cursor and leaving the cursor after the last
    /// selected bit.
    fn select_fired(&mut self, mask: u16) -> u16 {
        let mut fired = 0u16;
        let mut taken = 0usize;

        for offset in 0..LED_COUNT {
            let bit = (self.bit_cursor + offset) % LED_COUNT;
            if mask & (1 << bit) != 0 {
                fired |= 1 << bit;
                taken += 1;
                if taken == MAX_FIRED_LEDS {
                    self.bit_cursor = (bit + 1) % LED_COUNT;
                    break;
                }
            }
        }

        fired
    }
}
