//! Animation pattern stepping.
//!
//! Pure evaluation, separated from the stateful engine: one call computes the
//! next target [`LedMatrix`] from the active button and the current matrix,
//! once per eligible logical tick. Combinations that match no known pattern
//! phase return the input unchanged.

use crate::matrix::{LAYER_MASK, LED_COUNT, LedMatrix};
use crate::types::ButtonId;

/// Seed for the chase pattern: the single top bit of layer 0.
const CHASE_SEED: u16 = 1 << (LED_COUNT - 1);

/// Seed for the sparse pulse pattern: every third LED of layer 1.
const SPARSE_SEED: u16 = 0b1001_0010_0100;

/// Computes the next animation frame for the active button.
pub fn next_frame(button: ButtonId, current: &LedMatrix) -> LedMatrix {
    let mut next = *current;
    match button {
        ButtonId::Button0 => chase(&mut next),
        ButtonId::Button1 => sparse_pulse(&mut next),
        ButtonId::Button2 => rising_fill(&mut next),
    }
    next
}

/// A single lit LED walks down layer 0, re-seeding at the top after it falls
/// off bit 0.
fn chase(matrix: &mut LedMatrix) {
    if matrix.layer(0) == 0 {
        matrix.set_layer(0, CHASE_SEED);
    } else {
        matrix.shift_layer(0);
    }
}

/// Layer 1 cycles the sparse every-third-LED pattern through two shifts, then
/// blanks for one frame once the walker reaches bit 0.
fn sparse_pulse(matrix: &mut LedMatrix) {
    if matrix.layer(1) == 0 {
        matrix.set_layer(1, SPARSE_SEED);
    } else if matrix.is_lit(1, 0) {
        matrix.set_layer(1, 0);
    } else {
        matrix.shift_layer(1);
    }
}

/// The three layers act as one rising bar: each frame the fully-lit layer
/// moves up one position, then the bar blanks and restarts.
fn rising_fill(matrix: &mut LedMatrix) {
    let lit = (
        matrix.layer(0) != 0,
        matrix.layer(1) != 0,
        matrix.layer(2) != 0,
    );
    match lit {
        (false, false, false) => matrix.set_layer(2, LAYER_MASK),
        (false, false, true) => {
            matrix.set_layer(1, LAYER_MASK);
            matrix.set_layer(2, 0);
        }
        (false, true, false) => {
            matrix.set_layer(0, LAYER_MASK);
            matrix.set_layer(1, 0);
        }
        (true, false, false) => matrix.set_layer(0, 0),
        // unknown combination, leave the frame as-is
        _ => {}
    }
}
