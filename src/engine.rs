//! The ornament animation engine: mode state machine and event dispatch.
//!
//! Provides [`OrnamentEngine`] which owns the complete animation state (mode,
//! target matrix, debouncer, tick counter and display multiplexer) and is
//! driven entirely by delivered [`InputEvent`]s. There is one engine value per
//! ornament; hardware bring-up forwards each interrupt to it and never touches
//! the state directly.

use crate::debounce::Debouncer;
use crate::display::{DutyCycleMultiplexer, LedDriver};
use crate::event::InputEvent;
use crate::matrix::LedMatrix;
use crate::pattern;
use crate::types::{ButtonId, SpeedLevel};

/// The current mode of the ornament.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// No pattern selected. All LEDs off.
    Idle,

    /// A pattern is animating for `button` at `speed`.
    Active {
        /// The button whose pattern is displayed.
        button: ButtonId,
        /// The current animation speed level.
        speed: SpeedLevel,
    },
}

/// Drives the LED ornament from delivered hardware events.
///
/// The engine is a state machine over `(active button, speed level)` plus the
/// target LED matrix:
///
/// - An accepted press of a new button clears the matrix and starts that
///   button's pattern at [`SpeedLevel::Speed0`].
/// - Repeat presses of the active button step the speed level; stepping past
///   the last level turns the ornament off (back to [`Mode::Idle`] with the
///   matrix cleared).
/// - Logical ticks advance the tick counter and, on frame boundaries for the
///   current speed, step the active pattern.
/// - High-rate ticks refresh the display through the duty-cycle multiplexer.
///
/// Button edges are filtered through the debouncer first; a rejected edge has
/// no effect of any kind. Every input maps to a defined transition; there are
/// no error states.
///
/// # Type Parameters
/// * `L` - LED pin driver implementation type
pub struct OrnamentEngine<L: LedDriver> {
    leds: L,
    display: DutyCycleMultiplexer,
    debouncer: Debouncer,
    matrix: LedMatrix,
    mode: Mode,
    tick: u32,
}

impl<L: LedDriver> OrnamentEngine<L> {
    /// Creates an idle engine with all LED outputs released.
    pub fn new(mut leds: L) -> Self {
        leds.set_led_outputs(0);
        leds.select_ground_line(None);

        Self {
            leds,
            display: DutyCycleMultiplexer::new(),
            debouncer: Debouncer::new(),
            matrix: LedMatrix::new(),
            mode: Mode::Idle,
            tick: 0,
        }
    }

    /// Handles a hardware event by dispatching to the appropriate handler.
    ///
    /// This is the single entry point for interrupt glue that forwards all
    /// three event classes; the individual handlers below can also be called
    /// directly.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::ButtonEdge(button) => {
                self.on_button_edge(button);
            }
            InputEvent::LogicalTick => self.on_logical_tick(),
            InputEvent::HighRateTick => self.on_high_rate_tick(),
        }
    }

    /// Handles a falling edge on a button line.
    ///
    /// # Returns
    /// * `true` - The edge was accepted and the mode transition applied
    /// * `false` - The edge fell inside the debounce window and was ignored
    pub fn on_button_edge(&mut self, button: ButtonId) -> bool {
        if !self.debouncer.on_edge(button, self.tick) {
            return false;
        }

        self.mode = match self.mode {
            Mode::Active {
                button: active,
                speed,
            } if active == button => match speed.faster() {
                // same button again: run the pattern at the next level
                Some(speed) => Mode::Active { button, speed },
                // third press is the turn-off toggle
                None => {
                    self.matrix.clear();
                    Mode::Idle
                }
            },
            // new button: restart from scratch at the slowest level
            _ => {
                self.matrix.clear();
                Mode::Active {
                    button,
                    speed: SpeedLevel::Speed0,
                }
            }
        };
        true
    }

    /// Handles one decimated ~100 ms animation tick.
    ///
    /// The tick counter always advances, since debounce timestamps depend on it
    /// even while idle. When a pattern is active and the counter crosses a
    /// frame boundary for the current speed level, the pattern generator
    /// computes the next target matrix; all other ticks leave the matrix
    /// unchanged (the multiplexer keeps refreshing it regardless).
    pub fn on_logical_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);

        let Mode::Active { button, speed } = self.mode else {
            return;
        };
        if self.tick % speed.frame_divisor() != 0 {
            return;
        }

        self.matrix = pattern::next_frame(button, &self.matrix);
    }

    /// Handles one high-rate sample/multiplex tick by refreshing the display.
    pub fn on_high_rate_tick(&mut self) {
        self.display.strobe(&self.matrix, &mut self.leds);
    }

    /// Returns the current mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns true if no pattern is selected.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.mode == Mode::Idle
    }

    /// Returns the current target LED matrix.
    #[inline]
    pub fn matrix(&self) -> &LedMatrix {
        &self.matrix
    }

    /// Returns the logical tick count since boot (wrapping).
    #[inline]
    pub fn logical_ticks(&self) -> u32 {
        self.tick
    }

    /// Returns a reference to the underlying LED pin driver.
    #[inline]
    pub fn leds(&self) -> &L {
        &self.leds
    }
}
