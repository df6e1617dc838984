//! Button edge debouncing.

use crate::types::ButtonId;

/// Minimum logical ticks between accepted button edges (500 ms at the nominal
/// 100 ms logical tick).
pub const DEBOUNCE_WINDOW_TICKS: u32 = 5;

/// Filters spurious rapid button edges down to one accepted press per
/// debounce window.
///
/// The window applies across buttons as well: a noisy run of edges on any
/// combination of lines collapses to at most one accepted press per window.
/// Timestamps are logical tick counts; comparison uses wrapping arithmetic so
/// counter overflow does not open or close the window early.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    last_accepted: Option<(ButtonId, u32)>,
}

impl Debouncer {
    /// Creates a debouncer that will accept the first edge it sees.
    #[inline]
    pub const fn new() -> Self {
        Self {
            last_accepted: None,
        }
    }

    /// Decides a button edge at the given logical tick.
    ///
    /// Accepts iff no edge has been accepted yet, or at least
    /// [`DEBOUNCE_WINDOW_TICKS`] have passed since the last acceptance. On
    /// accept, the button and tick are recorded; a rejected edge leaves the
    /// state untouched.
    pub fn on_edge(&mut self, button: ButtonId, tick: u32) -> bool {
        if let Some((_, last_tick)) = self.last_accepted {
            if tick.wrapping_sub(last_tick) < DEBOUNCE_WINDOW_TICKS {
                return false;
            }
        }
        self.last_accepted = Some((button, tick));
        true
    }

    /// Returns the most recently accepted button and its tick, if any.
    #[inline]
    pub fn last_accepted(&self) -> Option<(ButtonId, u32)> {
        self.last_accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_edge_is_accepted() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.on_edge(ButtonId::Button0, 0));
        assert_eq!(debouncer.last_accepted(), Some((ButtonId::Button0, 0)));
    }

    #[test]
    fn edges_inside_the_window_are_rejected() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.on_edge(ButtonId::Button0, 10));
        assert!(!debouncer.on_edge(ButtonId::Button0, 12));
        assert!(!debouncer.on_edge(ButtonId::Button0, 14));
        // rejected edges must not refresh the timestamp
        assert_eq!(debouncer.last_accepted(), Some((ButtonId::Button0, 10)));
    }

    #[test]
    fn window_applies_across_buttons() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.on_edge(ButtonId::Button0, 10));
        assert!(!debouncer.on_edge(ButtonId::Button1, 13));
        assert!(debouncer.on_edge(ButtonId::Button1, 15));
    }

    #[test]
    fn edge_exactly_at_the_window_boundary_is_accepted() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.on_edge(ButtonId::Button2, 100));
        assert!(debouncer.on_edge(ButtonId::Button2, 100 + DEBOUNCE_WINDOW_TICKS));
    }

    #[test]
    fn window_survives_tick_counter_wrap() {
        let mut debouncer = Debouncer::new();
        assert!(debouncer.on_edge(ButtonId::Button0, u32::MAX - 1));
        assert!(!debouncer.on_edge(ButtonId::Button0, 1));
        assert!(debouncer.on_edge(ButtonId::Button0, 4));
    }
}
