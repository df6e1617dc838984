//! Scoped critical-section sharing of the engine between interrupt handlers.

use core::cell::RefCell;
use critical_section::Mutex;

/// Interrupt-safe cell for state touched by more than one interrupt handler.
///
/// The engine's mode, speed and matrix are read and written by both the tick
/// interrupt and the button interrupts, so every access must be a complete
/// update: a button edge must never observe a half-stepped matrix. `Shared`
/// wraps the value in a [`critical_section::Mutex`] and only hands it out
/// inside a closure run with interrupts masked.
///
/// Typical bring-up keeps the engine in a `static` and fills it in during
/// init:
///
/// ```
/// use led_ornament::{InputEvent, LedDriver, OrnamentEngine, Shared};
///
/// struct Pins;
/// # impl LedDriver for Pins {
/// #     fn set_led_outputs(&mut self, _mask: u16) {}
/// #     fn select_ground_line(&mut self, _layer: Option<usize>) {}
/// # }
///
/// static ENGINE: Shared<Option<OrnamentEngine<Pins>>> = Shared::new(None);
///
/// // init
/// ENGINE.with(|engine| *engine = Some(OrnamentEngine::new(Pins)));
///
/// // from any interrupt handler
/// ENGINE.with(|engine| {
///     if let Some(engine) = engine.as_mut() {
///         engine.handle_event(InputEvent::LogicalTick);
///     }
/// });
/// ```
pub struct Shared<T> {
    inner: Mutex<RefCell<T>>,
}

impl<T> Shared<T> {
    /// Creates a new shared cell.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }

    /// Runs `f` with exclusive access to the value, inside a critical
    /// section.
    pub fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }
}
