//! Core input types for the ornament engine.

/// Number of physical buttons.
pub const BUTTON_COUNT: usize = 3;

/// Identity of a physical button, supplied by the edge-interrupt source.
///
/// Each button selects one animation pattern and animates its home layer
/// (button 2's rising fill sweeps across all three layers).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    /// Chase pattern on layer 0.
    Button0,

    /// Sparse pulse pattern on layer 1.
    Button1,

    /// Rising fill pattern across all layers.
    Button2,
}

impl ButtonId {
    /// Returns the button's ordinal index (0..3).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            ButtonId::Button0 => 0,
            ButtonId::Button1 => 1,
            ButtonId::Button2 => 2,
        }
    }
}

/// Animation speed level, stepped by repeat presses of the active button.
///
/// The level determines the animation frame divisor in logical ticks: at the
/// nominal 100 ms logical tick, one frame every 200, 400 or 800 ms. Stepping
/// past the last level is the engine's turn-off wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedLevel {
    /// One animation frame every 2 logical ticks (200 ms).
    Speed0,

    /// One animation frame every 4 logical ticks (400 ms).
    Speed1,

    /// One animation frame every 8 logical ticks (800 ms).
    Speed2,
}

impl SpeedLevel {
    /// Logical ticks per animation frame at this level.
    #[inline]
    pub fn frame_divisor(self) -> u32 {
        match self {
            SpeedLevel::Speed0 => 2,
            SpeedLevel::Speed1 => 4,
            SpeedLevel::Speed2 => 8,
        }
    }

    /// Returns the next speed level, or `None` past the last one.
    #[inline]
    pub fn faster(self) -> Option<SpeedLevel> {
        match self {
            SpeedLevel::Speed0 => Some(SpeedLevel::Speed1),
            SpeedLevel::Speed1 => Some(SpeedLevel::Speed2),
            SpeedLevel::Speed2 => None,
        }
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        SpeedLevel::Speed0
    }
}
