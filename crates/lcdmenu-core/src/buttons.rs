//! The physical input set: [`Button`].

use std::fmt;

/// One of the five physical buttons next to the display.
///
/// Variants are listed in polling order; [`Button::ALL`] iterates them in
/// that order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Button {
    Select,
    Left,
    Up,
    Down,
    Right,
}

impl Button {
    /// Number of buttons on the plate.
    pub const COUNT: usize = 5;

    /// Every button, in polling order.
    pub const ALL: [Button; Button::COUNT] = [
        Button::Select,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::Right,
    ];

    /// Stable position of this button in [`Button::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Human-readable name, as echoed by the button-test action.
    pub const fn name(self) -> &'static str {
        match self {
            Button::Select => "Select",
            Button::Left => "Left",
            Button::Up => "Up",
            Button::Down => "Down",
            Button::Right => "Right",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
