//! Hardware collaborator traits: [`CharDisplay`] and [`ButtonSource`].
//!
//! The core never touches I²C, GPIO or a terminal directly; all device
//! access goes through these two traits. Back-ends such as `lcdmenu-term`
//! implement them, and a real plate driver would do the same.

use crate::buttons::Button;

/// Error type at the hardware seam.
///
/// Back-ends surface whatever failure their transport produces; the core
/// propagates these untouched, since without a working display there is no
/// way to report anything to the user anyway.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

/// A character-cell display with uploadable 5×8 glyphs.
pub trait CharDisplay {
    /// Blank the entire display.
    fn clear(&mut self) -> Result<(), DriverError>;

    /// Define a custom glyph in slot `index`. Each of the eight bytes holds
    /// one 5-pixel row, top to bottom. Slots 1–7 carry the fixed
    /// [`Glyph`](crate::screen::Glyph) set uploaded at start-up; any other
    /// slot the device supports is left to the host.
    fn create_glyph(&mut self, index: u8, rows: [u8; 8]) -> Result<(), DriverError>;

    /// Write `text` starting at the top-left corner; `'\n'` moves to the
    /// start of the next line. [`Screen::flush`](crate::screen::Screen::flush)
    /// calls this once with the whole buffer.
    fn write_text(&mut self, text: &str) -> Result<(), DriverError>;
}

/// A source of raw button levels.
pub trait ButtonSource {
    /// Whether `button` is currently held down.
    fn is_pressed(&mut self, button: Button) -> Result<bool, DriverError>;
}
