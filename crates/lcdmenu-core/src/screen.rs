//! The [`Screen`] type — a buffered mirror of the 16×2 display — and the
//! fixed [`Glyph`] set.
//!
//! A `Screen` is a *handle* to shared state. Cloning a `Screen` yields
//! another view of the **same** buffer and device, which is how the
//! controller and every menu item write to one display without owning it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::driver::CharDisplay;
use crate::error::{MenuError, MenuResult};

/// Number of text lines on the display.
pub const LINES: usize = 2;

/// Number of characters per line.
pub const CHARS: usize = 16;

// ---------------------------------------------------------------------------
// Glyph
// ---------------------------------------------------------------------------

/// The fixed iconography uploaded to display slots 1–7.
///
/// The `Display` impl writes the glyph's in-band control character, so an
/// icon can be embedded directly in message text: `format!("Done {}",
/// Glyph::Check)` prints as `Done ✓` on the plate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Glyph {
    Note = 1,
    Check = 2,
    Clock = 3,
    Hourglass = 4,
    ArrowRight = 5,
    ArrowLeft = 6,
    Power = 7,
}

impl Glyph {
    /// Every glyph, in slot order.
    pub const ALL: [Glyph; 7] = [
        Glyph::Note,
        Glyph::Check,
        Glyph::Clock,
        Glyph::Hourglass,
        Glyph::ArrowRight,
        Glyph::ArrowLeft,
        Glyph::Power,
    ];

    /// The display slot this glyph occupies (1–7).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The glyph stored in `index`, if it is one of the reserved slots.
    pub const fn from_index(index: u8) -> Option<Glyph> {
        match index {
            1 => Some(Glyph::Note),
            2 => Some(Glyph::Check),
            3 => Some(Glyph::Clock),
            4 => Some(Glyph::Hourglass),
            5 => Some(Glyph::ArrowRight),
            6 => Some(Glyph::ArrowLeft),
            7 => Some(Glyph::Power),
            _ => None,
        }
    }

    /// The 5×8 pixel pattern, one row per byte, top to bottom.
    pub const fn rows(self) -> [u8; 8] {
        match self {
            Glyph::Note => [
                0b00010, 0b00011, 0b00010, 0b00010, 0b01110, 0b11110, 0b01100, 0b00000,
            ],
            Glyph::Check => [
                0b00000, 0b00001, 0b00011, 0b10110, 0b11100, 0b01000, 0b00000, 0b00000,
            ],
            Glyph::Clock => [
                0b00000, 0b01110, 0b10101, 0b10111, 0b10001, 0b01110, 0b00000, 0b00000,
            ],
            Glyph::Hourglass => [
                0b11111, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b11111, 0b00000,
            ],
            Glyph::ArrowRight => [
                0b01000, 0b01100, 0b01010, 0b01001, 0b01010, 0b01100, 0b01000, 0b00000,
            ],
            Glyph::ArrowLeft => [
                0b00010, 0b00110, 0b01010, 0b10010, 0b01010, 0b00110, 0b00010, 0b00000,
            ],
            Glyph::Power => [
                0b00100, 0b00100, 0b01110, 0b10101, 0b10101, 0b10001, 0b01110, 0b00000,
            ],
        }
    }

    /// The in-band character that renders as this glyph.
    #[inline]
    pub const fn ch(self) -> char {
        self.index() as char
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ch())
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

struct ScreenInner {
    device: Box<dyn CharDisplay>,
    lines: Vec<String>,
}

/// A buffered view of the physical display, shared by handle.
///
/// Writes go to the in-memory line buffer; the device only changes on
/// [`clear`](Screen::clear) and [`flush`](Screen::flush). Every buffered
/// line is kept at exactly [`CHARS`] characters.
#[derive(Clone)]
pub struct Screen {
    inner: Rc<RefCell<ScreenInner>>,
}

impl Screen {
    /// Wrap `device`: allocate the line buffer, upload the [`Glyph`] set
    /// and blank the display.
    pub fn new(device: impl CharDisplay + 'static) -> MenuResult<Self> {
        let mut device: Box<dyn CharDisplay> = Box::new(device);
        for glyph in Glyph::ALL {
            device.create_glyph(glyph.index(), glyph.rows())?;
        }
        device.clear()?;
        Ok(Self {
            inner: Rc::new(RefCell::new(ScreenInner {
                device,
                lines: vec![" ".repeat(CHARS); LINES],
            })),
        })
    }

    /// Blank the buffer and the physical display immediately.
    pub fn clear(&self) -> MenuResult<()> {
        let mut inner = self.inner.borrow_mut();
        for line in &mut inner.lines {
            *line = " ".repeat(CHARS);
        }
        inner.device.clear()?;
        Ok(())
    }

    /// Store `text` on 1-indexed `line` without touching the device.
    ///
    /// The text is truncated to [`CHARS`] characters and right-padded with
    /// spaces (left-justified, fixed width).
    pub fn set_line(&self, line: usize, text: &str) -> MenuResult<()> {
        let index = check_line(line)?;
        self.inner.borrow_mut().lines[index] = fit(text);
        Ok(())
    }

    /// Store `text` on `line` and flush in one call.
    pub fn print(&self, line: usize, text: &str) -> MenuResult<()> {
        self.set_line(line, text)?;
        self.flush()
    }

    /// Push the whole buffer to the device: a device clear followed by one
    /// write of all lines joined with `'\n'`.
    ///
    /// The plate hardware has no flicker-free partial update, so every
    /// flush is a full clear-and-rewrite.
    pub fn flush(&self) -> MenuResult<()> {
        let mut inner = self.inner.borrow_mut();
        let text = inner.lines.join("\n");
        inner.device.clear()?;
        inner.device.write_text(&text)?;
        Ok(())
    }

    /// Read back the buffered text of 1-indexed `line`.
    pub fn line(&self, line: usize) -> MenuResult<String> {
        let index = check_line(line)?;
        Ok(self.inner.borrow().lines[index].clone())
    }
}

impl fmt::Debug for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Screen")
            .field("lines", &self.inner.borrow().lines)
            .finish_non_exhaustive()
    }
}

/// Map a 1-indexed line number to a buffer index, or fail.
fn check_line(line: usize) -> MenuResult<usize> {
    if line == 0 || line > LINES {
        return Err(MenuError::LineOutOfRange { line, max: LINES });
    }
    Ok(line - 1)
}

/// Left-justify `text` into a field of exactly [`CHARS`] characters.
fn fit(text: &str) -> String {
    let mut out: String = text.chars().take(CHARS).collect();
    for _ in out.chars().count()..CHARS {
        out.push(' ');
    }
    out
}
