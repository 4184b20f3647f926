//! Crossterm plate emulator for lcdmenu.
//!
//! Provides a [`TermPlate`] that stands in for the 16x2 LCD shield during
//! development: the display buffer is drawn into a framed window in the
//! terminal, and key presses are turned into plate button reads.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};

use lcdmenu_core::{Button, ButtonSource, CHARS, CharDisplay, DriverError, LINES, StopHandle};

/// Top-left cell of the emulated display, inside the frame.
const ORIGIN_X: u16 = 2;
const ORIGIN_Y: u16 = 1;

/// CGRAM slots on the emulated controller.
const GLYPH_SLOTS: usize = 8;

/// Terminal stand-ins for the custom glyph slots 1 through 7.
const GLYPH_CHARS: [char; 7] = ['♪', '✓', '◷', '⧗', '▶', '◀', '⏻'];

/// Maps a key press to the plate button it emulates.
fn to_button(code: KeyCode) -> Option<Button> {
    match code {
        KeyCode::Enter => Some(Button::Select),
        KeyCode::Up => Some(Button::Up),
        KeyCode::Down => Some(Button::Down),
        KeyCode::Left => Some(Button::Left),
        KeyCode::Right => Some(Button::Right),
        _ => None,
    }
}

/// Keys that ask the emulator to stop the menu. Ctrl-C arrives as a key
/// event in raw mode, not as a signal, so it is handled here.
fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc)
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

/// Maps a buffer character to what the terminal should show. Glyph slots
/// render a stand-in once defined and a hollow box before that; other
/// control characters are never printable.
fn printable(ch: char, glyphs: &[Option<[u8; 8]>; GLYPH_SLOTS]) -> char {
    match u32::from(ch) {
        slot @ 1..=7 => match glyphs[slot as usize] {
            Some(_) => GLYPH_CHARS[slot as usize - 1],
            None => '□',
        },
        0..=31 | 127 => '?',
        _ => ch,
    }
}

/// State shared by the display and button halves of the plate.
#[derive(Default)]
struct PlateState {
    latched: [bool; Button::COUNT],
    glyphs: [Option<[u8; 8]>; GLYPH_SLOTS],
    stop: Option<StopHandle>,
    restore: bool,
}

impl PlateState {
    /// Apply one key event: quit keys request a stop, navigation keys
    /// latch their button until the next scan picks it up.
    fn apply_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if is_quit(code, modifiers) {
            if let Some(stop) = &self.stop {
                stop.request_stop();
            }
            return;
        }
        if let Some(button) = to_button(code) {
            self.latched[button.index()] = true;
        }
    }

    /// Consume the latch for `button`. A latched press reads as held for
    /// exactly one scan, which the debouncing poller reports once.
    fn take(&mut self, button: Button) -> bool {
        std::mem::take(&mut self.latched[button.index()])
    }
}

impl Drop for PlateState {
    fn drop(&mut self) {
        if self.restore {
            restore_terminal();
        }
    }
}

/// Drain every pending terminal event into the plate state.
fn pump(state: &mut PlateState) -> Result<(), DriverError> {
    while event::poll(Duration::ZERO)? {
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) = event::read()?
        {
            if kind != KeyEventKind::Release {
                state.apply_key(code, modifiers);
            }
        }
    }
    Ok(())
}

fn restore_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Draw the frame around the display window and the key legend below it.
fn draw_chrome(out: &mut impl Write) -> io::Result<()> {
    let lines = LINES as u16;
    execute!(out, cursor::MoveTo(ORIGIN_X - 1, ORIGIN_Y - 1))?;
    write!(out, "┌{}┐", "─".repeat(CHARS))?;
    for row in 0..lines {
        execute!(out, cursor::MoveTo(ORIGIN_X - 1, ORIGIN_Y + row))?;
        write!(out, "│{}│", " ".repeat(CHARS))?;
    }
    execute!(out, cursor::MoveTo(ORIGIN_X - 1, ORIGIN_Y + lines))?;
    write!(out, "└{}┘", "─".repeat(CHARS))?;
    execute!(out, cursor::MoveTo(ORIGIN_X - 1, ORIGIN_Y + lines + 2))?;
    write!(out, "arrows move, enter selects, q quits")?;
    out.flush()
}

/// A terminal stand-in for the LCD shield.
///
/// Construction takes over the terminal (raw mode, alternate screen);
/// dropping the last half returned by [`split`](TermPlate::split) restores
/// it.
pub struct TermPlate {
    state: Rc<RefCell<PlateState>>,
}

impl TermPlate {
    /// Take over the terminal and draw the empty plate.
    pub fn new() -> Result<Self, DriverError> {
        terminal::enable_raw_mode()?;
        let mut state = PlateState::default();
        state.restore = true;
        let plate = Self {
            state: Rc::new(RefCell::new(state)),
        };
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        draw_chrome(&mut stdout)?;
        Ok(plate)
    }

    /// Wire the quit keys to `stop`, so pressing `q` ends the menu loop.
    pub fn with_stop(self, stop: StopHandle) -> Self {
        self.state.borrow_mut().stop = Some(stop);
        self
    }

    /// Split the plate into its display half and its button half.
    pub fn split(self) -> (TermDisplay, TermPad) {
        let state = Rc::clone(&self.state);
        (TermDisplay { state }, TermPad { state: self.state })
    }
}

/// The display half of a [`TermPlate`].
pub struct TermDisplay {
    state: Rc<RefCell<PlateState>>,
}

impl CharDisplay for TermDisplay {
    fn clear(&mut self) -> Result<(), DriverError> {
        let mut stdout = io::stdout();
        for row in 0..LINES as u16 {
            execute!(stdout, cursor::MoveTo(ORIGIN_X, ORIGIN_Y + row))?;
            write!(stdout, "{}", " ".repeat(CHARS))?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn create_glyph(&mut self, index: u8, rows: [u8; 8]) -> Result<(), DriverError> {
        let slot = usize::from(index);
        if slot >= GLYPH_SLOTS {
            return Err(format!("glyph slot {index} out of range").into());
        }
        self.state.borrow_mut().glyphs[slot] = Some(rows);
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DriverError> {
        let state = self.state.borrow();
        let mut stdout = io::stdout();
        for (row, line) in text.lines().take(LINES).enumerate() {
            let rendered: String = line
                .chars()
                .take(CHARS)
                .map(|ch| printable(ch, &state.glyphs))
                .collect();
            execute!(stdout, cursor::MoveTo(ORIGIN_X, ORIGIN_Y + row as u16))?;
            write!(stdout, "{rendered:<width$}", width = CHARS)?;
        }
        stdout.flush()?;
        Ok(())
    }
}

/// The button half of a [`TermPlate`].
pub struct TermPad {
    state: Rc<RefCell<PlateState>>,
}

impl ButtonSource for TermPad {
    fn is_pressed(&mut self, button: Button) -> Result<bool, DriverError> {
        let mut state = self.state.borrow_mut();
        pump(&mut state)?;
        Ok(state.take(button))
    }
}
