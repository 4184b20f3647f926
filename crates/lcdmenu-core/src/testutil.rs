//! Shared test doubles for the hardware traits and the item contract.

use std::cell::RefCell;
use std::rc::Rc;

use crate::buttons::Button;
use crate::driver::{ButtonSource, CharDisplay, DriverError};
use crate::error::MenuResult;
use crate::item::MenuItem;
use crate::poller::StopHandle;
use crate::screen::Screen;

// ---------------------------------------------------------------------------
// FakeLcd
// ---------------------------------------------------------------------------

/// One recorded device call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Clear,
    Glyph(u8),
    Write(String),
}

/// A [`CharDisplay`] that records every call. Clones share the log.
#[derive(Clone, Default)]
pub struct FakeLcd {
    ops: Rc<RefCell<Vec<Op>>>,
}

impl FakeLcd {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return everything recorded so far.
    pub fn take_ops(&self) -> Vec<Op> {
        self.ops.borrow_mut().drain(..).collect()
    }

    /// The text of the most recent `write_text`, if any.
    pub fn last_write(&self) -> Option<String> {
        self.ops.borrow().iter().rev().find_map(|op| match op {
            Op::Write(text) => Some(text.clone()),
            _ => None,
        })
    }
}

impl CharDisplay for FakeLcd {
    fn clear(&mut self) -> Result<(), DriverError> {
        self.ops.borrow_mut().push(Op::Clear);
        Ok(())
    }

    fn create_glyph(&mut self, index: u8, _rows: [u8; 8]) -> Result<(), DriverError> {
        self.ops.borrow_mut().push(Op::Glyph(index));
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<(), DriverError> {
        self.ops.borrow_mut().push(Op::Write(text.to_string()));
        Ok(())
    }
}

/// A fresh [`Screen`] over a recording device, with the initialisation
/// calls already drained from the log.
pub fn new_screen() -> (Screen, FakeLcd) {
    let lcd = FakeLcd::new();
    let screen = Screen::new(lcd.clone()).unwrap();
    lcd.take_ops();
    (screen, lcd)
}

// ---------------------------------------------------------------------------
// NullButtons
// ---------------------------------------------------------------------------

/// A [`ButtonSource`] with nothing ever pressed.
pub struct NullButtons;

impl ButtonSource for NullButtons {
    fn is_pressed(&mut self, _button: Button) -> Result<bool, DriverError> {
        Ok(false)
    }
}

// ---------------------------------------------------------------------------
// Script
// ---------------------------------------------------------------------------

/// A [`ButtonSource`] that replays a fixed sequence of level scans, one
/// frame per poll tick, then requests a stop on the shared handle.
pub struct Script {
    frames: Vec<[bool; Button::COUNT]>,
    scan: usize,
    calls: usize,
    stop: StopHandle,
}

impl Script {
    pub fn new(frames: Vec<[bool; Button::COUNT]>, stop: StopHandle) -> Self {
        Self {
            frames,
            scan: 0,
            calls: 0,
            stop,
        }
    }
}

impl ButtonSource for Script {
    fn is_pressed(&mut self, button: Button) -> Result<bool, DriverError> {
        let frame = self
            .frames
            .get(self.scan)
            .copied()
            .unwrap_or([false; Button::COUNT]);
        self.calls += 1;
        if self.calls % Button::COUNT == 0 {
            self.scan += 1;
            if self.scan >= self.frames.len() {
                self.stop.request_stop();
            }
        }
        Ok(frame[button.index()])
    }
}

/// A scan frame with only `button` held.
pub fn held(button: Button) -> [bool; Button::COUNT] {
    let mut frame = [false; Button::COUNT];
    frame[button.index()] = true;
    frame
}

/// A scan frame with every button released.
pub const RELEASED: [bool; Button::COUNT] = [false; Button::COUNT];

// ---------------------------------------------------------------------------
// Probe
// ---------------------------------------------------------------------------

/// What a [`Probe`] has seen and what it should answer.
pub struct ProbeState {
    pub activations: usize,
    pub inputs: Vec<Button>,
    pub activate_returns: bool,
    pub input_returns: bool,
}

/// A scriptable [`MenuItem`] recording every call. The test keeps the
/// state handle to steer and inspect it after the probe has been boxed.
pub struct Probe {
    name: &'static str,
    state: Rc<RefCell<ProbeState>>,
}

impl Probe {
    pub fn new(name: &'static str) -> (Probe, Rc<RefCell<ProbeState>>) {
        let state = Rc::new(RefCell::new(ProbeState {
            activations: 0,
            inputs: Vec::new(),
            activate_returns: true,
            input_returns: true,
        }));
        (
            Probe {
                name,
                state: Rc::clone(&state),
            },
            state,
        )
    }
}

impl MenuItem for Probe {
    fn name(&self) -> &str {
        self.name
    }

    fn activate(&mut self, _screen: &Screen) -> MenuResult<bool> {
        let mut state = self.state.borrow_mut();
        state.activations += 1;
        Ok(state.activate_returns)
    }

    fn handle_input(&mut self, button: Button, _screen: &Screen) -> MenuResult<bool> {
        let mut state = self.state.borrow_mut();
        state.inputs.push(button);
        Ok(state.input_returns)
    }
}
