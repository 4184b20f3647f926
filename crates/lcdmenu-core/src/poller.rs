//! Debounced button polling: [`Poller`], [`StopHandle`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use log::{debug, trace};

use crate::buttons::Button;
use crate::driver::ButtonSource;
use crate::error::MenuResult;

/// Interval between button scans.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

// ---------------------------------------------------------------------------
// StopHandle
// ---------------------------------------------------------------------------

/// A cooperative stop flag for [`Poller::run`], backed by an [`AtomicBool`].
///
/// Clones share one flag. [`request_stop`](StopHandle::request_stop) may be
/// called from any context — another thread, a signal handler — and any
/// number of times; the running loop observes it at the top of its next
/// iteration.
#[derive(Clone, Debug)]
pub struct StopHandle {
    stop: Arc<AtomicBool>,
}

impl StopHandle {
    /// Create a new, unset handle.
    pub fn new() -> Self {
        Self {
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether a stop has been requested.
    #[inline]
    pub fn is_requested(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    /// Request the loop to stop. Idempotent.
    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

impl Default for StopHandle {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Poller
// ---------------------------------------------------------------------------

/// Samples the button levels at a fixed interval and reports each physical
/// press exactly once.
///
/// The hardware only offers a level query, so a press is derived from the
/// edge: a button fires when seen held while not yet announced, and is
/// re-armed once seen released. Holding a button across many ticks
/// therefore produces a single event.
pub struct Poller<S: ButtonSource> {
    source: S,
    interval: Duration,
    stop: StopHandle,
    announced: [bool; Button::COUNT],
}

impl<S: ButtonSource> Poller<S> {
    /// Create a poller over `source` scanning every [`POLL_INTERVAL`].
    pub fn new(source: S) -> Self {
        Self {
            source,
            interval: POLL_INTERVAL,
            stop: StopHandle::new(),
            announced: [false; Button::COUNT],
        }
    }

    /// Replace the scan interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Share an externally created stop flag.
    pub fn with_stop(mut self, stop: StopHandle) -> Self {
        self.stop = stop;
        self
    }

    /// A handle that stops this poller's loop.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Block, scanning the buttons until a stop is requested.
    ///
    /// `on_press` runs inline for every debounced press; an error from it,
    /// or from the button source, aborts the loop immediately.
    pub fn run<F>(&mut self, mut on_press: F) -> MenuResult<()>
    where
        F: FnMut(Button) -> MenuResult<()>,
    {
        while !self.stop.is_requested() {
            for button in Button::ALL {
                let held = self.source.is_pressed(button)?;
                let announced = &mut self.announced[button.index()];
                if held && !*announced {
                    *announced = true;
                    debug!("button pressed: {button}");
                    on_press(button)?;
                } else if !held {
                    *announced = false;
                }
            }
            thread::sleep(self.interval);
        }
        trace!("poller stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::DriverError;
    use crate::error::MenuError;
    use crate::testutil::{RELEASED, Script, held};

    fn run_script(frames: Vec<[bool; Button::COUNT]>) -> Vec<Button> {
        let stop = StopHandle::new();
        let script = Script::new(frames, stop.clone());
        let mut fired = Vec::new();
        let mut poller = Poller::new(script)
            .with_interval(Duration::ZERO)
            .with_stop(stop);
        poller
            .run(|button| {
                fired.push(button);
                Ok(())
            })
            .unwrap();
        fired
    }

    #[test]
    fn hold_fires_once() {
        let down = held(Button::Up);
        assert_eq!(run_script(vec![down, down, down, down]), vec![Button::Up]);
    }

    #[test]
    fn release_rearms_the_button() {
        let down = held(Button::Select);
        assert_eq!(
            run_script(vec![down, RELEASED, down]),
            vec![Button::Select, Button::Select]
        );
    }

    #[test]
    fn simultaneous_presses_fire_in_polling_order() {
        let mut both = held(Button::Up);
        both[Button::Select.index()] = true;
        assert_eq!(run_script(vec![both]), vec![Button::Select, Button::Up]);
    }

    #[test]
    fn stop_before_run_is_safe_and_idempotent() {
        let stop = StopHandle::new();
        stop.request_stop();
        stop.request_stop();
        let script = Script::new(vec![held(Button::Down)], stop.clone());
        let mut fired = Vec::new();
        let mut poller = Poller::new(script)
            .with_interval(Duration::ZERO)
            .with_stop(stop);
        poller
            .run(|button| {
                fired.push(button);
                Ok(())
            })
            .unwrap();
        assert!(fired.is_empty());
    }

    #[test]
    fn handler_error_aborts_the_loop() {
        let stop = StopHandle::new();
        let script = Script::new(vec![held(Button::Up); 4], stop.clone());
        let mut poller = Poller::new(script)
            .with_interval(Duration::ZERO)
            .with_stop(stop);
        let result = poller.run(|_| Err(MenuError::Unimplemented("handle_input")));
        assert!(matches!(result, Err(MenuError::Unimplemented(_))));
    }

    #[test]
    fn source_error_propagates() {
        struct Broken;

        impl ButtonSource for Broken {
            fn is_pressed(&mut self, _button: Button) -> Result<bool, DriverError> {
                Err(DriverError::from(std::io::Error::other("i2c timeout")))
            }
        }

        let mut poller = Poller::new(Broken).with_interval(Duration::ZERO);
        let result = poller.run(|_| Ok(()));
        assert!(matches!(result, Err(MenuError::Driver(_))));
    }
}
