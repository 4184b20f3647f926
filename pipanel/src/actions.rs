//! The menu actions wired up by the panel.

use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use lcdmenu_core::{Button, Glyph, MenuItem, MenuResult, Screen};

/// How long a farewell message stays readable before the menu returns.
const READ_PAUSE: Duration = Duration::from_secs(2);

/// Run a command with suppressed output, returning its exit code.
fn run_silent(program: &str, args: &[&str]) -> Option<i32> {
    Command::new(program)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .ok()
        .and_then(|status| status.code())
}

// ---------------------------------------------------------------------------
// SayHi
// ---------------------------------------------------------------------------

/// Greets the operator, then hands the display straight back.
pub struct SayHi;

impl MenuItem for SayHi {
    fn name(&self) -> &str {
        "Say Hi!"
    }

    fn activate(&mut self, screen: &Screen) -> MenuResult<bool> {
        screen.print(1, &format!("Hi World! {}", Glyph::Check))?;
        thread::sleep(READ_PAUSE);
        Ok(false)
    }
}

// ---------------------------------------------------------------------------
// ButtonTest
// ---------------------------------------------------------------------------

/// Echoes every press to the second line until Select ends the test.
pub struct ButtonTest;

impl MenuItem for ButtonTest {
    fn name(&self) -> &str {
        "Test buttons"
    }

    fn activate(&mut self, screen: &Screen) -> MenuResult<bool> {
        screen.print(1, "Press buttons..")?;
        Ok(true)
    }

    fn handle_input(&mut self, button: Button, screen: &Screen) -> MenuResult<bool> {
        if button == Button::Select {
            screen.print(2, "Select - ENDING")?;
            thread::sleep(READ_PAUSE);
            return Ok(false);
        }
        screen.print(2, button.name())?;
        Ok(true)
    }
}

// ---------------------------------------------------------------------------
// SystemCheck
// ---------------------------------------------------------------------------

/// Runs `uname` and reports whether it worked. Any press dismisses the
/// result.
pub struct SystemCheck;

impl MenuItem for SystemCheck {
    fn name(&self) -> &str {
        "System check"
    }

    fn activate(&mut self, screen: &Screen) -> MenuResult<bool> {
        screen.print(1, "Checking..")?;
        thread::sleep(Duration::from_secs(1));
        match run_silent("uname", &[]) {
            Some(0) => screen.print(1, &format!("uname:      {} OK", Glyph::Check))?,
            Some(code) => screen.print(1, &format!("uname: ERR {code}"))?,
            None => screen.print(1, "uname: ERR")?,
        }
        Ok(true)
    }

    fn handle_input(&mut self, _button: Button, _screen: &Screen) -> MenuResult<bool> {
        Ok(false)
    }
}

// ---------------------------------------------------------------------------
// Uptime
// ---------------------------------------------------------------------------

/// Shows how long the system has been up. Any press dismisses it.
pub struct Uptime;

impl MenuItem for Uptime {
    fn name(&self) -> &str {
        "Uptime"
    }

    fn activate(&mut self, screen: &Screen) -> MenuResult<bool> {
        match read_uptime() {
            Some(seconds) => screen.print(1, &format_uptime(seconds))?,
            None => screen.print(1, "uptime: ERR")?,
        }
        Ok(true)
    }

    fn handle_input(&mut self, _button: Button, _screen: &Screen) -> MenuResult<bool> {
        Ok(false)
    }
}

fn read_uptime() -> Option<u64> {
    let text = std::fs::read_to_string("/proc/uptime").ok()?;
    let seconds: f64 = text.split_whitespace().next()?.parse().ok()?;
    Some(seconds as u64)
}

fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{} up {hours}h {minutes:02}m", Glyph::Clock)
}

// ---------------------------------------------------------------------------
// Shutdown
// ---------------------------------------------------------------------------

/// Powers the system off via `/sbin/shutdown`.
pub struct Shutdown;

impl MenuItem for Shutdown {
    fn name(&self) -> &str {
        "Shutdown"
    }

    fn activate(&mut self, screen: &Screen) -> MenuResult<bool> {
        screen.print(1, "Shutting down..")?;
        thread::sleep(Duration::from_millis(500));
        match run_silent("/sbin/shutdown", &["now"]) {
            Some(0) => screen.print(2, "OK: 0")?,
            Some(code) => screen.print(2, &format!("Failed: {code}"))?,
            None => screen.print(2, "Failed: ?")?,
        }
        thread::sleep(Duration::from_secs(3));
        Ok(false)
    }
}
