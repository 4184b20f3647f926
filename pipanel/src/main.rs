//! pipanel — a five-button LCD menu for a Raspberry Pi control panel,
//! running against the terminal plate emulator.

mod actions;

use lcdmenu_core::{MainMenu, StopHandle, SubMenu};
use lcdmenu_term::TermPlate;

use actions::{ButtonTest, SayHi, Shutdown, SystemCheck, Uptime};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stop = StopHandle::new();

    let (display, pad) = TermPlate::new()?.with_stop(stop.clone()).split();

    let mut menu = MainMenu::new(display, pad)?.with_stop(stop.clone());
    menu.add_item(SayHi);
    menu.add_item(ButtonTest);
    menu.add_item(
        SubMenu::new("System")
            .item(SystemCheck)
            .item(Uptime)
            .item(Shutdown),
    );

    // in raw mode Ctrl-C reaches us as a key event, but a SIGINT sent
    // from outside still needs a handler
    let sig = stop.clone();
    ctrlc::set_handler(move || sig.request_stop())?;

    menu.run()?;
    Ok(())
}
