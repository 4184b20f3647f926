//! **lcdmenu-core** — hierarchical menu controller for small character LCDs
//! with a handful of physical buttons.
//!
//! The crate turns a 16×2 character display and five buttons into a
//! scrollable menu of actions: [`MainMenu`] renders the registered
//! [`MenuItem`]s and runs the navigation state machine, [`Poller`] debounces
//! raw button levels into discrete press events, and an activated item owns
//! the input stream until it reports completion — nested arbitrarily deep
//! through items such as [`SubMenu`].
//!
//! Hardware is reached only through the [`CharDisplay`] and [`ButtonSource`]
//! traits; the `lcdmenu-term` crate provides a terminal-emulated plate for
//! development without the device.

pub mod buttons;
pub mod driver;
pub mod error;
pub mod item;
pub mod menu;
pub mod poller;
pub mod screen;
pub mod submenu;

mod list;

#[cfg(test)]
mod testutil;

pub use buttons::Button;
pub use driver::{ButtonSource, CharDisplay, DriverError};
pub use error::{MenuError, MenuResult};
pub use item::MenuItem;
pub use menu::MainMenu;
pub use poller::{POLL_INTERVAL, Poller, StopHandle};
pub use screen::{CHARS, Glyph, LINES, Screen};
pub use submenu::SubMenu;
