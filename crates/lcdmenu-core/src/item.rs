//! The [`MenuItem`] trait — one selectable action in the menu.

use crate::buttons::Button;
use crate::error::{MenuError, MenuResult};
use crate::screen::Screen;

/// A selectable unit of behaviour.
///
/// Both callbacks return a continuation flag: `true` keeps the item as the
/// active input target, `false` detaches it and returns control to its
/// parent (the root menu, or an enclosing item such as
/// [`SubMenu`](crate::submenu::SubMenu)).
///
/// An item may run children of its own. While one is active, the item
/// forwards every button to it first and stays active itself; only the
/// deepest active level consumes an event.
///
/// The shared display reaches the item as a [`Screen`] handle on every
/// call; all handles view the same buffer, so whatever the item prints is
/// what the plate shows.
pub trait MenuItem {
    /// Name shown in menu listings (truncated to the viewport width).
    fn name(&self) -> &str;

    /// Called when the item is selected. The display has just been
    /// cleared; whatever the item prints replaces the menu until it
    /// finishes.
    fn activate(&mut self, screen: &Screen) -> MenuResult<bool> {
        let _ = screen;
        Err(MenuError::Unimplemented("activate"))
    }

    /// Called for every button press while the item is active.
    fn handle_input(&mut self, button: Button, screen: &Screen) -> MenuResult<bool> {
        let _ = (button, screen);
        Err(MenuError::Unimplemented("handle_input"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::new_screen;

    #[test]
    fn defaults_fail_as_unimplemented() {
        struct Bare;

        impl MenuItem for Bare {
            fn name(&self) -> &str {
                "bare"
            }
        }

        let (screen, _lcd) = new_screen();
        let mut item = Bare;
        assert!(matches!(
            item.activate(&screen),
            Err(MenuError::Unimplemented("activate"))
        ));
        assert!(matches!(
            item.handle_input(Button::Select, &screen),
            Err(MenuError::Unimplemented("handle_input"))
        ));
    }
}
