//! [`MainMenu`] — the root controller: navigation state machine,
//! delegation chain and polling lifecycle.

use std::time::Duration;

use log::debug;

use crate::buttons::Button;
use crate::driver::{ButtonSource, CharDisplay};
use crate::error::MenuResult;
use crate::item::MenuItem;
use crate::list::ItemList;
use crate::poller::{Poller, StopHandle};
use crate::screen::Screen;

// ---------------------------------------------------------------------------
// MenuState
// ---------------------------------------------------------------------------

/// Controller lifecycle. `Init` lasts until the first state advance, which
/// performs the first render; the transition to `Ready` is one-way.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum MenuState {
    Init,
    Ready,
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Everything a button event acts on. Kept apart from the poller so the
/// routing closure and the poll loop can borrow their halves independently.
struct Navigator {
    screen: Screen,
    list: ItemList,
    state: MenuState,
}

impl Navigator {
    fn start(&mut self) -> MenuResult<()> {
        if self.state == MenuState::Init {
            self.list.render(&self.screen)?;
            self.state = MenuState::Ready;
        }
        Ok(())
    }

    /// Route one debounced button event: down the delegation chain if a
    /// child is active, otherwise into menu navigation.
    fn route(&mut self, button: Button) -> MenuResult<()> {
        if self.state == MenuState::Init {
            // an event before the first render only advances the state
            return self.start();
        }
        if self.list.forward(button, &self.screen)? {
            return Ok(());
        }
        match button {
            Button::Up => {
                self.list.select_prev();
                self.list.render(&self.screen)?;
            }
            Button::Down => {
                self.list.select_next();
                self.list.render(&self.screen)?;
            }
            Button::Select => self.list.activate_selected(&self.screen)?,
            Button::Left | Button::Right => {}
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MainMenu
// ---------------------------------------------------------------------------

/// The root menu controller.
///
/// Owns the screen, the registered items and the poller; [`run`](MainMenu::run)
/// drives the whole lifecycle. Hosts that poll elsewhere (say, from GPIO
/// interrupts) can instead call [`start`](MainMenu::start) once and feed
/// events through [`handle_button`](MainMenu::handle_button).
pub struct MainMenu<S: ButtonSource> {
    nav: Navigator,
    poller: Poller<S>,
}

impl<S: ButtonSource> MainMenu<S> {
    /// Build a controller over the two hardware halves. Uploads the glyph
    /// set and blanks the display (see [`Screen::new`]).
    pub fn new(display: impl CharDisplay + 'static, buttons: S) -> MenuResult<Self> {
        Ok(Self {
            nav: Navigator {
                screen: Screen::new(display)?,
                list: ItemList::new(),
                state: MenuState::Init,
            },
            poller: Poller::new(buttons),
        })
    }

    /// Share an externally created stop flag, e.g. one also wired to a
    /// signal handler.
    pub fn with_stop(mut self, stop: StopHandle) -> Self {
        self.poller = self.poller.with_stop(stop);
        self
    }

    /// Replace the default 100 ms scan interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poller = self.poller.with_interval(interval);
        self
    }

    /// Append `item` to the end of the menu. Registration order is display
    /// and navigation order.
    pub fn add_item(&mut self, item: impl MenuItem + 'static) {
        self.nav.list.push(Box::new(item));
    }

    /// A handle that makes [`run`](MainMenu::run) return.
    pub fn stop_handle(&self) -> StopHandle {
        self.poller.stop_handle()
    }

    /// Another view of the controller's display buffer.
    pub fn screen(&self) -> Screen {
        self.nav.screen.clone()
    }

    /// Index of the highlighted item.
    pub fn selected(&self) -> usize {
        self.nav.list.selected()
    }

    /// Index of the item currently owning input, if any.
    pub fn active_child(&self) -> Option<usize> {
        self.nav.list.active()
    }

    /// Perform the one-way `Init → Ready` transition and render the menu
    /// for the first time. Harmless when called again.
    pub fn start(&mut self) -> MenuResult<()> {
        self.nav.start()
    }

    /// Route a single debounced button event through the controller.
    pub fn handle_button(&mut self, button: Button) -> MenuResult<()> {
        self.nav.route(button)
    }

    /// Run the controller: first render, then the blocking poll loop, and
    /// a display clear once a stop is requested.
    ///
    /// Device and item errors abort the loop and propagate without the
    /// final clear.
    pub fn run(&mut self) -> MenuResult<()> {
        self.nav.start()?;
        debug!("menu running");
        let nav = &mut self.nav;
        self.poller.run(|button| nav.route(button))?;
        self.nav.screen.clear()
    }
}
