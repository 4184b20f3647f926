//! [`SubMenu`] — a menu item that opens a nested menu of its own.

use log::debug;

use crate::buttons::Button;
use crate::error::MenuResult;
use crate::item::MenuItem;
use crate::list::ItemList;
use crate::screen::Screen;

/// A nested menu.
///
/// While active it behaves like the root menu over its own items: Up/Down
/// move the bounded selection, Select activates the highlighted sub-item
/// (which then owns the input stream, extending the delegation chain), and
/// Left backs out to the parent. Right is ignored. Entering the submenu
/// always starts at the top.
pub struct SubMenu {
    title: String,
    list: ItemList,
}

impl SubMenu {
    /// Create an empty submenu listed under `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            list: ItemList::new(),
        }
    }

    /// Append `item`. Builder-style, for registration time:
    /// `SubMenu::new("System").item(SystemCheck).item(Shutdown)`.
    pub fn item(mut self, item: impl MenuItem + 'static) -> Self {
        self.list.push(Box::new(item));
        self
    }
}

impl MenuItem for SubMenu {
    fn name(&self) -> &str {
        &self.title
    }

    fn activate(&mut self, screen: &Screen) -> MenuResult<bool> {
        debug!("entering submenu '{}'", self.title);
        self.list.reset();
        self.list.render(screen)?;
        Ok(true)
    }

    fn handle_input(&mut self, button: Button, screen: &Screen) -> MenuResult<bool> {
        if self.list.forward(button, screen)? {
            // a finished sub-item detaches without closing this submenu
            return Ok(true);
        }
        match button {
            Button::Up => {
                self.list.select_prev();
                self.list.render(screen)?;
            }
            Button::Down => {
                self.list.select_next();
                self.list.render(screen)?;
            }
            Button::Select => self.list.activate_selected(screen)?,
            Button::Left => {
                debug!("leaving submenu '{}'", self.title);
                return Ok(false);
            }
            Button::Right => {}
        }
        Ok(true)
    }
}
