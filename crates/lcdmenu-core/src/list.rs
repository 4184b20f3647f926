//! [`ItemList`] — ordered items, bounded selection, and the active-child
//! bookkeeping shared by the root menu and nested submenus.

use log::debug;

use crate::buttons::Button;
use crate::error::MenuResult;
use crate::item::MenuItem;
use crate::screen::{Glyph, LINES, Screen};

/// Ordered menu entries plus the two pieces of navigation state: the
/// selection index and the optional active child currently owning input.
pub(crate) struct ItemList {
    items: Vec<Box<dyn MenuItem>>,
    selected: usize,
    active: Option<usize>,
}

impl ItemList {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            active: None,
        }
    }

    /// Append an item; registration order is display order.
    pub(crate) fn push(&mut self, item: Box<dyn MenuItem>) {
        self.items.push(item);
    }

    pub(crate) fn selected(&self) -> usize {
        self.selected
    }

    pub(crate) fn active(&self) -> Option<usize> {
        self.active
    }

    /// Back to the top with no active child. Used when a submenu is
    /// re-entered.
    pub(crate) fn reset(&mut self) {
        self.selected = 0;
        self.active = None;
    }

    /// Move the selection up one item; stops at the first.
    pub(crate) fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move the selection down one item; stops at the last.
    pub(crate) fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    /// Draw the window of up to [`LINES`] consecutive items starting at the
    /// selection: the selected row carries the arrow marker, the rest two
    /// leading spaces. The window shortens near the end of the list rather
    /// than wrapping around.
    pub(crate) fn render(&self, screen: &Screen) -> MenuResult<()> {
        screen.clear()?;
        let end = (self.selected + LINES).min(self.items.len());
        for (row, item) in self.items[self.selected..end].iter().enumerate() {
            let text = if row == 0 {
                format!("{} {}", Glyph::ArrowRight, item.name())
            } else {
                format!("  {}", item.name())
            };
            screen.set_line(row + 1, &text)?;
        }
        screen.flush()
    }

    /// Forward `button` into the delegation chain, if one is active.
    ///
    /// Returns `true` when the event was consumed by a child. A child
    /// answering `false` is detached and this list's own view re-rendered;
    /// the event still counts as consumed, so callers never interpret it a
    /// second time.
    pub(crate) fn forward(&mut self, button: Button, screen: &Screen) -> MenuResult<bool> {
        let Some(index) = self.active else {
            return Ok(false);
        };
        debug!("passing {button} to '{}'", self.items[index].name());
        let keep = self.items[index].handle_input(button, screen)?;
        if !keep {
            debug!("'{}' finished", self.items[index].name());
            self.active = None;
            self.render(screen)?;
        }
        Ok(true)
    }

    /// Clear the display and activate the selected item. It becomes the
    /// active child unless it finishes immediately, in which case the list
    /// is re-rendered in the same call.
    pub(crate) fn activate_selected(&mut self, screen: &Screen) -> MenuResult<()> {
        if self.items.is_empty() {
            return Ok(());
        }
        let index = self.selected;
        debug!("activating '{}'", self.items[index].name());
        self.active = Some(index);
        screen.clear()?;
        let keep = self.items[index].activate(screen)?;
        if !keep {
            self.active = None;
            self.render(screen)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{Probe, new_screen};

    fn list_of(names: &[&'static str]) -> ItemList {
        let mut list = ItemList::new();
        for name in names {
            let (probe, _state) = Probe::new(name);
            list.push(Box::new(probe));
        }
        list
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut list = list_of(&["a", "b", "c"]);
        list.select_prev();
        assert_eq!(list.selected(), 0);
        list.select_next();
        list.select_next();
        list.select_next();
        assert_eq!(list.selected(), 2);
        list.select_prev();
        assert_eq!(list.selected(), 1);
    }

    #[test]
    fn render_marks_the_selected_row() {
        let (screen, _lcd) = new_screen();
        let list = list_of(&["first", "second", "third"]);
        list.render(&screen).unwrap();
        assert_eq!(screen.line(1).unwrap(), format!("{:<16}", "\u{5} first"));
        assert_eq!(screen.line(2).unwrap(), format!("{:<16}", "  second"));
    }

    #[test]
    fn window_shortens_at_the_end() {
        let (screen, _lcd) = new_screen();
        let mut list = list_of(&["first", "second", "third"]);
        list.select_next();
        list.select_next();
        list.render(&screen).unwrap();
        assert_eq!(screen.line(1).unwrap(), format!("{:<16}", "\u{5} third"));
        assert_eq!(screen.line(2).unwrap(), " ".repeat(16));
    }

    #[test]
    fn empty_list_renders_blank_and_ignores_select() {
        let (screen, lcd) = new_screen();
        let mut list = ItemList::new();
        list.render(&screen).unwrap();
        assert_eq!(screen.line(1).unwrap(), " ".repeat(16));
        lcd.take_ops();
        list.activate_selected(&screen).unwrap();
        assert!(lcd.take_ops().is_empty());
        assert_eq!(list.active(), None);
    }

    #[test]
    fn long_names_are_cut_at_the_viewport() {
        let (screen, _lcd) = new_screen();
        let list = list_of(&["a particularly verbose entry"]);
        list.render(&screen).unwrap();
        assert_eq!(screen.line(1).unwrap(), "\u{5} a particularly");
        assert_eq!(screen.line(1).unwrap().chars().count(), 16);
    }
}
