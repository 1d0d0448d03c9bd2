//! Which navbar dropdown is open.
//!
//! All menus share one slot, so opening a menu implicitly closes whichever was
//! open before. Hover events drive the slot on pointer-capable viewports and
//! clicks drive it on touch-oriented ones; the viewport is consulted on every
//! call.

use crate::core::viewport::Viewport;

use super::menu::MenuId;

#[derive(Debug, Clone)]
pub struct DropdownController {
    viewport: Viewport,
    active: Option<MenuId>,
}

impl DropdownController {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            active: None,
        }
    }

    pub fn active(&self) -> Option<MenuId> {
        self.active
    }

    pub fn is_open(&self, menu: MenuId) -> bool {
        self.active == Some(menu)
    }

    /// Pointer entered `menu`'s region. Opens it on pointer-capable viewports.
    pub fn enter(&mut self, menu: MenuId) {
        if self.viewport.is_pointer_capable() {
            self.set(Some(menu));
        }
    }

    /// Pointer left the open menu's region. Closes it on pointer-capable viewports.
    pub fn leave(&mut self) {
        if self.viewport.is_pointer_capable() {
            self.set(None);
        }
    }

    /// Tap on `menu`. On touch-oriented viewports this closes `menu` if it is
    /// open and otherwise switches straight to it.
    pub fn toggle(&mut self, menu: MenuId) {
        if self.viewport.is_pointer_capable() {
            return;
        }
        let next = if self.is_open(menu) { None } else { Some(menu) };
        self.set(next);
    }

    /// Class list for `menu`'s dropdown panel.
    pub fn panel_class(&self, menu: MenuId) -> &'static str {
        if self.is_open(menu) {
            "navbar__dropdown navbar__dropdown--show"
        } else {
            "navbar__dropdown"
        }
    }

    fn set(&mut self, next: Option<MenuId>) {
        if self.active != next {
            tracing::debug!(
                from = self.active.map(MenuId::as_str),
                to = next.map(MenuId::as_str),
                "dropdown changed"
            );
            self.active = next;
        }
    }
}
