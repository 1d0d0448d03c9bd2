//! Collapsible navigation panel on narrow viewports.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drawer {
    open: bool,
}

impl Drawer {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Tap on the menu icon.
    pub fn toggle(&mut self) {
        self.open = !self.open;
        tracing::debug!(open = self.open, "drawer toggled");
    }

    /// Class list for the lower navbar panel.
    pub fn panel_class(self) -> &'static str {
        if self.open {
            "navbar__bottom navbar__bottom--open"
        } else {
            "navbar__bottom"
        }
    }
}
