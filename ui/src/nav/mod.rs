//! Navbar interaction state: the shared dropdown slot and the mobile drawer.

mod drawer;
pub use drawer::Drawer;

mod dropdown;
pub use dropdown::DropdownController;

mod menu;
pub use menu::{MenuId, NavTarget, STANDALONE_LINKS};
