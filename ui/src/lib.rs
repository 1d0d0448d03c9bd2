//! Shared UI crate for FarmSathi. Navbar state, views and localization live here;
//! the `web` and `desktop` crates only add routing and platform glue.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod nav;
pub mod translate;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;
}

/// Shared theme stylesheet (`ui/assets/theme/main.css`).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
