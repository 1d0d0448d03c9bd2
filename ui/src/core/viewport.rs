//! Viewport classification for the responsive navbar.
//!
//! Hover interactions only make sense on wide, pointer-driven layouts; on narrow
//! layouts the navbar switches to tap-to-toggle. The width is read through a
//! [`Viewport`] handle every time an interaction happens (never cached), so a
//! window resized between renders is classified correctly.
//!
//! Platforms provide their own [`Viewport`] through the component context:
//! ```ignore
//! use_context_provider(|| Viewport::new(move || read_window_width()));
//! ```
//! Components fetch it with [`use_viewport`]; when no platform provided one the
//! default reads `window.innerWidth` on wasm and assumes a wide window natively.

use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;

/// Widths at or below this value (CSS px) are treated as touch-oriented.
pub const BREAKPOINT_PX: f64 = 768.0;

/// Width assumed on native targets when no platform viewport was provided.
pub const NATIVE_DEFAULT_WIDTH_PX: f64 = 1280.0;

/// How the user is expected to interact with the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// Wide viewport; hover opens dropdowns.
    Pointer,
    /// Narrow viewport; taps toggle dropdowns.
    Touch,
}

impl ViewportMode {
    pub fn from_width(width: f64) -> Self {
        if width > BREAKPOINT_PX {
            Self::Pointer
        } else {
            Self::Touch
        }
    }

    pub fn is_pointer_capable(self) -> bool {
        matches!(self, Self::Pointer)
    }
}

/// A live source of the current viewport width in CSS pixels.
pub trait ViewportQuery {
    fn width(&self) -> f64;
}

impl<F> ViewportQuery for F
where
    F: Fn() -> f64,
{
    fn width(&self) -> f64 {
        self()
    }
}

/// A viewport that never changes size. Handy for tests and headless renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidth(pub f64);

impl ViewportQuery for FixedWidth {
    fn width(&self) -> f64 {
        self.0
    }
}

/// Cloneable handle over a [`ViewportQuery`], suitable for context injection.
#[derive(Clone)]
pub struct Viewport(Rc<dyn ViewportQuery>);

impl Viewport {
    pub fn new<Q: ViewportQuery + 'static>(query: Q) -> Self {
        Self(Rc::new(query))
    }

    pub fn fixed(width: f64) -> Self {
        Self::new(FixedWidth(width))
    }

    pub fn width(&self) -> f64 {
        self.0.width()
    }

    /// Classifies the viewport as of right now.
    pub fn mode(&self) -> ViewportMode {
        ViewportMode::from_width(self.width())
    }

    pub fn is_pointer_capable(&self) -> bool {
        self.mode().is_pointer_capable()
    }
}

impl Default for Viewport {
    #[cfg(target_arch = "wasm32")]
    fn default() -> Self {
        Self::new(BrowserWindow)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn default() -> Self {
        Self::fixed(NATIVE_DEFAULT_WIDTH_PX)
    }
}

impl fmt::Debug for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Viewport").field(&self.width()).finish()
    }
}

/// Reads `window.innerWidth` from the browser.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserWindow;

#[cfg(target_arch = "wasm32")]
impl ViewportQuery for BrowserWindow {
    fn width(&self) -> f64 {
        let width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64());
        match width {
            Some(w) => w,
            None => {
                tracing::warn!("window width unavailable; assuming touch layout");
                BREAKPOINT_PX
            }
        }
    }
}

/// The platform-provided viewport, or the target default.
pub fn use_viewport() -> Viewport {
    try_use_context::<Viewport>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn breakpoint_itself_is_touch() {
        assert_eq!(ViewportMode::from_width(768.0), ViewportMode::Touch);
        assert_eq!(ViewportMode::from_width(768.5), ViewportMode::Pointer);
        assert_eq!(ViewportMode::from_width(400.0), ViewportMode::Touch);
        assert_eq!(ViewportMode::from_width(1024.0), ViewportMode::Pointer);
    }

    #[test]
    fn width_is_read_on_every_query() {
        let width = Rc::new(Cell::new(1024.0));
        let source = width.clone();
        let viewport = Viewport::new(move || source.get());

        assert!(viewport.is_pointer_capable());
        width.set(320.0);
        assert!(!viewport.is_pointer_capable());
        assert_eq!(viewport.mode(), ViewportMode::Touch);
    }

    #[test]
    fn clones_share_the_same_source() {
        let width = Rc::new(Cell::new(500.0));
        let source = width.clone();
        let a = Viewport::new(move || source.get());
        let b = a.clone();
        width.set(900.0);
        assert_eq!(a.width(), 900.0);
        assert_eq!(b.width(), 900.0);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_default_is_pointer_capable() {
        assert!(Viewport::default().is_pointer_capable());
    }
}
