#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config, DesktopContext};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::nav::NavTarget;
use ui::translate::TranslateConfig;
use ui::views::{Index, NotFound, Section};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Index {},
    #[route("/diseasedetection")]
    DiseaseDetection {},
    #[route("/croprecommendation")]
    CropRecommendation {},
    #[route("/fertilizer")]
    Fertilizer {},
    #[route("/satelliteimaging")]
    SatelliteImaging {},
    #[route("/agriculture")]
    Agriculture {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/feedback")]
    Feedback {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), embedded so packaged builds need no asset dir.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("FarmSathi – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    dioxus::launch(App);
}

fn route_for(target: NavTarget) -> Route {
    match target {
        NavTarget::Home => Route::Index {},
        NavTarget::DiseaseDetection => Route::DiseaseDetection {},
        NavTarget::CropRecommendation => Route::CropRecommendation {},
        NavTarget::Fertilizer => Route::Fertilizer {},
        NavTarget::SatelliteImaging => Route::SatelliteImaging {},
        NavTarget::Agriculture => Route::Agriculture {},
        NavTarget::About => Route::About {},
        NavTarget::Contact => Route::Contact {},
        NavTarget::Feedback => Route::Feedback {},
    }
}

fn nav_link(target: NavTarget, class: &'static str, label: String) -> Element {
    rsx!(Link { class: class, to: route_for(target), "{label}" })
}

/// The webview serves pages from a custom scheme, so the widget script needs
/// an absolute URL.
fn translate_config() -> TranslateConfig {
    TranslateConfig::default().https()
}

/// Logical (CSS px) inner width of the native window.
#[cfg(feature = "desktop")]
fn window_width(window: &DesktopContext) -> f64 {
    let scale = window.window.scale_factor();
    window.window.inner_size().to_logical::<f64>(scale).width
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });

    // Hover vs. tap is decided from the live window size, not the webview's guess.
    #[cfg(feature = "desktop")]
    {
        let window = dioxus::desktop::use_window();
        use_context_provider(move || ui::core::viewport::Viewport::new(move || window_width(&window)));
    }

    use_hook(|| {
        ui::translate::init(&translate_config(), |js| {
            document::eval(js);
        });
    });

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Desktop router layout around the shared navbar.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar {}

        Outlet::<Route> {}
    }
}

#[component]
fn DiseaseDetection() -> Element {
    rsx!(Section { target: NavTarget::DiseaseDetection })
}

#[component]
fn CropRecommendation() -> Element {
    rsx!(Section { target: NavTarget::CropRecommendation })
}

#[component]
fn Fertilizer() -> Element {
    rsx!(Section { target: NavTarget::Fertilizer })
}

#[component]
fn SatelliteImaging() -> Element {
    rsx!(Section { target: NavTarget::SatelliteImaging })
}

#[component]
fn Agriculture() -> Element {
    rsx!(Section { target: NavTarget::Agriculture })
}

#[component]
fn About() -> Element {
    rsx!(Section { target: NavTarget::About })
}

#[component]
fn Contact() -> Element {
    rsx!(Section { target: NavTarget::Contact })
}

#[component]
fn Feedback() -> Element {
    rsx!(Section { target: NavTarget::Feedback })
}
