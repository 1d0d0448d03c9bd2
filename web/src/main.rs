use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::nav::NavTarget;
use ui::translate::TranslateConfig;
use ui::views::{Index, NotFound, Section};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
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

const FAVICON: Asset = asset!("/assets/favicon.svg");

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
    rsx!(Link {
        class: class,
        to: route_for(target),
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder { link: nav_link });

    // Viewport falls back to the browser window (ui::core::viewport::BrowserWindow).
    use_hook(|| {
        ui::translate::init(&TranslateConfig::default(), |js| {
            document::eval(js);
        });
    });

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web router layout around the shared navbar.
#[component]
fn WebNavbar() -> Element {
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
