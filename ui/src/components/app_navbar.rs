use crate::core::viewport::use_viewport;
use crate::i18n;
use crate::nav::{Drawer, DropdownController, MenuId, NavTarget, STANDALONE_LINKS};
use crate::t;
use crate::translate;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));
const LOGO: Asset = asset!("/assets/images/logo.svg");
const LEADER_PHOTO: Asset = asset!("/assets/images/leader.svg");

/// Platform hook for building router links.
///
/// `ui` does not know each platform's `Route` enum, so platforms register a
/// builder that maps a [`NavTarget`] onto their own `Link`. The closure gets the
/// CSS class and the already localized label and must render the label as the
/// link's only child.
///
/// Register before the first render (e.g. at the top of `App()`):
/// ```ignore
/// register_nav(NavBuilder {
///     link: |target, class, label| rsx!( Link { class, to: route_for(target), "{label}" } ),
/// });
/// ```
///
/// Without a registered builder the navbar renders plain anchors to
/// [`NavTarget::path`].
pub struct NavBuilder {
    pub link: fn(target: NavTarget, class: &'static str, label: String) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("nav builder already registered; keeping the first one");
    }
}

fn nav_link(target: NavTarget, class: &'static str) -> Element {
    let label = target.label();
    match NAV_BUILDER.get() {
        Some(b) => (b.link)(target, class, label),
        None => rsx! {
            a { class, href: target.path(), "{label}" }
        },
    }
}

#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let viewport = use_viewport();
    let mut dropdown = use_signal(move || DropdownController::new(viewport));
    let mut drawer = use_signal(Drawer::default);

    let brand = t!("brand-name");
    let expanded = drawer().is_open();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        nav { id: "navbar", class: "navbar",
            div { class: "navbar__top",
                div { class: "navbar__brand",
                    img { class: "navbar__logo", src: LOGO, alt: t!("logo-alt") }
                    h1 { class: "navbar__brand-name", "{brand}" }
                }
                div { class: "navbar__leader",
                    div { class: "navbar__leader-text",
                        h3 { {t!("leader-name")} }
                        p { {t!("leader-title")} }
                    }
                    img { class: "navbar__leader-photo", src: LEADER_PHOTO, alt: t!("leader-photo-alt") }
                }
                button {
                    class: "navbar__toggle",
                    r#type: "button",
                    aria_label: t!("nav-menu-toggle"),
                    aria_expanded: "{expanded}",
                    onclick: move |_| drawer.write().toggle(),
                    "☰"
                }
            }

            div { class: drawer().panel_class(),
                div { class: "navbar__links",
                    { MenuId::ALL.into_iter().map(|menu| {
                        let id = menu.as_str();
                        let label = menu.label();
                        rsx! {
                            div {
                                key: "{id}",
                                class: "navbar__item navbar__item--menu",
                                onmouseenter: move |_| dropdown.write().enter(menu),
                                onmouseleave: move |_| dropdown.write().leave(),
                                onclick: move |_| dropdown.write().toggle(menu),
                                span { class: "navbar__item-label", "{label} ▾" }
                                div { class: dropdown.read().panel_class(menu),
                                    { menu.items().iter().map(|target| nav_link(*target, "navbar__dropdown-link")) }
                                }
                            }
                        }
                    })}
                    { STANDALONE_LINKS.into_iter().map(|target| {
                        let path = target.path();
                        rsx! {
                            div { key: "{path}", class: "navbar__item",
                                {nav_link(target, "navbar__link")}
                            }
                        }
                    })}
                }
                div {
                    id: translate::CONTAINER_ID,
                    class: "navbar__translate",
                    title: t!("nav-translate-label"),
                }
            }
        }
    }
}
