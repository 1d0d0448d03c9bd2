use dioxus::prelude::*;

use crate::nav::NavTarget;

/// Placeholder page for a navbar destination whose feature is not built yet.
#[component]
pub fn Section(target: NavTarget) -> Element {
    crate::i18n::init();
    let title = target.label();

    rsx! {
        section { class: "page page-section", "data-path": target.path(),
            h1 { "{title}" }
            p { class: "page-section__notice", {crate::t!("section-coming-soon")} }
        }
    }
}

/// Shown for any path outside the site map.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    crate::i18n::init();
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no route matched");

    rsx! {
        section { class: "page page-not-found",
            h1 { {crate::t!("not-found-title")} }
            p { {crate::t!("not-found-body")} }
            p { class: "page-not-found__path", code { "{path}" } }
            a { class: "button button--ghost", href: NavTarget::Home.path(),
                {crate::t!("not-found-home")}
            }
        }
    }
}
