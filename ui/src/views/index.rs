use dioxus::prelude::*;

const INDEX_CSS: Asset = asset!("/assets/styling/index.css");
const BACKGROUND: Asset = asset!("/assets/images/background.svg");

/// Landing page: full-bleed background with the tagline and sign-in call to action.
#[component]
pub fn Index() -> Element {
    crate::i18n::init();

    rsx! {
        document::Link { rel: "stylesheet", href: INDEX_CSS }

        section { class: "page page-index",
            img {
                class: "page-index__background",
                src: BACKGROUND,
                alt: crate::t!("index-background-alt"),
            }
            div { class: "page-index__overlay",
                p { {crate::t!("index-line-1")} }
                p { {crate::t!("index-line-2")} }
                p { {crate::t!("index-line-3")} }
                div { class: "page-index__sign-in",
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        // Authentication is not wired up yet; record the intent only.
                        onclick: move |_| tracing::info!("sign-in requested"),
                        span { class: "page-index__google-mark", aria_hidden: "true", "G" }
                        {crate::t!("index-sign-in")}
                    }
                }
            }
        }
    }
}
