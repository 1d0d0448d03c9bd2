//! Bootstrap for the hosted page-translation widget.
//!
//! The widget is a third-party script that fills the container rendered by the
//! navbar (see [`CONTAINER_ID`]). Loading it needs two things in the page: a
//! global callback the script invokes once loaded, and the `<script>` element
//! itself. [`TranslateConfig::bootstrap_script`] produces JS that does both; the
//! platform decides how to run it by passing an injector to [`init`]:
//!
//! ```ignore
//! use_hook(|| {
//!     ui::translate::init(&TranslateConfig::default(), |js| {
//!         document::eval(js);
//!     });
//! });
//! ```
//!
//! Pages served from a custom scheme (the desktop webview's `dioxus://`) must
//! use [`TranslateConfig::https`], since a protocol-relative source would
//! resolve against that scheme.
//!
//! Only the first call injects anything. A failed script load simply leaves the
//! container empty.

use std::sync::Once;

use serde::Serialize;

/// Id of the element the widget renders into.
pub const CONTAINER_ID: &str = "google_translate_element";

const SCRIPT_HOST_PATH: &str = "//translate.google.com/translate_a/element.js";

/// Widget options and page wiring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateConfig {
    pub page_language: &'static str,
    pub included_languages: &'static [&'static str],
    pub container_id: &'static str,
    /// Name of the global function the loaded script calls back into.
    pub callback_name: &'static str,
    /// URL scheme for the script source; `None` inherits the page's scheme.
    pub scheme: Option<&'static str>,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            page_language: "en",
            included_languages: &["en", "hi", "or", "ml", "fr", "es", "bn", "ta"],
            container_id: CONTAINER_ID,
            callback_name: "googleTranslateElementInit",
            scheme: None,
        }
    }
}

/// JSON shape of the first argument to `TranslateElement`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetOptions<'a> {
    page_language: &'a str,
    included_languages: String,
}

impl TranslateConfig {
    /// Same widget, loaded over an absolute `https:` URL.
    pub fn https(self) -> Self {
        Self {
            scheme: Some("https"),
            ..self
        }
    }

    pub fn script_src(&self) -> String {
        let scheme = self.scheme.map(|s| format!("{s}:")).unwrap_or_default();
        format!("{scheme}{SCRIPT_HOST_PATH}?cb={}", self.callback_name)
    }

    /// JS that registers the widget callback and appends the async loader script.
    pub fn bootstrap_script(&self) -> String {
        let options = WidgetOptions {
            page_language: self.page_language,
            included_languages: self.included_languages.join(","),
        };
        let options = serde_json::to_string(&options).unwrap_or_else(|_| "{}".to_string());
        let callback = serde_json::Value::from(self.callback_name).to_string();
        let container = serde_json::Value::from(self.container_id).to_string();
        let src = serde_json::Value::from(self.script_src()).to_string();

        format!(
            r#"(function () {{
  window[{callback}] = function () {{
    var t = window.google.translate;
    var opts = {options};
    opts.layout = t.TranslateElement.InlineLayout.SIMPLE;
    new t.TranslateElement(opts, {container});
  }};
  var s = document.createElement("script");
  s.src = {src};
  s.async = true;
  document.body.appendChild(s);
}})();"#
        )
    }
}

/// Runs a bootstrap at most once.
pub struct TranslateBootstrap {
    once: Once,
}

impl TranslateBootstrap {
    pub const fn new() -> Self {
        Self { once: Once::new() }
    }

    /// Hands the bootstrap script to `inject` on the first call only.
    /// Returns whether `inject` ran.
    pub fn run<F>(&self, config: &TranslateConfig, inject: F) -> bool
    where
        F: FnOnce(&str),
    {
        let mut ran = false;
        self.once.call_once(|| {
            tracing::info!(
                container = config.container_id,
                src = %config.script_src(),
                "injecting translation widget"
            );
            inject(&config.bootstrap_script());
            ran = true;
        });
        ran
    }
}

impl Default for TranslateBootstrap {
    fn default() -> Self {
        Self::new()
    }
}

static BOOTSTRAP: TranslateBootstrap = TranslateBootstrap::new();

/// Process-wide bootstrap; only the first call's `config` is used.
pub fn init<F>(config: &TranslateConfig, inject: F) -> bool
where
    F: FnOnce(&str),
{
    BOOTSTRAP.run(config, inject)
}
