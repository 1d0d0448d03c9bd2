use std::collections::{BTreeSet, HashSet};

/// Locale file lint.
/// Every embedded locale must define each message exactly once and with a
/// non-empty value, and must cover every key of the fallback (en-US).
///
/// If you add a new locale:
/// 1. Create `ui/i18n/<locale>/farmsathi-ui.ftl`
/// 2. Register it in `LOCALES` below.
/// 3. Run `cargo test -p farmsathi-ui`.
const EN_US: &str = include_str!("../i18n/en-US/farmsathi-ui.ftl");
const HI_IN: &str = include_str!("../i18n/hi-IN/farmsathi-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("en-US", EN_US), ("hi-IN", HI_IN)];

/// `(key, value)` for each single-line message definition.
fn messages(src: &str) -> Vec<(&str, &str)> {
    src.lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| line.split_once('='))
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty() && !k.contains(char::is_whitespace))
        .collect()
}

#[test]
fn no_duplicate_or_empty_messages() {
    let mut failures = Vec::new();

    for (locale, src) in LOCALES {
        let mut seen = HashSet::new();
        for (key, value) in messages(src) {
            if !seen.insert(key) {
                failures.push(format!("{locale}: duplicate `{key}`"));
            }
            if value.is_empty() {
                failures.push(format!("{locale}: empty value for `{key}`"));
            }
        }
    }

    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback: BTreeSet<&str> = messages(EN_US).into_iter().map(|(k, _)| k).collect();
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    for (locale, src) in &LOCALES[1..] {
        let keys: BTreeSet<&str> = messages(src).into_iter().map(|(k, _)| k).collect();
        let missing: Vec<_> = fallback.difference(&keys).copied().collect();
        assert!(
            missing.is_empty(),
            "Locale {locale} is missing {} key(s):\n  {}\n\nHint: copy the missing keys from en-US, then translate.",
            missing.len(),
            missing.join("\n  ")
        );
    }
}

#[test]
fn brand_name_is_not_translated() {
    for (locale, src) in LOCALES {
        let brand = messages(src)
            .into_iter()
            .find(|(k, _)| *k == "brand-name")
            .map(|(_, v)| v);
        assert_eq!(brand, Some("FarmSathi"), "{locale}");
    }
}
