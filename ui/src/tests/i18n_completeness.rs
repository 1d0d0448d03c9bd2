use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const FTL_FILENAME: &str = "farmsathi-ui.ftl";
const I18N_DIR: &str = "i18n";

/// Message ids defined in a Fluent file. Comments, terms and attribute or
/// continuation lines are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .filter(|line| !line.starts_with(char::is_whitespace))
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every literal first argument of `t!("...")` under `root`.
fn referenced_keys(root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        let needle = "t!(\"";
        let mut rest = content.as_str();
        while let Some(pos) = rest.find(needle) {
            rest = &rest[pos + needle.len()..];
            let Some(end) = rest.find('"') else {
                break;
            };
            let key = &rest[..end];
            if !key.is_empty() && key.chars().all(valid_key_char) {
                found.insert(key.to_string());
            }
            rest = &rest[end..];
        }
    }

    found
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|rd| {
            rd.flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

fn read_keys(i18n_root: &Path, locale: &str) -> BTreeSet<String> {
    let path = i18n_root.join(locale).join(FTL_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
    parse_ftl_keys(&content)
}

#[test]
fn every_referenced_key_exists_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = read_keys(&crate_root.join(I18N_DIR), "en-US");
    assert!(!fallback.is_empty(), "fallback locale defines no messages");

    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(referenced.contains("nav-dashboard"));

    let missing: Vec<_> = referenced.difference(&fallback).cloned().collect();
    assert!(
        missing.is_empty(),
        "keys used in sources but missing from en-US:\n{}",
        missing.join("\n")
    );

    let unused: Vec<_> = fallback.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: fallback keys not referenced via t!: {}", unused.join(", "));
    }
}

#[test]
fn locales_match_fallback_exactly() {
    let i18n_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(I18N_DIR);
    let fallback = read_keys(&i18n_root, "en-US");

    let mut report = String::new();
    for locale in locale_dirs(&i18n_root) {
        let keys = read_keys(&i18n_root, &locale);
        let missing: Vec<_> = fallback.difference(&keys).cloned().collect();
        let extra: Vec<_> = keys.difference(&fallback).cloned().collect();
        if !missing.is_empty() {
            report.push_str(&format!("  {locale} missing: {}\n", missing.join(", ")));
        }
        if !extra.is_empty() {
            report.push_str(&format!("  {locale} unknown: {}\n", extra.join(", ")));
        }
    }

    assert!(report.is_empty(), "locale drift relative to en-US:\n{report}");
}
