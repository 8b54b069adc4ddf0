use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Ensures every non‑fallback locale provides *at least* the keys present
/// in the fallback (en-US) `frontline-ui.ftl`.
///
/// Lightweight parser:
/// - Ignores comment lines starting with `#`
/// - Treats any line of the form `key =` or `key=` as a message definition
/// - Skips blank / attribute lines
///
/// If you add a new locale, register it in `LOCALES` below.
const EN_US: &str = include_str!("../i18n/en-US/frontline-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/frontline-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES)];

/// `fl!` resolves bundles at compile time through this file; the domain must
/// name the `.ftl` files above or every `t!` call site stops compiling.
const I18N_TOML: &str = include_str!("../i18n.toml");

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<&String> = fallback_keys.iter().filter(|k| !keys.contains(*k)).collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

#[test]
fn fallback_labels_match_entry_table() {
    let messages = extract_messages(EN_US);
    for entry in ui::nav::NAV_ENTRIES.iter().chain([&ui::nav::CONTACT_ENTRY]) {
        assert_eq!(
            messages.get(entry.message_id).map(String::as_str),
            Some(entry.label),
            "en-US value for `{}` drifted from the entry table",
            entry.message_id
        );
    }
}

#[test]
fn compile_time_domain_matches_bundle_files() {
    let domain = I18N_TOML
        .lines()
        .filter_map(|line| line.trim().strip_prefix("domain"))
        .filter_map(|rest| rest.trim().strip_prefix('='))
        .map(|value| value.trim().trim_matches('"'))
        .next();
    assert_eq!(
        domain,
        Some("frontline-ui"),
        "i18n.toml must pin the Fluent domain to the bundle file stem"
    );
}

fn message_key(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let (left, right) = line.split_once('=')?;
    let key = left.trim();
    if key.is_empty() || key.contains(' ') || key.contains('\t') || key.starts_with('[') {
        return None;
    }
    Some((key, right.trim()))
}

fn extract_keys(src: &str) -> HashSet<String> {
    src.lines()
        .filter_map(message_key)
        .map(|(k, _)| k.to_string())
        .collect()
}

fn extract_messages(src: &str) -> std::collections::HashMap<String, String> {
    src.lines()
        .filter_map(message_key)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    for (key, _) in src.lines().filter_map(message_key) {
        if !seen.insert(key) {
            dups.insert(key);
        }
    }
    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
