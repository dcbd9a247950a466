use std::collections::{BTreeSet, HashSet};

/// Translation completeness test.
/// Every non-fallback locale must define at least the keys of the fallback
/// (en-US) `startup-metrics-ui.ftl`, and no file may define a key twice.
///
/// Lightweight parser:
/// - ignores blank lines and comments (`#`, `##`)
/// - treats `key =` lines as message definitions
/// - skips attribute (`.attr`) and continuation lines
///
/// To add a locale:
/// 1. Create `ui/i18n/<locale>/startup-metrics-ui.ftl`
/// 2. Copy all keys from `en-US/startup-metrics-ui.ftl`
/// 3. Register it in `LOCALES` below.
const EN_US: &str = include_str!("../i18n/en-US/startup-metrics-ui.ftl");
const ES_ES: &str = include_str!("../i18n/es-ES/startup-metrics-ui.ftl");

const LOCALES: &[(&str, &str)] = &[("es-ES", ES_ES)];

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);
    assert!(!fallback_keys.is_empty(), "Fallback (en-US) contains no keys.");
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
fn locales_define_no_extra_keys() {
    let fallback_keys = extract_keys(EN_US);
    for (locale, src) in LOCALES {
        let extra: BTreeSet<String> = extract_keys(src)
            .into_iter()
            .filter(|k| !fallback_keys.contains(k))
            .collect();
        assert!(extra.is_empty(), "Locale {locale} defines keys unknown to en-US: {extra:?}");
    }
}

/// Message keys of a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    src.lines().filter_map(message_key).map(str::to_string).collect()
}

fn message_key(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
        return None;
    }
    let (left, _) = line.split_once('=')?;
    let key = left.trim();
    let valid = !key.is_empty()
        && !key.contains(char::is_whitespace)
        && !key.starts_with('[')
        && !key.starts_with('@');
    valid.then_some(key)
}

fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for (idx, line) in src.lines().enumerate() {
        if let Some(key) = message_key(line) {
            if !seen.insert(key) {
                dups.insert(format!("{key}  (line {})", idx + 1));
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
