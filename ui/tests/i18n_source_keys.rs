use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Canonical FTL file name per locale.
const FTL_FILENAME: &str = "startup-metrics-ui.ftl";

/// Message IDs defined in a Fluent file. Terms (`-term`) and comments are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Every `t!("...")` literal under `src/`. Only direct literal first arguments
/// are found; `fl!` calls and macro indirection are not.
fn source_keys(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                stack.extend(read_dir.flatten().map(|entry| entry.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (pos, needle) in content.match_indices("t!(\"") {
            let rest = &content[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

fn fallback_keys(crate_root: &Path) -> BTreeSet<String> {
    let path = crate_root.join("i18n").join("en-US").join(FTL_FILENAME);
    let content = fs::read_to_string(&path).expect("fallback FTL file is readable");
    parse_ftl_keys(&content)
}

#[test]
fn every_referenced_key_is_defined() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let defined = fallback_keys(&crate_root);
    let used = source_keys(&crate_root.join("src"));

    assert!(!used.is_empty(), "no t!() usages found under src/");
    let missing: Vec<_> = used.difference(&defined).cloned().collect();
    assert!(
        missing.is_empty(),
        "Keys used in source but missing from en-US/{FTL_FILENAME}:\n  {}",
        missing.join("\n  ")
    );
}

#[test]
fn every_defined_key_is_referenced() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let defined = fallback_keys(&crate_root);
    let used = source_keys(&crate_root.join("src"));

    let unused: Vec<_> = defined.difference(&used).cloned().collect();
    assert!(
        unused.is_empty(),
        "Keys defined in en-US/{FTL_FILENAME} but never used:\n  {}",
        unused.join("\n  ")
    );
}
