use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::ResultKind;
use crate::i18n::FALLBACK_LANGUAGE;

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "flirtquiz-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Any line of the form `<id> =` counts;
/// comments, terms (`-` prefix) and continuation lines are skipped.
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

/// Literal first arguments of every `t!("...")` call under `src_root`.
///
/// Keys built at runtime (archetype copy) are not visible here; see
/// [`runtime_keys`].
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let mut found = BTreeSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
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
            // Skip `format!("…` and friends; only a bare `t!` (or `crate::t!`) counts.
            let standalone = content[..pos]
                .chars()
                .next_back()
                .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
            if !standalone {
                continue;
            }
            let rest = &content[pos + needle.len()..];
            if let Some((key, _)) = rest.split_once('"') {
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }

    found
}

/// Keys the result catalogue composes at runtime.
fn runtime_keys() -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    for kind in ResultKind::ARCHETYPES {
        for field in ["title", "subtitle", "description", "advice-1", "advice-2", "advice-3"] {
            keys.insert(format!("result-{}-{field}", kind.slug()));
        }
    }
    for field in ["title", "subtitle", "description", "advice-1"] {
        keys.insert(format!("result-unknown-{field}"));
    }
    keys
}

fn locale_dirs(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|entry| entry.path().is_dir())
                .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
                .filter(|name| name.contains('-'))
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join(FALLBACK_LANGUAGE).join(FTL_FILENAME);
    let fallback_content = fs::read_to_string(&fallback_file)
        .unwrap_or_else(|err| panic!("Failed to read fallback FTL {fallback_file:?}: {err}"));
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {fallback_file:?}"
    );

    // Every referenced key (literal or runtime-built) must exist in the fallback.
    let mut referenced = referenced_keys(&crate_root.join("src"));
    referenced.extend(runtime_keys());
    let missing_in_fallback: Vec<_> = referenced.difference(&fallback_keys).cloned().collect();
    assert!(
        missing_in_fallback.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing_in_fallback.len(),
        missing_in_fallback.join("\n")
    );

    // Every locale must cover the fallback.
    let mut per_locale_missing: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for locale in locale_dirs(&i18n_root) {
        let path = i18n_root.join(&locale).join(FTL_FILENAME);
        assert!(path.exists(), "Locale folder {locale:?} missing expected file {path:?}");
        let keys = parse_ftl_keys(&fs::read_to_string(&path).unwrap_or_default());
        let missing: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        if !missing.is_empty() {
            per_locale_missing.insert(locale, missing);
        }
    }

    if !per_locale_missing.is_empty() {
        let mut report = String::from("Locales with missing translations relative to fallback:\n");
        for (locale, missing) in &per_locale_missing {
            report.push_str(&format!("  {locale} ({} missing)\n", missing.len()));
            for key in missing {
                report.push_str(&format!("    {key}\n"));
            }
        }
        panic!("{report}");
    }

    // Unused fallback keys are reported, not failed.
    let unused: Vec<_> = fallback_keys.difference(&referenced).cloned().collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: {} fallback keys unused: {}", unused.len(), unused.join(", "));
    }
}

#[test]
fn parser_skips_comments_and_continuations() {
    let keys = parse_ftl_keys("# note\nshare-text =\n    first line\n-brand = X\nresult-caption = Hi\n");
    assert_eq!(
        keys.into_iter().collect::<Vec<_>>(),
        vec!["result-caption".to_string(), "share-text".to_string()]
    );
}
