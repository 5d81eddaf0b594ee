//! Canonical spelling for icon keys.

use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("static pattern compiles"));

/// Lower-cases `key` and collapses every run of characters outside `[a-z0-9]`
/// into a single hyphen.
///
/// `"Folder Open"`, `"folder_open"` and `"folder--open"` all become
/// `"folder-open"`. Leading and trailing separators are kept as a hyphen.
pub fn normalize_key(key: &str) -> String {
    let lowered = key.to_lowercase();
    NON_ALPHANUMERIC_RUN.replace_all(&lowered, "-").into_owned()
}
