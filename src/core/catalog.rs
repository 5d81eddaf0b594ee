//! Merges the base and extended icon tables into one immutable catalog.

use std::collections::HashMap;

use super::normalize::normalize_key;
use super::tables::REQUIRED_ICONS;

/// Lower-case icon keys mapped to resource locators.
///
/// Keeps the explicit insertion order: base keys as declared, followed by the
/// extended keys that were actually inserted.
#[derive(Debug, Clone, Default)]
pub struct IconCatalog {
    locators: HashMap<String, String>,
    order: Vec<String>,
}

impl IconCatalog {
    /// Returns the stored key when `key` is present, compared exactly.
    pub fn get_key(&self, key: &str) -> Option<&str> {
        self.locators.get_key_value(key).map(|(k, _)| k.as_str())
    }

    pub fn locator(&self, key: &str) -> Option<&str> {
        self.locators.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.locators.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Inserts when absent. An existing key keeps its position; `overwrite`
    /// decides whether the new locator replaces the old one.
    fn insert(&mut self, key: String, locator: String, overwrite: bool) -> bool {
        if let Some(existing) = self.locators.get_mut(&key) {
            if overwrite {
                *existing = locator;
            }
            return false;
        }
        self.order.push(key.clone());
        self.locators.insert(key, locator);
        true
    }
}

/// Normalized spellings mapped to the first catalog key seen in that bucket.
#[derive(Debug, Clone, Default)]
pub struct NormalizedIndex {
    canonical: HashMap<String, String>,
}

impl NormalizedIndex {
    /// Looks up an already normalized key.
    pub fn get(&self, normalized: &str) -> Option<&str> {
        self.canonical.get(normalized).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }

    fn from_catalog(catalog: &IconCatalog) -> Self {
        let mut canonical: HashMap<String, String> = HashMap::with_capacity(catalog.len());
        for key in catalog.keys() {
            let normalized = normalize_key(key);
            if let Some(winner) = canonical.get(&normalized) {
                tracing::debug!(
                    "Normalized key '{}' already maps to '{}', ignoring '{}'",
                    normalized,
                    winner,
                    key
                );
                continue;
            }
            canonical.insert(normalized, key.to_string());
        }
        Self { canonical }
    }
}

/// Collects the two ordered icon tables and builds the catalog once.
///
/// Calling [`CatalogBuilder::extended`] more than once appends; this is how
/// user icons from the config are layered after the bundled extended table.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    base: Vec<(String, String)>,
    extended: Vec<(String, String)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, locator) in entries {
            self.base.push((key.as_ref().to_string(), locator.into()));
        }
        self
    }

    pub fn extended<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, locator) in entries {
            self.extended.push((key.as_ref().to_string(), locator.into()));
        }
        self
    }

    /// Builds the catalog and its normalized index.
    ///
    /// Base entries win over extended ones. A key repeated within the base
    /// table keeps its first position and takes the later locator.
    pub fn build(self) -> (IconCatalog, NormalizedIndex) {
        let mut catalog = IconCatalog::default();

        for (key, locator) in self.base {
            catalog.insert(key.to_lowercase(), locator, true);
        }

        let mut shadowed = 0usize;
        for (key, locator) in self.extended {
            let key = key.to_lowercase();
            if !catalog.insert(key.clone(), locator, false) {
                tracing::trace!("Extended icon '{}' shadowed by an earlier entry", key);
                shadowed += 1;
            }
        }

        let index = NormalizedIndex::from_catalog(&catalog);

        for required in REQUIRED_ICONS {
            if !catalog.contains(required) {
                tracing::warn!("Icon catalog has no entry for fallback icon '{}'", required);
            }
        }

        tracing::debug!(
            "Built icon catalog with {} keys ({} extended entries shadowed), {} normalized buckets",
            catalog.len(),
            shadowed,
            index.len()
        );

        (catalog, index)
    }
}
