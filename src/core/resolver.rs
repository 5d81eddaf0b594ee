//! Resolves names and filesystem entries to catalog icon keys.

use std::sync::LazyLock;

use super::bundled::{BASE_ICONS, EXTENDED_ICONS};
use super::catalog::{CatalogBuilder, IconCatalog, NormalizedIndex};
use super::category::{icon_for_category, FileCategory};
use super::normalize::normalize_key;
use super::tables::{self, lookup, DEFAULT_DIRECTORY_ICON, FALLBACK_FILE_ICON};
use super::Entry;
use crate::utils::file_detection::{classify_file, extension_of, raw_mime};

static DEFAULT_ENGINE: LazyLock<IconEngine> = LazyLock::new(IconEngine::bundled);

/// The engine built from the bundled catalogs, constructed on first use.
pub fn default_engine() -> &'static IconEngine {
    &DEFAULT_ENGINE
}

/// Read-only icon resolution over a catalog built once.
///
/// All lookups borrow from the engine, so one instance can be shared across
/// threads without locking.
#[derive(Debug, Clone)]
pub struct IconEngine {
    catalog: IconCatalog,
    index: NormalizedIndex,
}

impl IconEngine {
    pub fn new(catalog: IconCatalog, index: NormalizedIndex) -> Self {
        Self { catalog, index }
    }

    pub fn from_builder(builder: CatalogBuilder) -> Self {
        let (catalog, index) = builder.build();
        Self::new(catalog, index)
    }

    /// Engine over the bundled base and extended tables.
    pub fn bundled() -> Self {
        Self::from_builder(Self::bundled_builder())
    }

    /// Builder preloaded with the bundled tables, ready for more extended entries.
    pub fn bundled_builder() -> CatalogBuilder {
        CatalogBuilder::new()
            .base(BASE_ICONS.iter().copied())
            .extended(EXTENDED_ICONS.iter().copied())
    }

    pub fn catalog(&self) -> &IconCatalog {
        &self.catalog
    }

    /// Resource locator registered for `key`, compared exactly.
    pub fn locator(&self, key: &str) -> Option<&str> {
        self.catalog.locator(key)
    }

    /// Best catalog key for `name`: an exact lower-case hit, then the
    /// normalized spelling. `None` lets callers continue their own fallbacks.
    pub fn resolve_icon(&self, name: &str) -> Option<&str> {
        let lowered = name.to_lowercase();
        if let Some(key) = self.catalog.get_key(&lowered) {
            return Some(key);
        }
        self.index.get(&normalize_key(name))
    }

    /// [`IconEngine::resolve_icon`] with a caller supplied fallback.
    pub fn lookup_icon_by_name<'a>(&'a self, name: Option<&str>, fallback: &'a str) -> &'a str {
        name.and_then(|name| self.resolve_icon(name)).unwrap_or(fallback)
    }

    /// Picks the icon for a filesystem entry. Never empty.
    ///
    /// Directories try `folder-<name>` first and the alias table second.
    /// Files walk the extension table, the MIME table, the MIME string
    /// itself and finally a generic icon for the MIME top-level type.
    pub fn resolve_icon_for_entry(&self, entry: Option<&Entry>) -> &str {
        let Some(entry) = entry else {
            return DEFAULT_DIRECTORY_ICON;
        };
        if entry.is_directory {
            self.directory_icon(&entry.name)
        } else {
            self.file_icon(entry)
        }
    }

    fn directory_icon(&self, name: &str) -> &str {
        let lower_name = name.to_lowercase();

        if let Some(key) = self.resolve_icon(&format!("folder-{lower_name}")) {
            return key;
        }
        // Only reached when no catalog entry exists for the folder name itself.
        if let Some(alias) = lookup(tables::FOLDER_ALIASES, &lower_name) {
            return alias;
        }
        DEFAULT_DIRECTORY_ICON
    }

    fn file_icon(&self, entry: &Entry) -> &str {
        let extension_icon = extension_of(&entry.name)
            .and_then(|ext| lookup(tables::EXTENSION_ICONS, &ext))
            .and_then(|icon| self.resolve_icon(icon));
        if let Some(icon) = extension_icon {
            return icon;
        }

        if let Some(icon) = self.mime_icon(&raw_mime(entry.mime_type.as_deref())) {
            return icon;
        }

        tracing::trace!("No specific icon for '{}', using fallback", entry.name);
        FALLBACK_FILE_ICON
    }

    /// MIME table, then the MIME string itself, then `<top-level>-x-generic`.
    fn mime_icon(&self, mime: &str) -> Option<&str> {
        if mime.is_empty() {
            return None;
        }
        lookup(tables::MIME_ICONS, mime)
            .and_then(|icon| self.resolve_icon(icon))
            .or_else(|| self.resolve_icon(mime))
            .or_else(|| generic_icon_for_mime(mime).and_then(|icon| self.resolve_icon(&icon)))
    }

    /// Category of `entry`. Independent of the catalog.
    pub fn classify_file(&self, entry: &Entry) -> FileCategory {
        classify_file(entry)
    }

    /// Icon and category for one entry.
    pub fn describe(&self, entry: &Entry) -> (&str, FileCategory) {
        let icon = self.resolve_icon_for_entry(Some(entry));
        (icon, classify_file(entry))
    }

    /// Category icon, resolved through the catalog when possible.
    pub fn icon_for_category(&self, category: FileCategory) -> &str {
        let icon = icon_for_category(category);
        self.resolve_icon(icon).unwrap_or(icon)
    }

    /// Fallback icons the catalog cannot serve.
    pub fn missing_required_icons(&self) -> Vec<&'static str> {
        tables::REQUIRED_ICONS
            .iter()
            .copied()
            .filter(|key| !self.catalog.contains(key))
            .collect()
    }
}

impl Default for IconEngine {
    fn default() -> Self {
        Self::bundled()
    }
}

/// `image/png` becomes `image-x-generic`; anything without a top-level type yields `None`.
fn generic_icon_for_mime(mime: &str) -> Option<String> {
    let top_level = mime.split('/').next().filter(|top| !top.is_empty())?;
    Some(format!("{top_level}-x-generic"))
}
