pub mod settings;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::{CatalogBuilder, IconEngine};

/// One row of an icon table: an icon key and where its resource lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IconEntry {
    pub key: String,
    pub locator: String,
}

impl IconEntry {
    pub fn new(key: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            locator: locator.into(),
        }
    }

    /// Key and locator as a catalog table row.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.key, &self.locator)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Icons appended to the extended catalog after the bundled entries.
    pub extra_icons: Vec<IconEntry>,
    /// Optional JSON icon table merged before `extra_icons`.
    pub icon_table_file: Option<PathBuf>,
    /// Show the category icon instead of the entry-specific icon.
    pub use_category_icons: bool,
    pub include_hidden: bool,
    pub respect_ignore_files: bool,
    pub max_depth: Option<usize>,
    pub directories_first: bool,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        settings::load_config(None)
    }

    /// Builds the engine for this configuration.
    ///
    /// Extended entries are layered as: bundled table, icon table file,
    /// `extra_icons`. The bundled base table always wins conflicts.
    pub fn build_engine(&self) -> Result<IconEngine> {
        let mut builder: CatalogBuilder = IconEngine::bundled_builder();

        if let Some(table_path) = &self.icon_table_file {
            let table = settings::load_icon_table(table_path)?;
            tracing::info!("Loaded {} icons from {:?}", table.len(), table_path);
            builder = builder.extended(table.iter().map(IconEntry::as_pair));
        }

        builder = builder.extended(self.extra_icons.iter().map(IconEntry::as_pair));

        Ok(IconEngine::from_builder(builder))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extra_icons: Vec::new(),
            icon_table_file: None,
            use_category_icons: false,
            include_hidden: false,
            respect_ignore_files: true,
            max_depth: Some(1),
            directories_first: true,
        }
    }
}
