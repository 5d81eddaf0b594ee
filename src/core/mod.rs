pub mod bundled;
pub mod catalog;
pub mod category;
pub mod error;
pub mod normalize;
pub mod resolver;
pub mod tables;

use serde::{Deserialize, Serialize};

/// The minimal descriptor of a filesystem object the engine decides on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub is_directory: bool,
    pub mime_type: Option<String>,
}

impl Entry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
            mime_type: None,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
            mime_type: None,
        }
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

pub use catalog::{CatalogBuilder, IconCatalog, NormalizedIndex};
pub use category::{icon_for_category, icon_for_category_name, FileCategory};
pub use error::CoreError;
pub use normalize::normalize_key;
pub use resolver::{default_engine, IconEngine};
