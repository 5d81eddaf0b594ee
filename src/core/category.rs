//! Semantic file categories and their default icons.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::CoreError;
use super::tables::{DEFAULT_DIRECTORY_ICON, FALLBACK_FILE_ICON};

/// The closed set of categories an entry can be classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCategory {
    Directory,
    Image,
    Video,
    Audio,
    Pdf,
    Text,
    Binary,
}

impl FileCategory {
    pub const ALL: [FileCategory; 7] = [
        FileCategory::Directory,
        FileCategory::Image,
        FileCategory::Video,
        FileCategory::Audio,
        FileCategory::Pdf,
        FileCategory::Text,
        FileCategory::Binary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FileCategory::Directory => "directory",
            FileCategory::Image => "image",
            FileCategory::Video => "video",
            FileCategory::Audio => "audio",
            FileCategory::Pdf => "pdf",
            FileCategory::Text => "text",
            FileCategory::Binary => "binary",
        }
    }
}

impl fmt::Display for FileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// Default icon for a category, used when no entry-specific icon is wanted.
pub fn icon_for_category(category: FileCategory) -> &'static str {
    match category {
        FileCategory::Image => "image-x-generic",
        FileCategory::Video => "video-x-generic",
        FileCategory::Audio => "audio-x-generic",
        FileCategory::Pdf => "application-pdf",
        FileCategory::Text => FALLBACK_FILE_ICON,
        FileCategory::Binary => "package-x-generic",
        FileCategory::Directory => DEFAULT_DIRECTORY_ICON,
    }
}

/// Like [`icon_for_category`] for a category given by name.
///
/// Names outside the closed set map to `text-x-generic`.
pub fn icon_for_category_name(name: &str) -> &'static str {
    match name.parse::<FileCategory>() {
        Ok(category) => icon_for_category(category),
        Err(e) => {
            tracing::debug!("{}, using '{}'", e, FALLBACK_FILE_ICON);
            FALLBACK_FILE_ICON
        }
    }
}
