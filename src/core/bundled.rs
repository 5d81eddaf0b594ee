//! Icon tables shipped with the crate.
//!
//! The base table follows the Adwaita theme naming. The extended table carries
//! application icons, including the fallback keys the engine may return
//! literally. Order matters: it decides normalized-key collisions.

macro_rules! adwaita {
    ($($key:literal),* $(,)?) => {
        &[$(($key, concat!("adwaita/scalable/", $key, ".svg"))),*]
    };
}

macro_rules! extended {
    ($($key:literal),* $(,)?) => {
        &[$(($key, concat!("extended/", $key, ".svg"))),*]
    };
}

/// Base catalog. Wins every key conflict with [`EXTENDED_ICONS`].
pub const BASE_ICONS: &[(&str, &str)] = adwaita![
    // Places
    "folder",
    "folder-documents",
    "folder-download",
    "folder-music",
    "folder-pictures",
    "folder-videos",
    "folder-templates",
    "folder-publicshare",
    "folder-remote",
    "user-desktop",
    "user-home",
    "user-trash",
    "go-home",
    // Devices
    "drive-harddisk",
    "drive-removable-media",
    "media-optical",
    // Mime types
    "application-pdf",
    "application-x-executable",
    "application-x-addon",
    "audio-x-generic",
    "font-x-generic",
    "image-x-generic",
    "image-svg+xml",
    "package-x-generic",
    "text-html",
    "text-x-generic",
    "text-x-script",
    "video-x-generic",
    "x-office-document",
    "x-office-spreadsheet",
    "x-office-presentation",
];

/// Extended catalog, merged after [`BASE_ICONS`].
pub const EXTENDED_ICONS: &[(&str, &str)] = extended![
    "folder-adw",
    "folder-code",
    "Folder-Git",
    "folder-download",
    "hard-drive",
    "application-json",
    "application-x-yaml",
    "application-toml",
    "text-markdown",
];
