//! Static lookup tables that drive icon and category decisions.
//!
//! These entries are observable behavior: changing one changes which icon or
//! category a given entry receives. All tables are ordered slices so that
//! lookups and catalog construction never depend on hash-map ordering.

/// Icon for directories without a more specific icon, and for absent entries.
pub const DEFAULT_DIRECTORY_ICON: &str = "folder-adw";

/// Icon returned when no tier of the file decision chain resolves.
pub const FALLBACK_FILE_ICON: &str = "text-x-generic";

/// Icon for drive and remote roots.
pub const DRIVE_ICON: &str = "hard-drive";

/// Keys the render layer must have registered.
///
/// The engine only ever returns a catalog key or one of these literals.
pub const REQUIRED_ICONS: &[&str] = &[
    DEFAULT_DIRECTORY_ICON,
    FALLBACK_FILE_ICON,
    DRIVE_ICON,
    "go-home",
    "image-x-generic",
    "video-x-generic",
    "audio-x-generic",
    "application-pdf",
    "package-x-generic",
    "folder-videos",
    "folder-code",
    "folder-download",
];

/// Directory names that map to an icon when `folder-<name>` does not resolve.
pub const FOLDER_ALIASES: &[(&str, &str)] = &[
    ("movies", "folder-videos"),
    ("node_modules", "folder-code"),
    ("downloads", "folder-download"),
    ("home", "go-home"),
];

/// Tier 1 of the file decision chain.
pub const EXTENSION_ICONS: &[(&str, &str)] = &[
    // Documents
    ("pdf", "application-pdf"),
    ("doc", "x-office-document"),
    ("docx", "x-office-document"),
    ("odt", "x-office-document"),
    ("rtf", "x-office-document"),
    ("xls", "x-office-spreadsheet"),
    ("xlsx", "x-office-spreadsheet"),
    ("ods", "x-office-spreadsheet"),
    ("csv", "x-office-spreadsheet"),
    ("ppt", "x-office-presentation"),
    ("pptx", "x-office-presentation"),
    ("odp", "x-office-presentation"),
    // Archives and packages
    ("zip", "package-x-generic"),
    ("rar", "package-x-generic"),
    ("7z", "package-x-generic"),
    ("tar", "package-x-generic"),
    ("gz", "package-x-generic"),
    ("bz2", "package-x-generic"),
    ("xz", "package-x-generic"),
    ("tgz", "package-x-generic"),
    ("deb", "package-x-generic"),
    ("rpm", "package-x-generic"),
    ("jar", "package-x-generic"),
    // Disk and container images
    ("iso", "media-optical"),
    ("img", "media-optical"),
    ("dmg", "media-optical"),
    ("qcow2", "drive-harddisk"),
    ("vdi", "drive-harddisk"),
    ("vmdk", "drive-harddisk"),
    ("vhdx", "drive-harddisk"),
    // Executables
    ("exe", "application-x-executable"),
    ("msi", "application-x-executable"),
    ("appimage", "application-x-executable"),
    ("bin", "application-x-executable"),
    // Media
    ("png", "image-x-generic"),
    ("jpg", "image-x-generic"),
    ("jpeg", "image-x-generic"),
    ("gif", "image-x-generic"),
    ("bmp", "image-x-generic"),
    ("webp", "image-x-generic"),
    ("svg", "image/svg+xml"),
    ("mp3", "audio-x-generic"),
    ("flac", "audio-x-generic"),
    ("wav", "audio-x-generic"),
    ("ogg", "audio-x-generic"),
    ("mp4", "video-x-generic"),
    ("mkv", "video-x-generic"),
    ("webm", "video-x-generic"),
    ("mov", "video-x-generic"),
    ("avi", "video-x-generic"),
    // Source and markup
    ("html", "text-html"),
    ("htm", "text-html"),
    ("sh", "text-x-script"),
    ("bash", "text-x-script"),
    ("py", "text-x-script"),
    ("js", "text-x-script"),
    ("rs", "text-x-script"),
    ("json", "application/json"),
    // Fonts
    ("ttf", "font-x-generic"),
    ("otf", "font-x-generic"),
    ("woff", "font-x-generic"),
    ("woff2", "font-x-generic"),
];

/// Tier 2 of the file decision chain, keyed by MIME essence.
pub const MIME_ICONS: &[(&str, &str)] = &[
    ("application/pdf", "application-pdf"),
    ("application/zip", "package-x-generic"),
    ("application/gzip", "package-x-generic"),
    ("application/x-tar", "package-x-generic"),
    ("application/x-7z-compressed", "package-x-generic"),
    ("application/vnd.rar", "package-x-generic"),
    ("application/x-bzip2", "package-x-generic"),
    ("application/x-xz", "package-x-generic"),
    ("application/java-archive", "package-x-generic"),
    ("application/x-iso9660-image", "media-optical"),
    ("application/x-executable", "application-x-executable"),
    ("application/x-sharedlib", "application-x-executable"),
    ("application/x-msdownload", "application-x-executable"),
    ("application/x-sh", "text-x-script"),
    ("application/x-shellscript", "text-x-script"),
    ("application/javascript", "text-x-script"),
    ("application/msword", "x-office-document"),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "x-office-document",
    ),
    (
        "application/vnd.oasis.opendocument.text",
        "x-office-document",
    ),
    ("application/vnd.ms-excel", "x-office-spreadsheet"),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "x-office-spreadsheet",
    ),
    (
        "application/vnd.oasis.opendocument.spreadsheet",
        "x-office-spreadsheet",
    ),
    ("application/vnd.ms-powerpoint", "x-office-presentation"),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "x-office-presentation",
    ),
    ("text/html", "text-html"),
    ("text/csv", "x-office-spreadsheet"),
];

/// Finds the value for `key` in an ordered table.
pub fn lookup(
    table: &'static [(&'static str, &'static str)],
    key: &str,
) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique_keys(table: &[(&str, &str)]) {
        let mut seen = HashSet::new();
        for (key, _) in table {
            assert!(seen.insert(*key), "duplicate table key: {key}");
        }
    }

    #[test]
    fn test_tables_have_unique_keys() {
        assert_unique_keys(FOLDER_ALIASES);
        assert_unique_keys(EXTENSION_ICONS);
        assert_unique_keys(MIME_ICONS);
    }

    #[test]
    fn test_plain_text_has_no_extension_icon() {
        assert_eq!(lookup(EXTENSION_ICONS, "txt"), None);
        assert_eq!(lookup(EXTENSION_ICONS, "md"), None);
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(lookup(FOLDER_ALIASES, "movies"), Some("folder-videos"));
        assert_eq!(lookup(FOLDER_ALIASES, "Movies"), None);
        assert_eq!(
            lookup(MIME_ICONS, "application/pdf"),
            Some("application-pdf")
        );
    }
}
