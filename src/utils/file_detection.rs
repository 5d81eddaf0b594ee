//! Name and MIME based file classification.
//!
//! Nothing in here touches the file system. Categories are derived from the
//! entry name and the MIME type the caller supplied.

use crate::core::{Entry, FileCategory};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico"];

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "mov", "avi", "mkv"];

const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "flac", "aac", "m4a"];

#[rustfmt::skip]
const BINARY_EXTENSIONS: &[&str] = &[
    "exe", "dll", "so", "dylib", "bin", "app",
    "zip", "rar", "7z", "tar", "gz", "bz2", "xz", "tgz",
    "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods",
    "db", "sqlite", "mdb",
    "psd", "ai", "indd", "raw", "cr2", "nef",
    "o", "a", "lib", "class", "pyc", "jar",
    "img", "iso", "dmg", "qcow", "qcow2", "vdi", "vmdk", "vpc", "vhdx",
];

/// Lower-cased text after the last `.` of `name`.
///
/// Returns `None` when there is no dot or nothing follows the last one.
/// Only the final segment counts, so `archive.tar.gz` yields `gz` and a
/// dotfile such as `.bashrc` yields `bashrc`.
pub fn extension_of(name: &str) -> Option<String> {
    let (_, extension) = name.rsplit_once('.')?;
    if extension.is_empty() {
        return None;
    }
    Some(extension.to_lowercase())
}

/// MIME essence: the part before any `;` parameters, trimmed and lower-cased.
///
/// An absent MIME type yields an empty string.
pub fn raw_mime(mime_type: Option<&str>) -> String {
    mime_type
        .and_then(|mime| mime.split(';').next())
        .map(|essence| essence.trim().to_lowercase())
        .unwrap_or_default()
}

/// Assigns one of the fixed categories to `entry`.
///
/// MIME checks run first against the type exactly as supplied, then the
/// extension lists, then the binary list. Anything left over is text.
pub fn classify_file(entry: &Entry) -> FileCategory {
    if entry.is_directory {
        return FileCategory::Directory;
    }

    if let Some(mime) = entry.mime_type.as_deref() {
        if mime.starts_with("image/") {
            return FileCategory::Image;
        }
        if mime.starts_with("video/") {
            return FileCategory::Video;
        }
        if mime.starts_with("audio/") {
            return FileCategory::Audio;
        }
        if mime == "application/pdf" {
            return FileCategory::Pdf;
        }
        if mime.starts_with("text/") {
            return FileCategory::Text;
        }
    }

    let Some(extension) = extension_of(&entry.name) else {
        return FileCategory::Text;
    };
    let extension = extension.as_str();

    if IMAGE_EXTENSIONS.contains(&extension) {
        FileCategory::Image
    } else if VIDEO_EXTENSIONS.contains(&extension) {
        FileCategory::Video
    } else if AUDIO_EXTENSIONS.contains(&extension) {
        FileCategory::Audio
    } else if extension == "pdf" {
        FileCategory::Pdf
    } else if BINARY_EXTENSIONS.contains(&extension) {
        FileCategory::Binary
    } else {
        FileCategory::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_uses_last_segment_only() {
        assert_eq!(extension_of("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(extension_of("Photo.JPG").as_deref(), Some("jpg"));
        assert_eq!(extension_of(".bashrc").as_deref(), Some("bashrc"));
        assert_eq!(extension_of("Makefile"), None);
        assert_eq!(extension_of("trailing."), None);
        assert_eq!(extension_of(""), None);
    }

    #[test]
    fn test_raw_mime_strips_parameters() {
        assert_eq!(raw_mime(Some("text/plain; charset=utf-8")), "text/plain");
        assert_eq!(raw_mime(Some("  Application/JSON ")), "application/json");
        assert_eq!(raw_mime(Some("")), "");
        assert_eq!(raw_mime(None), "");
    }

    #[test]
    fn test_directories_win_over_everything() {
        let entry = Entry::directory("photos.png");
        assert_eq!(classify_file(&entry), FileCategory::Directory);
    }

    #[test]
    fn test_mime_checks_precede_extension() {
        assert_eq!(
            classify_file(&Entry::file("clip.zip").with_mime_type("video/mp4")),
            FileCategory::Video
        );
        assert_eq!(
            classify_file(&Entry::file("scan.bin").with_mime_type("application/pdf")),
            FileCategory::Pdf
        );
        assert_eq!(
            classify_file(&Entry::file("track.exe").with_mime_type("audio/mpeg")),
            FileCategory::Audio
        );
        assert_eq!(
            classify_file(&Entry::file("page.zip").with_mime_type("text/html")),
            FileCategory::Text
        );
    }

    #[test]
    fn test_pdf_mime_must_match_exactly() {
        // Parameters defeat the equality check, the extension still decides.
        let entry = Entry::file("report.zip").with_mime_type("application/pdf; version=1.7");
        assert_eq!(classify_file(&entry), FileCategory::Binary);
    }

    #[test]
    fn test_extension_lists() {
        assert_eq!(classify_file(&Entry::file("a.SVG")), FileCategory::Image);
        assert_eq!(classify_file(&Entry::file("a.ogg")), FileCategory::Video);
        assert_eq!(classify_file(&Entry::file("a.m4a")), FileCategory::Audio);
        assert_eq!(classify_file(&Entry::file("a.pdf")), FileCategory::Pdf);
        assert_eq!(
            classify_file(&Entry::file("disk.qcow2")),
            FileCategory::Binary
        );
        assert_eq!(
            classify_file(&Entry::file("archive.zip")),
            FileCategory::Binary
        );
    }

    #[test]
    fn test_unknown_files_default_to_text() {
        assert_eq!(classify_file(&Entry::file("notes.txt")), FileCategory::Text);
        assert_eq!(classify_file(&Entry::file("Makefile")), FileCategory::Text);
        assert_eq!(
            classify_file(&Entry::file("blob").with_mime_type("application/octet-stream")),
            FileCategory::Text
        );
    }
}
