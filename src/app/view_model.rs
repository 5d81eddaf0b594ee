//! Prepares listed entries for display.
//!
//! Each row carries the icon key, its locator and the category so that a
//! renderer never needs to consult the engine itself.

use rayon::prelude::*;
use serde::Serialize;
use std::path::Path;

use super::listing::ListedEntry;
use crate::core::tables::DRIVE_ICON;
use crate::core::{Entry, FileCategory, IconEngine};

const ICON_WIDTH: usize = 26;
const CATEGORY_WIDTH: usize = 9;

/// A serializable representation of a single listed entry.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EntryView {
    pub name: String,
    pub path: String,
    pub depth: usize,
    pub is_directory: bool,
    pub mime_type: Option<String>,
    pub icon: String,
    pub locator: Option<String>,
    pub category: FileCategory,
}

/// One listing root and its rows.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RootView {
    pub root: String,
    pub icon: String,
    pub entries: Vec<EntryView>,
}

/// Projects listed entries through the engine, keeping the listing order.
///
/// With `use_category_icons` the row icon is the category default instead of
/// the entry-specific decision.
pub fn build_entry_views(
    engine: &IconEngine,
    listed: &[ListedEntry],
    use_category_icons: bool,
) -> Vec<EntryView> {
    listed
        .par_iter()
        .map(|item| {
            let (entry_icon, category) = engine.describe(&item.entry);
            let icon = if use_category_icons {
                engine.icon_for_category(category)
            } else {
                entry_icon
            };
            EntryView {
                name: item.entry.name.clone(),
                path: item.path.to_string(),
                depth: item.depth,
                is_directory: item.entry.is_directory,
                mime_type: item.entry.mime_type.clone(),
                icon: icon.to_string(),
                locator: engine.locator(icon).map(str::to_string),
                category,
            }
        })
        .collect()
}

/// Icon for a listing root. Roots without a name, such as `/`, are drives.
pub fn root_icon<'a>(engine: &'a IconEngine, root: &Path) -> &'a str {
    match root.file_name().and_then(|name| name.to_str()) {
        Some(name) => engine.resolve_icon_for_entry(Some(&Entry::directory(name))),
        None => engine.lookup_icon_by_name(Some(DRIVE_ICON), "drive-harddisk"),
    }
}

pub fn build_root_view(
    engine: &IconEngine,
    root: &Path,
    listed: &[ListedEntry],
    use_category_icons: bool,
) -> RootView {
    RootView {
        root: root.display().to_string(),
        icon: root_icon(engine, root).to_string(),
        entries: build_entry_views(engine, listed, use_category_icons),
    }
}

/// Renders rows as aligned text, indenting nested entries.
pub fn render_text(views: &[EntryView]) -> String {
    let mut result = String::new();
    for view in views {
        let indent = "  ".repeat(view.depth.saturating_sub(1));
        let suffix = if view.is_directory { "/" } else { "" };
        let (icon, category, name) = (&view.icon, view.category.as_str(), &view.name);
        result.push_str(&format!(
            "{icon:<ICON_WIDTH$} {category:<CATEGORY_WIDTH$} {indent}{name}{suffix}\n"
        ));
    }
    result
}

/// Renders a root header followed by its rows.
pub fn render_root_text(root: &RootView) -> String {
    let rows = render_text(&root.entries);
    format!("{} {}\n{rows}", root.icon, root.root)
}

pub fn render_json(roots: &[RootView]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::listing::entry_for_path;
    use crate::core::default_engine;
    use camino::Utf8PathBuf;

    fn listed(path: &str, depth: usize, is_directory: bool) -> ListedEntry {
        let path = Utf8PathBuf::from(path);
        ListedEntry {
            entry: entry_for_path(&path, is_directory),
            path,
            depth,
        }
    }

    fn sample_listing() -> Vec<ListedEntry> {
        vec![
            listed("/project/Downloads", 1, true),
            listed("/project/Downloads/setup.exe", 2, false),
            listed("/project/docs", 1, true),
            listed("/project/docs/report.pdf", 2, false),
            listed("/project/archive.tar.gz", 1, false),
            listed("/project/notes.txt", 1, false),
        ]
    }

    #[test]
    fn test_views_follow_listing_order() {
        let views = build_entry_views(default_engine(), &sample_listing(), false);
        let names: Vec<_> = views.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Downloads",
                "setup.exe",
                "docs",
                "report.pdf",
                "archive.tar.gz",
                "notes.txt",
            ]
        );
    }

    #[test]
    fn test_views_carry_icon_locator_and_category() {
        let views = build_entry_views(default_engine(), &sample_listing(), false);

        let report = &views[3];
        assert_eq!(report.icon, "application-pdf");
        assert_eq!(report.category, FileCategory::Pdf);
        assert_eq!(
            report.locator.as_deref(),
            Some("adwaita/scalable/application-pdf.svg")
        );

        let downloads = &views[0];
        assert_eq!(downloads.icon, "folder-download");
        assert_eq!(downloads.category, FileCategory::Directory);
    }

    #[test]
    fn test_category_icons_replace_entry_icons() {
        let views = build_entry_views(default_engine(), &sample_listing(), true);
        assert_eq!(views[0].icon, "folder-adw");
        assert_eq!(views[1].icon, "package-x-generic");
        assert_eq!(views[5].icon, "text-x-generic");
    }

    #[test]
    fn test_root_icon() {
        let engine = default_engine();
        let music = Path::new("/home/user/Music");
        assert_eq!(root_icon(engine, music), "folder-music");
        assert_eq!(root_icon(engine, Path::new("/")), "hard-drive");
    }

    #[test]
    fn test_render_text() {
        let root = build_root_view(
            default_engine(),
            Path::new("/project"),
            &sample_listing(),
            false,
        );
        insta::assert_snapshot!(render_root_text(&root), @r"
        folder-adw /project
        folder-download            directory Downloads/
        application-x-executable   binary      setup.exe
        folder-adw                 directory docs/
        application-pdf            pdf         report.pdf
        package-x-generic          binary    archive.tar.gz
        text-x-generic             text      notes.txt
        ");
    }

    #[test]
    fn test_render_json_uses_lowercase_categories() {
        let root = build_root_view(
            default_engine(),
            Path::new("/project"),
            &sample_listing(),
            false,
        );
        let json = render_json(&[root]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["root"], "/project");
        assert_eq!(value[0]["entries"][4]["category"], "binary");
        assert_eq!(value[0]["entries"][4]["icon"], "package-x-generic");
    }
}
