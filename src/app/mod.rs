pub mod listing;
pub mod view_model;

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::core::IconEngine;
use listing::ListingOptions;
use view_model::RootView;

/// Lists every root and projects it through the engine.
///
/// Fails on the first root that cannot be listed.
pub fn list_roots(
    engine: &IconEngine,
    config: &AppConfig,
    roots: &[PathBuf],
) -> Result<Vec<RootView>> {
    let options = ListingOptions::from(config);

    roots
        .iter()
        .map(|root| {
            let listed = listing::list_directory(root, &options)
                .with_context(|| format!("Failed to list {}", root.display()))?;
            // Canonical roots give `.` and `..` a real name for the header icon.
            let display_root = root.canonicalize().unwrap_or_else(|_| root.clone());
            Ok(view_model::build_root_view(
                engine,
                &display_root,
                &listed,
                config.use_category_icons,
            ))
        })
        .collect()
}
