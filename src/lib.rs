// Declare all modules as public so they can be used by the binary and tests.
pub mod app;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::core::{
    default_engine, icon_for_category, icon_for_category_name, CatalogBuilder, CoreError, Entry,
    FileCategory, IconEngine,
};
pub use crate::utils::file_detection::classify_file;
