//! Configuration loading and representation.

use std::path::{Path, PathBuf};

/// Directory (under the project root) holding catalog files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Catalog file used when none is named.
pub const DEFAULT_CATALOG_FILE: &str = "products.json";

pub const ROOT_ENV: &str = "STOREFRONT_ROOT";
pub const DATA_DIR_ENV: &str = "STOREFRONT_DATA_DIR";
pub const CATALOG_FILE_ENV: &str = "STOREFRONT_CATALOG_FILE";

/// Where catalog files live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub project_root: PathBuf,
    pub data_dir: PathBuf,
    pub default_file: String,
}

impl LoaderConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            default_file: DEFAULT_CATALOG_FILE.to_string(),
        }
    }

    /// Read `STOREFRONT_ROOT`, `STOREFRONT_DATA_DIR` and `STOREFRONT_CATALOG_FILE`.
    ///
    /// Without `STOREFRONT_ROOT` the current directory is the project root.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let project_root = lookup(ROOT_ENV)
            .map(PathBuf::from)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."));

        let mut config = Self::new(project_root);
        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup(CATALOG_FILE_ENV).filter(|v| !v.trim().is_empty()) {
            config.default_file = file;
        }
        config
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_default_file(mut self, default_file: impl Into<String>) -> Self {
        self.default_file = default_file.into();
        self
    }

    pub fn data_path(&self) -> PathBuf {
        self.project_root.join(&self.data_dir)
    }

    /// `<project_root>/<data_dir>/<file_name>`.
    pub fn resolve(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.data_path().join(file_name)
    }
}
