//! Catalog ingestion: JSON file → categories of products.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use storefront_core::DomainResult;
use storefront_products::{CatalogSession, Category, Product, ProductFactory};

use crate::config::LoaderConfig;
use crate::error::IngestionError;
use crate::prompt::FileNamePrompt;

/// One category as it appears in a catalog file.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
    pub name: String,
    pub description: String,
    pub products: Vec<Value>,
}

/// Builds the in-memory catalog from a JSON file.
///
/// Failures never escape [`CatalogLoader::load_catalog`]: a file that stays missing, an
/// unreadable file, malformed JSON, or an invalid product all degrade to an empty
/// catalog plus a logged diagnostic.
pub struct CatalogLoader {
    config: LoaderConfig,
    factory: ProductFactory,
    session: CatalogSession,
    prompt: Box<dyn FileNamePrompt>,
}

impl CatalogLoader {
    pub fn new(config: LoaderConfig, prompt: impl FileNamePrompt + 'static) -> Self {
        Self {
            config,
            factory: ProductFactory::new(),
            session: CatalogSession::new(),
            prompt: Box::new(prompt),
        }
    }

    pub fn with_factory(mut self, factory: ProductFactory) -> Self {
        self.factory = factory;
        self
    }

    /// Count loaded categories in an existing session instead of a fresh one.
    pub fn with_session(mut self, session: CatalogSession) -> Self {
        self.session = session;
        self
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn session(&self) -> &CatalogSession {
        &self.session
    }

    /// [`CatalogLoader::load_catalog`] with the configured default file.
    pub fn load_default(&mut self, max_attempts: Option<u32>) -> Vec<Category> {
        let file_name = self.config.default_file.clone();
        self.load_catalog(&file_name, max_attempts)
    }

    /// Load `file_name` from the data directory.
    ///
    /// While the file is missing, the prompt is asked for another name, at most
    /// `max_attempts` times (`None`: until a file is found or the prompt runs dry).
    /// `Some(0)` checks `file_name` once and never prompts.
    pub fn load_catalog(&mut self, file_name: &str, max_attempts: Option<u32>) -> Vec<Category> {
        match self.try_load_catalog(file_name, max_attempts) {
            Ok(categories) => categories,
            Err(err) => {
                tracing::error!(error = %err, cause = ?std::error::Error::source(&err), "catalog ingestion failed; using an empty catalog");
                Vec::new()
            }
        }
    }

    /// Same pipeline as [`CatalogLoader::load_catalog`], with the failure reported.
    pub fn try_load_catalog(
        &mut self,
        file_name: &str,
        max_attempts: Option<u32>,
    ) -> Result<Vec<Category>, IngestionError> {
        let path = self.locate(file_name, max_attempts)?;
        let records = read_records(&path)?;
        let categories = self.assemble(records)?;

        tracing::info!(
            path = %path.display(),
            categories = categories.len(),
            products = categories.iter().map(Category::len).sum::<usize>(),
            "catalog loaded"
        );
        Ok(categories)
    }

    fn locate(&mut self, file_name: &str, max_attempts: Option<u32>) -> Result<PathBuf, IngestionError> {
        let mut path = self.config.resolve(file_name);
        let mut attempts = 0u32;

        while !path.is_file() {
            tracing::warn!(path = %path.display(), attempts, "catalog file not found");

            if max_attempts.is_some_and(|max| attempts >= max) {
                return Err(IngestionError::NotFound { path, attempts });
            }

            let Some(answer) = self.prompt.next_file_name(&path) else {
                tracing::warn!("no replacement file name available");
                return Err(IngestionError::NotFound { path, attempts });
            };
            attempts += 1;

            let answer = answer.trim();
            let next = if answer.is_empty() {
                self.config.default_file.as_str()
            } else {
                answer
            };
            path = self.config.resolve(next);
        }

        Ok(path)
    }

    // Products are built for every record before any category exists, so a bad record
    // leaves the session counters untouched.
    fn assemble(&self, records: Vec<CategoryRecord>) -> Result<Vec<Category>, IngestionError> {
        let mut staged = Vec::with_capacity(records.len());
        for record in records {
            let products = record
                .products
                .iter()
                .map(|value| self.factory.build_value(value))
                .collect::<DomainResult<Vec<Product>>>()
                .map_err(|source| IngestionError::Build {
                    category: record.name.clone(),
                    source,
                })?;
            staged.push((record.name, record.description, products));
        }

        Ok(staged
            .into_iter()
            .map(|(name, description, products)| self.session.category(name, description, products))
            .collect())
    }
}

impl core::fmt::Debug for CatalogLoader {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatalogLoader")
            .field("config", &self.config)
            .field("factory", &self.factory)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

fn read_records(path: &Path) -> Result<Vec<CategoryRecord>, IngestionError> {
    let raw = std::fs::read_to_string(path).map_err(|source| IngestionError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| IngestionError::Json {
        path: path.to_path_buf(),
        source,
    })
}
