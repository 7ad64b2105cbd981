//! Infrastructure layer: catalog files, configuration, interactive input.

pub mod config;
pub mod error;
pub mod loader;
pub mod prompt;


pub use config::LoaderConfig;
pub use error::IngestionError;
pub use loader::{CatalogLoader, CategoryRecord};
pub use prompt::{FileNamePrompt, FixedPrompt, StdinPrompt};
