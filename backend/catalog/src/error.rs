use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Food dataset missing: {}", .0.display())]
    Missing(PathBuf),

    #[error("Malformed food dataset: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Failed to access food dataset: {0}")]
    Io(#[from] std::io::Error),
}
