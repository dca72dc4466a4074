//! # Food Catalog
//!
//! Reference foods used for autocomplete when a user registers an item.
//!
//! ## Overall Data Structures
//!
//! - Raw dataset (`foods.json`): whatever export we were handed. Seen in the wild as a bare
//!   list, or wrapped under `foods` / `data`, with several naming conventions per field.
//!   See [`normalize`].
//!
//! - Snapshot (`foods.index.json`): the normalized list of [`CatalogRecord`]s. Purely a cache,
//!   safe to delete at any time. Lets a cold start skip normalization.
//!
//! - In-memory catalog: an `Arc<Catalog>` held by the [`IndexCache`]. Replaced wholesale on
//!   rebuild, never mutated in place.
//!
//! ## Notes
//! - Order is the raw dataset order and is kept all the way through search.
//! - Every record has a non-empty `id` and `name`, anything else is dropped at normalization.
use std::{fs, io::ErrorKind, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod cache;
pub mod error;
pub mod fold;
pub mod normalize;

pub use cache::IndexCache;
pub use error::CatalogError;
pub use fold::{fold, fold_opt};
pub use normalize::normalize;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    #[serde(alias = "foodId")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub keywords: String,
}

pub type Catalog = Vec<CatalogRecord>;

pub fn get_raw(path: &Path) -> Result<Value, CatalogError> {
    let text = read(path)?;

    Ok(serde_json::from_str(&text)?)
}

pub fn get_snapshot(path: &Path) -> Result<Catalog, CatalogError> {
    let text = read(path)?;
    let records: Catalog = serde_json::from_str(&text)?;

    Ok(records
        .into_iter()
        .filter(|record| !record.id.is_empty() && !record.name.is_empty())
        .collect())
}

pub fn write_snapshot(path: &Path, records: &[CatalogRecord]) -> Result<(), CatalogError> {
    fs::write(path, serde_json::to_vec(records)?)?;

    Ok(())
}

fn read(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::Missing(path.to_path_buf()),
        _ => CatalogError::Io(e),
    })
}
