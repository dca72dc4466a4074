//! # Catalog Processing
//!
//! Offline rebuild of the food snapshot.
//!
//! The server rebuilds on its own when the snapshot is missing or broken. This is for when the raw
//! dataset was replaced and we want a fresh snapshot (and a quick look at it) before deploying.
//!
//! ## Steps
//! 1. Read the raw dataset, fail loudly if it is missing or malformed. The server degrades to an
//!    empty catalog in that case, here we would rather know.
//!
//! 2. Normalize it into catalog records.
//!
//! 3. Write the snapshot, overwriting whatever was there.
//!
//! 4. Print a summary, and the matches for a query if one was given.
use std::path::Path;

use anyhow::{Context, Result};
use catalog::{Catalog, get_raw, normalize, write_snapshot};
use indicatif::{ProgressBar, ProgressStyle};
use server::search::search;

pub mod utils;

use utils::{Summary, summarize};

pub fn rebuild_index(foods_path: &Path, index_path: &Path) -> Result<Catalog> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")?);

    pb.set_message(format!("Reading {}", foods_path.display()));
    let raw = get_raw(foods_path)
        .with_context(|| format!("Failed to load {}", foods_path.display()))?;

    pb.set_message("Normalizing");
    let catalog = normalize(&raw);

    pb.set_message(format!("Writing {}", index_path.display()));
    write_snapshot(index_path, &catalog)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    pb.finish_with_message("Done");

    Ok(catalog)
}

pub fn run(foods_path: &Path, index_path: &Path, query: Option<&str>) -> Result<()> {
    let catalog = rebuild_index(foods_path, index_path)?;

    let Summary {
        foods,
        generated_ids,
        without_keywords,
    } = summarize(&catalog);

    println!("Indexed Foods: {}", foods);
    println!("Generated IDs: {}", generated_ids);
    println!("Without Keywords: {}\n", without_keywords);

    if let Some(query) = query {
        let results = search(Some(query), &catalog);
        println!("Matches for {:?}: {}", query, results.len());

        for result in results {
            println!("  {} {}", result.id, result.name);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use catalog::get_snapshot;

    use super::*;

    #[test]
    fn test_rebuild_index() {
        let dir = tempfile::tempdir().unwrap();
        let foods_path = dir.path().join("foods.json");
        let index_path = dir.path().join("foods.index.json");
        fs::write(&foods_path, r#"{"data": [{"code": 1, "title": "Brød"}]}"#).unwrap();
        fs::write(&index_path, "stale").unwrap();

        let catalog = rebuild_index(&foods_path, &index_path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(get_snapshot(&index_path).unwrap(), catalog);
    }

    #[test]
    fn test_rebuild_index_missing_dataset() {
        let dir = tempfile::tempdir().unwrap();

        let result = rebuild_index(&dir.path().join("foods.json"), &dir.path().join("index.json"));
        assert!(result.is_err());
        assert!(!dir.path().join("index.json").exists());
    }
}
