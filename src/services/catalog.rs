use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::AppResult;
use crate::models::{CatalogEntry, ItemId};

/// The game catalog: insertion-ordered entries plus an id index.
///
/// Entry order follows the source file so that everything derived from the
/// catalog (graph edge order, profile tie-breaks) is reproducible run to run.
#[derive(Debug, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_id: HashMap<ItemId, usize>,
}

impl Catalog {
    /// Builds a catalog from entries, keeping the first entry for each id.
    /// Duplicate ids violate the catalog contract and are dropped with a
    /// warning.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        let mut catalog = Catalog::default();

        for entry in entries {
            if catalog.by_id.contains_key(&entry.item_id) {
                tracing::warn!(item_id = %entry.item_id, name = %entry.name, "Duplicate catalog id, keeping first entry");
                continue;
            }
            catalog.by_id.insert(entry.item_id, catalog.entries.len());
            catalog.entries.push(entry);
        }

        catalog
    }

    pub fn get(&self, item_id: ItemId) -> Option<&CatalogEntry> {
        self.by_id.get(&item_id).map(|&idx| &self.entries[idx])
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Raw CSV row; multi-valued cells are `", "`-separated strings
#[derive(Debug, Deserialize)]
struct RawCatalogRow {
    game_id: u64,
    name: String,
    #[serde(default)]
    genres: Option<String>,
    #[serde(default)]
    tags: Option<String>,
    #[serde(default)]
    publisher: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
}

impl From<RawCatalogRow> for CatalogEntry {
    fn from(row: RawCatalogRow) -> Self {
        CatalogEntry {
            item_id: ItemId(row.game_id),
            name: row.name,
            genres: split_multi(row.genres.as_deref()),
            tags: split_multi(row.tags.as_deref()),
            publishers: split_multi(row.publisher.as_deref()),
            release_date: row.release_date.filter(|d| !d.trim().is_empty()),
        }
    }
}

/// Splits a `", "`-separated cell into individual values
fn split_multi(cell: Option<&str>) -> Vec<String> {
    match cell {
        Some(cell) if !cell.trim().is_empty() => cell
            .split(", ")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// Loads the game catalog from a CSV file.
///
/// A missing or unreadable file is fatal: the recommender cannot run
/// without its reference data.
pub fn load_catalog(path: impl AsRef<Path>) -> AppResult<Catalog> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let mut entries = Vec::new();
    for row in reader.deserialize::<RawCatalogRow>() {
        entries.push(CatalogEntry::from(row?));
    }

    let catalog = Catalog::from_entries(entries);

    tracing::info!(
        path = %path.display(),
        entries = catalog.len(),
        "Catalog loaded"
    );

    Ok(catalog)
}
