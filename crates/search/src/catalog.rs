use std::path::Path;

use anyhow::{Context, Result};
use jama_core::Place;
use walkdir::WalkDir;

/// Injectable catalog capability: the matcher and its callers only see a
/// read-only slice, so tests can substitute fixtures freely.
pub trait CatalogProvider: Send + Sync {
    fn places(&self) -> &[Place];
}

/// Malformed catalog data, rejected at construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate place id {0}")]
    DuplicateId(u32),
    #[error("place {0} has an empty name")]
    EmptyName(u32),
    #[error("place {id} rating {rating} outside 0.0..=5.0")]
    RatingOutOfRange { id: u32, rating: f32 },
}

/// Immutable, validated in-memory catalog. Read-only after load; safe to
/// share across sessions without locking.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    places: Vec<Place>,
}

impl StaticCatalog {
    pub fn new(places: Vec<Place>) -> Result<Self, CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for place in &places {
            if !seen.insert(place.id) {
                return Err(CatalogError::DuplicateId(place.id));
            }
            if place.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(place.id));
            }
            if !(0.0..=5.0).contains(&place.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: place.id,
                    rating: place.rating,
                });
            }
        }

        Ok(Self { places })
    }

    /// Decode a JSON array of place records in the external feed shape.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let places: Vec<Place> =
            serde_json::from_str(raw).context("failed decoding catalog JSON")?;
        Ok(Self::new(places)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed reading catalog file: {}", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Collect every `*.json` file under `root` into one catalog. Files are
    /// visited in path order so the catalog order is stable.
    pub fn from_dir(root: impl AsRef<Path>) -> Result<Self> {
        let mut places: Vec<Place> = Vec::new();

        for entry in WalkDir::new(root.as_ref())
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry.path().extension().and_then(|ext| ext.to_str()) == Some("json")
            })
        {
            let path = entry.path();
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed reading catalog file: {}", path.display()))?;
            let batch: Vec<Place> = serde_json::from_str(&raw)
                .with_context(|| format!("failed decoding catalog file: {}", path.display()))?;
            places.extend(batch);
        }

        Ok(Self::new(places)?)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl CatalogProvider for StaticCatalog {
    fn places(&self) -> &[Place] {
        &self.places
    }
}
