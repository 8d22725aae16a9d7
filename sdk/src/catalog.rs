//! Entity catalog loading
//!
//! The catalog is a JSON object whose top-level keys are entity names. Only the
//! keys are kept, in the order they appear in the document; values are skipped
//! without being materialized.

use crate::error::{GenerateError, GenerateResult};
use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Ordered entity names read from a catalog file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntityCatalog {
    names: Vec<String>,
}

impl EntityCatalog {
    /// Create a catalog from names, keeping the first occurrence of each
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        let mut seen = HashSet::new();
        for name in names {
            catalog.push_unique(name.into(), &mut seen);
        }
        catalog
    }

    /// Load a catalog from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> GenerateResult<Self> {
        let path = path.as_ref();
        debug!("Reading entity catalog from {}", path.display());

        let file = File::open(path).map_err(|source| GenerateError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog: EntityCatalog = serde_json::from_reader(BufReader::new(file)).map_err(
            |source| GenerateError::ParseInput {
                path: path.to_path_buf(),
                source,
            },
        )?;

        debug!("Catalog {} lists {} entities", path.display(), catalog.len());
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // A repeated key keeps its first position, as an insertion-ordered map would
    fn push_unique(&mut self, name: String, seen: &mut HashSet<String>) {
        if seen.insert(name.clone()) {
            self.names.push(name);
        } else {
            debug!("Ignoring repeated catalog key '{}'", name);
        }
    }
}

impl<'de> Deserialize<'de> for EntityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = EntityCatalog;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object mapping entity names to values")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut catalog = EntityCatalog::default();
        let mut seen = HashSet::new();
        while let Some(name) = map.next_key::<String>()? {
            map.next_value::<IgnoredAny>()?;
            catalog.push_unique(name, &mut seen);
        }
        Ok(catalog)
    }
}
