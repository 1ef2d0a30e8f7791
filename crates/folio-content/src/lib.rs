//! Project details content.
//!
//! The table ships as `data/projects.json` and is embedded at build time.
//! Adding a project is a data change only.

use folio_core::ProjectLookup;
use folio_types::ProjectRecord;
use std::collections::HashMap;
use thiserror::Error;

const EMBEDDED_PROJECTS: &str = include_str!("../data/projects.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid project table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate project id {0:?}")]
    DuplicateId(String),
}

#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    projects: HashMap<String, ProjectRecord>,
    order: Vec<String>,
}

impl ProjectCatalog {
    /// Parse a JSON array of project records.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(raw)?;
        let mut catalog = Self::default();
        for record in records {
            if catalog.projects.contains_key(&record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
            catalog.order.push(record.id.clone());
            catalog.projects.insert(record.id.clone(), record);
        }
        tracing::debug!("project catalog loaded with {} entries", catalog.len());
        Ok(catalog)
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_PROJECTS)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Records in file order.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.order.iter().filter_map(|id| self.projects.get(id))
    }
}

impl ProjectLookup for ProjectCatalog {
    fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.get(id)
    }
}
