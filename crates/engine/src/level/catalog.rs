use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::options::ClassifyOptions;

use super::build::build_level;
use super::error::LevelLoadError;
use super::fingerprint::LevelFingerprint;
use super::model::Level;
use super::parser::extract_definitions;

/// What to do when one definition in a document is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchPolicy {
    #[default]
    AbortOnFirstError,
    SkipInvalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    /// Position of the definition in the document, counting skipped ones.
    pub index: usize,
    pub name: String,
    pub fingerprint: LevelFingerprint,
    pub level: Level,
}

/// Selectable levels in document order.
#[derive(Debug, Clone, Default)]
pub struct LevelCatalog {
    entries: Vec<CatalogEntry>,
    failures: Vec<LevelLoadError>,
}

impl LevelCatalog {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up by position among the selectable levels.
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn failures(&self) -> &[LevelLoadError] {
        &self.failures
    }
}

pub fn load_level_document(
    document: &str,
    options: &ClassifyOptions,
    policy: BatchPolicy,
) -> Result<LevelCatalog, LevelLoadError> {
    let mut catalog = LevelCatalog::default();

    for definition in extract_definitions(document) {
        match build_level(&definition, options) {
            Ok(level) => catalog.entries.push(CatalogEntry {
                index: definition.index,
                fingerprint: LevelFingerprint::of(&definition.name, &definition.body),
                name: definition.name,
                level,
            }),
            Err(error) => {
                let failure = LevelLoadError {
                    index: definition.index,
                    name: definition.name,
                    line: definition.line,
                    error,
                };
                match policy {
                    BatchPolicy::AbortOnFirstError => return Err(failure),
                    BatchPolicy::SkipInvalid => {
                        warn!(
                            index = failure.index,
                            name = failure.name.as_str(),
                            line = failure.line,
                            error = %failure.error,
                            "level_skipped"
                        );
                        catalog.failures.push(failure);
                    }
                }
            }
        }
    }

    info!(
        levels = catalog.len(),
        skipped = catalog.failures.len(),
        pond_fill = options.pond_fill,
        pillars = options.pillars,
        "level_document_loaded"
    );
    Ok(catalog)
}
