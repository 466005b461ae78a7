//! Directory store: the fixed, immutable collection every query runs against.
//!
//! Loading is the caller's job: [`Directory::load`] reads a JSON file,
//! [`Directory::from_json_str`] parses an in-memory document, and
//! [`Directory::sample`] returns the embedded demo data. Once built, a
//! directory is never mutated.

use crate::types::{Entity, EntityKind};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const SAMPLE_SRC: &str = include_str!("../data/sample.json");

/// Errors raised while populating a [`Directory`].
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read directory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid directory document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate person id {0}")]
    DuplicatePersonId(u64),
    #[error("duplicate vehicle id {0:?}")]
    DuplicateVehicleId(String),
}

/// Accepted document shapes: `{ "entities": [...] }` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDirectory {
    Wrapped { entities: Vec<Entity> },
    Bare(Vec<Entity>),
}

/// Immutable, ordered collection of entities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    entities: Vec<Entity>,
}

impl Directory {
    /// Build a directory, rejecting duplicate identities within a variant.
    pub fn new(entities: Vec<Entity>) -> Result<Self, DirectoryError> {
        let mut people = HashSet::new();
        let mut vehicles = HashSet::new();
        for entity in &entities {
            match entity {
                Entity::Person(p) => {
                    if !people.insert(p.id) {
                        return Err(DirectoryError::DuplicatePersonId(p.id));
                    }
                }
                Entity::Vehicle(v) => {
                    if !vehicles.insert(v.id.as_str()) {
                        return Err(DirectoryError::DuplicateVehicleId(v.id.clone()));
                    }
                }
            }
        }
        Ok(Self { entities })
    }

    pub fn from_json_str(src: &str) -> Result<Self, DirectoryError> {
        let raw: RawDirectory = serde_json::from_str(src)?;
        let entities = match raw {
            RawDirectory::Wrapped { entities } | RawDirectory::Bare(entities) => entities,
        };
        Self::new(entities)
    }

    /// Read and parse a JSON directory file.
    pub fn load(path: &Path) -> Result<Self, DirectoryError> {
        let src = std::fs::read_to_string(path).map_err(|source| DirectoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let directory = Self::from_json_str(&src)?;
        tracing::info!(path = %path.display(), entities = directory.len(), "directory loaded");
        Ok(directory)
    }

    /// The embedded demo directory: three people and three vehicles.
    ///
    /// # Panics
    ///
    /// Panics if the embedded JSON is malformed, which the unit tests rule out.
    pub fn sample() -> Self {
        Self::from_json_str(SAMPLE_SRC).expect("embedded sample directory must be valid")
    }

    /// The full collection, in load order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Number of entities of one kind.
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind() == kind).count()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
