pub mod file;
pub mod seed;

use thiserror::Error;

use crate::{consts::consts::EntityId, model::person::Person};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unable to read people file: {0}")]
    UnableToReadFile(std::io::Error),

    #[error("Unable to parse people file: {0}")]
    UnableToParseFile(serde_json::Error),

    #[error("Unable to serialize people: {0}")]
    UnableToSerialize(serde_json::Error),

    #[error("Unable to create storage directory: {0}")]
    UnableToCreateDirectory(std::io::Error),

    #[error("Unable to write people file: {0}")]
    UnableToWriteFile(std::io::Error),
}

/// Canonical owner of the people collection. Filesystem access happens only
/// inside `load` / `save`, every other operation is pure in-memory.
pub trait PeopleStore {
    /// Insertion order, stable across calls.
    fn select_all(&self) -> Vec<Person>;

    fn find_by_id(&self, id: &EntityId) -> Option<Person>;

    /// Idempotent create: a duplicate id keeps the first stored value.
    fn insert(&mut self, person: Person);

    /// Whole-record replace, no-op when the id is absent.
    fn update(&mut self, person: Person);

    /// No-op when the id is absent.
    fn delete(&mut self, id: &EntityId);

    /// Replaces the in-memory collection from the file. A missing or blank
    /// file seeds the fixture set and writes it back.
    fn load(&mut self) -> StoreResult<()>;

    /// Writes the whole collection to the file, overwriting it.
    fn save(&self) -> StoreResult<()>;
}
