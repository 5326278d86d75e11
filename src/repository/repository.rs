use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;

use crate::{
    consts::consts::EntityId,
    model::person::Person,
    store::{PeopleStore, StoreError},
};

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("People store lock is poisoned")]
    StorePoisoned,
}

/// Thin fault boundary over the store: every operation comes back as a
/// tagged result, nothing store-raised crosses this layer as a panic.
/// No business logic lives here.
pub struct PeopleRepository {
    store: Arc<Mutex<dyn PeopleStore + Send>>,
}

impl PeopleRepository {
    pub fn new(store: Arc<Mutex<dyn PeopleStore + Send>>) -> Self {
        Self { store }
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, dyn PeopleStore + Send + 'static>> {
        self.store.lock().map_err(|_| RepositoryError::StorePoisoned)
    }

    pub fn get_all(&self) -> RepositoryResult<Vec<Person>> {
        Ok(self.lock()?.select_all())
    }

    /// A lookup miss is not a fault, callers fall back locally.
    pub fn get_by_id(&self, id: &EntityId) -> RepositoryResult<Option<Person>> {
        Ok(self.lock()?.find_by_id(id))
    }

    pub fn create(&self, person: Person) -> RepositoryResult<()> {
        self.lock()?.insert(person);
        Ok(())
    }

    pub fn update(&self, person: Person) -> RepositoryResult<()> {
        self.lock()?.update(person);
        Ok(())
    }

    pub fn remove(&self, person: &Person) -> RepositoryResult<()> {
        self.lock()?.delete(&person.id);
        Ok(())
    }

    pub fn read_store(&self) -> RepositoryResult<()> {
        self.lock()?.load()?;
        Ok(())
    }

    pub fn write_store(&self) -> RepositoryResult<()> {
        self.lock()?.save()?;
        Ok(())
    }
}
