use std::{
    fs, io,
    path::PathBuf,
};

use tracing::debug;

use crate::{
    consts::consts::{EntityId, DIRECTORY_NAME, FILE_NAME},
    model::person::Person,
};

use super::{seed, PeopleStore, StoreError, StoreResult};

pub struct StoreOptions {
    data_directory: PathBuf,
}

// Implements: https://rust-unofficial.github.io/patterns/patterns/creational/builder.html
impl StoreOptions {
    pub fn set_data_directory(mut self, data_directory: PathBuf) -> Self {
        self.data_directory = data_directory;
        self
    }

    /// `<data_directory>/documents/android/people.json`
    pub fn file_path(&self) -> PathBuf {
        self.data_directory
            .join("documents")
            .join(DIRECTORY_NAME)
            .join(FILE_NAME)
    }
}

impl Default for StoreOptions {
    fn default() -> Self {
        // Defaults to $CWD/data
        Self {
            data_directory: PathBuf::from("data"),
        }
    }
}

pub struct FileStore {
    people: Vec<Person>,
    options: StoreOptions,
}

impl FileStore {
    pub fn new(options: StoreOptions) -> Self {
        Self {
            people: Vec::new(),
            options,
        }
    }

    pub fn new_test() -> Self {
        let data_directory: PathBuf = ["/", "tmp", "peopledb", &EntityId::new().to_string()]
            .iter()
            .collect();

        Self::new(StoreOptions::default().set_data_directory(data_directory))
    }
}

impl PeopleStore for FileStore {
    fn select_all(&self) -> Vec<Person> {
        self.people.clone()
    }

    fn find_by_id(&self, id: &EntityId) -> Option<Person> {
        self.people.iter().find(|person| &person.id == id).cloned()
    }

    fn insert(&mut self, person: Person) {
        debug!(id = %person.id, "insert person");

        // First write wins, a duplicate id never overwrites
        if !self.people.iter().any(|existing| existing.id == person.id) {
            self.people.push(person);
        }
    }

    fn update(&mut self, person: Person) {
        debug!(id = %person.id, "update person");

        if let Some(existing) = self
            .people
            .iter_mut()
            .find(|existing| existing.id == person.id)
        {
            *existing = person;
        }
    }

    fn delete(&mut self, id: &EntityId) {
        debug!(%id, "delete person");

        self.people.retain(|person| &person.id != id);
    }

    #[tracing::instrument(skip(self))]
    fn load(&mut self) -> StoreResult<()> {
        self.people.clear();

        let file_path = self.options.file_path();

        let contents = match fs::read_to_string(&file_path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => String::new(),
            Err(err) => return Err(StoreError::UnableToReadFile(err)),
        };

        if contents.trim().is_empty() {
            self.people = seed::seed_people();

            debug!(count = self.people.len(), "seeded people store");

            return self.save();
        }

        self.people =
            serde_json::from_str(&contents).map_err(StoreError::UnableToParseFile)?;

        debug!(count = self.people.len(), "loaded people store");

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    fn save(&self) -> StoreResult<()> {
        let file_path = self.options.file_path();

        if let Some(directory) = file_path.parent() {
            fs::create_dir_all(directory).map_err(StoreError::UnableToCreateDirectory)?;
        }

        let contents = serde_json::to_string_pretty(&self.people)
            .map_err(StoreError::UnableToSerialize)?;

        fs::write(&file_path, contents).map_err(StoreError::UnableToWriteFile)?;

        debug!(count = self.people.len(), "saved people store");

        Ok(())
    }
}
