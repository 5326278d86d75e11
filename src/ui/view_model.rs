use tokio::sync::watch;
use tracing::{debug, error};

use crate::{
    consts::consts::EntityId,
    model::person::Person,
    repository::repository::{PeopleRepository, RepositoryError},
};

use super::{
    error::{ErrorHandler, ErrorParams, UndoAction},
    intent::{PeopleIntent, PersonIntent},
    state::{PeopleUiState, PersonUiState},
    validation::{FieldValidation, PersonValidator},
};

/// Intent-driven state container over the repository. Holds the collection
/// snapshot and the single-person edit snapshot as independent observable
/// states, plus the one-shot error channel. Every mutation is a wholesale
/// replace, so observers always see a fully-formed value.
pub struct PersonViewModel {
    repository: PeopleRepository,
    validator: PersonValidator,
    error_handler: ErrorHandler,
    people_ui_state: watch::Sender<PeopleUiState>,
    person_ui_state: watch::Sender<PersonUiState>,
}

impl PersonViewModel {
    pub fn new(
        repository: PeopleRepository,
        validator: PersonValidator,
        error_handler: ErrorHandler,
    ) -> Self {
        let (people_ui_state, _) = watch::channel(PeopleUiState::default());
        let (person_ui_state, _) = watch::channel(PersonUiState::default());

        Self {
            repository,
            validator,
            error_handler,
            people_ui_state,
            person_ui_state,
        }
    }

    pub fn subscribe_people(&self) -> watch::Receiver<PeopleUiState> {
        self.people_ui_state.subscribe()
    }

    pub fn subscribe_person(&self) -> watch::Receiver<PersonUiState> {
        self.person_ui_state.subscribe()
    }

    pub fn error_handler(&self) -> &ErrorHandler {
        &self.error_handler
    }

    pub fn on_people_intent(&self, intent: PeopleIntent) {
        match intent {
            PeopleIntent::Fetch => self.fetch(),
        }
    }

    fn fetch(&self) {
        match self.repository.get_all() {
            Ok(people) => {
                debug!(count = people.len(), "fetched people");

                self.people_ui_state
                    .send_modify(|state| state.people = people);
            }
            Err(err) => self.handle_error(err),
        }
    }

    pub fn on_person_intent(&self, intent: PersonIntent) {
        match intent {
            PersonIntent::FirstNameChange(first_name) => self.on_first_name_change(first_name),
            PersonIntent::LastNameChange(last_name) => self.on_last_name_change(last_name),
            PersonIntent::EmailChange(email) => self.on_email_change(email),
            PersonIntent::PhoneChange(phone) => self.on_phone_change(phone),

            PersonIntent::Clear => self.clear(),
            PersonIntent::FetchById(id) => self.fetch_by_id(id),
            PersonIntent::Create => self.create(),
            PersonIntent::Update => self.update(),
            PersonIntent::Remove(person) => self.remove(person),
        }
    }

    fn on_first_name_change(&self, first_name: String) {
        self.person_ui_state.send_if_modified(|state| {
            if state.person.first_name == first_name {
                return false;
            }

            state.person = Person {
                first_name,
                ..state.person.clone()
            };

            true
        });
    }

    fn on_last_name_change(&self, last_name: String) {
        self.person_ui_state.send_if_modified(|state| {
            if state.person.last_name == last_name {
                return false;
            }

            state.person = Person {
                last_name,
                ..state.person.clone()
            };

            true
        });
    }

    fn on_email_change(&self, email: Option<String>) {
        self.person_ui_state.send_if_modified(|state| {
            if state.person.email == email {
                return false;
            }

            state.person = Person {
                email,
                ..state.person.clone()
            };

            true
        });
    }

    fn on_phone_change(&self, phone: Option<String>) {
        self.person_ui_state.send_if_modified(|state| {
            if state.person.phone == phone {
                return false;
            }

            state.person = Person {
                phone,
                ..state.person.clone()
            };

            true
        });
    }

    fn clear(&self) {
        self.person_ui_state
            .send_modify(|state| state.person = Person::new_empty());
    }

    fn fetch_by_id(&self, id: EntityId) {
        debug!(%id, "fetch person by id");

        match self.repository.get_by_id(&id) {
            // A miss falls back to a blank person, it is not an error
            Ok(person) => self
                .person_ui_state
                .send_modify(|state| state.person = person.unwrap_or_else(Person::new_empty)),
            Err(err) => self.handle_error(err),
        }
    }

    fn create(&self) {
        let person = self.person_ui_state.borrow().person.clone();

        debug!(id = %person.id, "create person");

        match self.repository.create(person) {
            Ok(()) => self.fetch(),
            Err(err) => self.handle_error(err),
        }
    }

    fn update(&self) {
        let person = self.person_ui_state.borrow().person.clone();

        debug!(id = %person.id, "update person");

        match self.repository.update(person) {
            Ok(()) => self.fetch(),
            Err(err) => self.handle_error(err),
        }
    }

    fn remove(&self, person: Person) {
        debug!(id = %person.id, "remove person");

        match self.repository.remove(&person) {
            Ok(()) => self.fetch(),
            Err(err) => self.handle_error(err),
        }
    }

    /// Invoked by presentation when the user takes the undo offered on an
    /// error event (e.g. after a swipe-to-delete).
    pub fn apply_undo(&self, undo_action: UndoAction) {
        match undo_action {
            UndoAction::ReinsertPerson(person) => {
                debug!(id = %person.id, "undo remove");

                match self.repository.create(person) {
                    Ok(()) => self.fetch(),
                    Err(err) => self.handle_error(err),
                }
            }
        }
    }

    /// Runs all field validators against the current edit state in fixed
    /// order and stops at the first failure, surfacing it as one error
    /// event. When everything passes, dispatches create or update.
    pub fn validate(&self, is_create: bool) -> bool {
        let person = self.person_ui_state.borrow().person.clone();

        if !self.check(self.validator.validate_first_name(&person.first_name)) {
            return false;
        }
        if !self.check(self.validator.validate_last_name(&person.last_name)) {
            return false;
        }
        if !self.check(self.validator.validate_email(person.email.as_deref())) {
            return false;
        }
        if !self.check(self.validator.validate_phone(person.phone.as_deref())) {
            return false;
        }

        if is_create {
            self.create();
        } else {
            self.update();
        }

        true
    }

    fn check(&self, validation: FieldValidation) -> bool {
        if validation.is_invalid {
            error!(message = %validation.message, "validation failed");

            self.error_handler
                .on_error_event(ErrorParams::message(validation.message));

            return false;
        }

        true
    }

    fn handle_error(&self, err: RepositoryError) {
        error!(error = %err, "repository failure");

        self.error_handler
            .on_error_event(ErrorParams::message(err.to_string()));
    }
}
