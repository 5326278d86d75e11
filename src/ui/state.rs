use crate::model::person::Person;

/// Collection snapshot, replaced wholesale on every successful fetch.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PeopleUiState {
    pub people: Vec<Person>,
}

/// The person under edit. Starts as a blank person with a fresh id.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct PersonUiState {
    pub person: Person,
}
