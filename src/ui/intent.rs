use crate::{consts::consts::EntityId, model::person::Person};

/// Collection-screen intents.
#[derive(Clone, Debug, PartialEq)]
pub enum PeopleIntent {
    Fetch,
}

/// Edit-screen intents. Field changes carry the whole new value; an
/// unchanged value produces no new snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum PersonIntent {
    FirstNameChange(String),
    LastNameChange(String),
    EmailChange(Option<String>),
    PhoneChange(Option<String>),

    Clear,
    FetchById(EntityId),
    Create,
    Update,
    Remove(Person),
}
