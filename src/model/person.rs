use serde::{Deserialize, Serialize};

use crate::consts::consts::EntityId;

/// A whole-record snapshot; edits replace the full value keyed by `id`.
/// Unknown keys in the file are ignored, missing keys fall back to defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image_path: Option<String>,
}

impl Person {
    pub fn new(
        first_name: String,
        last_name: String,
        email: Option<String>,
        phone: Option<String>,
    ) -> Self {
        Person {
            id: EntityId::new(),
            first_name,
            last_name,
            email,
            phone,
            image_path: None,
        }
    }

    /// A blank person with a freshly generated id, the starting point of
    /// every "new entry" edit.
    pub fn new_empty() -> Self {
        Person {
            id: EntityId::new(),
            first_name: String::new(),
            last_name: String::new(),
            email: None,
            phone: None,
            image_path: None,
        }
    }

    pub fn new_test() -> Self {
        Person {
            id: EntityId("1".to_string()),
            first_name: "First Name".to_string(),
            last_name: "Last Name".to_string(),
            email: Some("first.last@example.com".to_string()),
            phone: Some("0123 456-789".to_string()),
            image_path: None,
        }
    }
}

impl Default for Person {
    fn default() -> Self {
        Person::new_empty()
    }
}
