use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::entities::{Person, PersonCandidate};

// Decodes a create body; only a JSON object is a person document.
pub fn decode_candidate(body: &[u8]) -> Option<PersonCandidate> {
    match serde_json::from_slice::<Value>(body).ok()? {
        object @ Value::Object(_) => serde_json::from_value(object).ok(),
        _ => None,
    }
}

// Response payload for a stored person.
#[derive(Debug, Serialize)]
pub struct PersonResponse {
    pub id: String,
    pub name: String,
    pub age: u8,
}

impl From<Person> for PersonResponse {
    fn from(person: Person) -> Self {
        Self {
            id: person.id.to_string(),
            name: person.name,
            age: person.age,
        }
    }
}

// Constraint text per create field, keyed by field name.
pub type ConstraintsResponse = BTreeMap<&'static str, &'static str>;

// Single vnd.error document.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub path: String,
    pub logref: String,
}

// vnd.error collection, used when a request fails more than one check.
#[derive(Debug, Serialize)]
pub struct ErrorsResponse {
    pub total: usize,
    #[serde(rename = "_embedded")]
    pub embedded: EmbeddedErrors,
}

#[derive(Debug, Serialize)]
pub struct EmbeddedErrors {
    pub errors: Vec<ErrorResponse>,
}

// Bare envelope for unhandled failures.
#[derive(Debug, Serialize)]
pub struct ExceptionResponse {
    pub message: String,
}
