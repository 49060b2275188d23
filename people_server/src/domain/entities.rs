use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// Server-generated identifier of a stored person.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(Uuid);

impl PersonId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Hyphenated lowercase form, used in `Location` headers.
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for PersonId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value).map(Self)
    }
}

// Person record as held by the people service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub age: u8,
}

// Validated create payload; never carries a client-supplied id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub age: u8,
}

impl NewPerson {
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

// Raw create payload exactly as it arrived on the wire.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct PersonCandidate {
    // Client-side reference; echoed back as error logref, never used as the person id.
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
}

impl PersonCandidate {
    pub fn client_ref(&self) -> Option<&str> {
        match &self.id {
            Some(Value::String(id)) if !id.trim().is_empty() => Some(id),
            _ => None,
        }
    }
}

// Single failed field constraint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}
