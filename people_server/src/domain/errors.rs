use std::fmt;

use crate::domain::entities::Violation;

// Failure raised by a people service implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreationError {
    // Short error class name, e.g. `RuntimeException`.
    pub kind: String,
    pub message: String,
}

impl CreationError {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for CreationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for CreationError {}

// Domain-level errors for people workflows.
#[derive(Debug, PartialEq, Eq)]
pub enum PeopleError {
    // One or more field constraints failed, in declaration order.
    Validation(Vec<Violation>),
    MalformedBody,
    NotFound,
    Unhandled(CreationError),
}

impl From<CreationError> for PeopleError {
    fn from(err: CreationError) -> Self {
        PeopleError::Unhandled(err)
    }
}
