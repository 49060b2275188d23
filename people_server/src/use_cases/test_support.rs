use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{NewPerson, Person, PersonId};
use crate::domain::errors::CreationError;
use crate::domain::ports::PeopleService;

pub(crate) type PersonTable = Arc<Mutex<HashMap<PersonId, Person>>>;

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub add: bool,
    pub get: bool,
    pub list: bool,
    pub remove: bool,
}

// People service double that records every call and can be told to fail.
#[derive(Clone)]
pub(crate) struct RecordingService {
    people: PersonTable,
    added: Arc<Mutex<Vec<NewPerson>>>,
    failures: FailureFlags,
}

impl RecordingService {
    pub(crate) fn new() -> Self {
        Self {
            people: Arc::new(Mutex::new(HashMap::new())),
            added: Arc::new(Mutex::new(Vec::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_person(&self, name: &str, age: u8) -> PersonId {
        let id = PersonId::generate();
        let person = Person {
            id,
            name: name.to_string(),
            age,
        };
        let mut guard = self.people.lock().expect("people mutex poisoned");
        guard.insert(id, person);
        id
    }

    pub(crate) fn added(&self) -> Vec<NewPerson> {
        self.added.lock().expect("added mutex poisoned").clone()
    }

    pub(crate) fn get_test_person(&self, id: PersonId) -> Option<Person> {
        let guard = self.people.lock().expect("people mutex poisoned");
        guard.get(&id).cloned()
    }
}

fn hard_error() -> CreationError {
    CreationError::new("RuntimeException", "Hard error!")
}

#[async_trait]
impl PeopleService for RecordingService {
    async fn add(&self, person: NewPerson) -> Result<PersonId, CreationError> {
        self.added
            .lock()
            .expect("added mutex poisoned")
            .push(person.clone());
        if self.failures.add {
            return Err(hard_error());
        }

        let id = PersonId::generate();
        let mut guard = self.people.lock().expect("people mutex poisoned");
        guard.insert(id, person.into_person(id));
        Ok(id)
    }

    async fn get(&self, id: PersonId) -> Result<Option<Person>, CreationError> {
        if self.failures.get {
            return Err(hard_error());
        }

        let guard = self.people.lock().expect("people mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Person>, CreationError> {
        if self.failures.list {
            return Err(hard_error());
        }

        let guard = self.people.lock().expect("people mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    async fn remove(&self, id: PersonId) -> Result<bool, CreationError> {
        if self.failures.remove {
            return Err(hard_error());
        }

        let mut guard = self.people.lock().expect("people mutex poisoned");
        Ok(guard.remove(&id).is_some())
    }
}
