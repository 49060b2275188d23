use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{NewPerson, Person, PersonId};
use crate::domain::errors::CreationError;
use crate::domain::ports::{CredentialVerifier, PeopleService};

// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub people: Arc<dyn PeopleService>,
    pub credentials: Arc<dyn CredentialVerifier>,
}

// In-memory people service adapter.
#[derive(Clone, Default)]
pub struct InMemoryPeopleService {
    pub people: Arc<Mutex<HashMap<PersonId, Person>>>,
}

#[async_trait]
impl PeopleService for InMemoryPeopleService {
    async fn add(&self, person: NewPerson) -> Result<PersonId, CreationError> {
        let id = PersonId::generate();
        let mut people = self.people.lock().await;
        people.insert(id, person.into_person(id));
        Ok(id)
    }

    async fn get(&self, id: PersonId) -> Result<Option<Person>, CreationError> {
        let people = self.people.lock().await;
        Ok(people.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Person>, CreationError> {
        let people = self.people.lock().await;
        Ok(people.values().cloned().collect())
    }

    async fn remove(&self, id: PersonId) -> Result<bool, CreationError> {
        let mut people = self.people.lock().await;
        Ok(people.remove(&id).is_some())
    }
}

// Fixed user table checked by the Basic auth middleware.
#[derive(Clone, Default)]
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    pub fn single(user: impl Into<String>, password: impl Into<String>) -> Self {
        let mut users = HashMap::new();
        users.insert(user.into(), password.into());
        Self { users }
    }

    pub fn with_user(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.users.insert(user.into(), password.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, user: &str, password: &str) -> bool {
        self.users
            .get(user)
            .is_some_and(|expected| expected == password)
    }
}
