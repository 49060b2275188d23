use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::{NewPerson, Person, PersonId};
use crate::domain::errors::CreationError;

// Port for the people service behind the HTTP layer.
// Implementations must be safe to call from concurrent requests.
#[async_trait]
pub trait PeopleService: Send + Sync {
    async fn add(&self, person: NewPerson) -> Result<PersonId, CreationError>;
    async fn get(&self, id: PersonId) -> Result<Option<Person>, CreationError>;
    async fn list(&self) -> Result<Vec<Person>, CreationError>;
    async fn remove(&self, id: PersonId) -> Result<bool, CreationError>;
}

// Port for checking HTTP Basic credentials.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, user: &str, password: &str) -> bool;
}

// Lets handlers share one service behind `Arc<dyn PeopleService>` with generic use cases.
#[async_trait]
impl<T> PeopleService for Arc<T>
where
    T: PeopleService + ?Sized,
{
    async fn add(&self, person: NewPerson) -> Result<PersonId, CreationError> {
        (**self).add(person).await
    }

    async fn get(&self, id: PersonId) -> Result<Option<Person>, CreationError> {
        (**self).get(id).await
    }

    async fn list(&self) -> Result<Vec<Person>, CreationError> {
        (**self).list().await
    }

    async fn remove(&self, id: PersonId) -> Result<bool, CreationError> {
        (**self).remove(id).await
    }
}
