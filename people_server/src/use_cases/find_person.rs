use crate::domain::entities::{Person, PersonId};
use crate::domain::errors::PeopleError;
use crate::domain::ports::PeopleService;

// Lookup use cases over the people service.
pub struct FindPersonUseCase<S> {
    pub service: S,
}

impl<S> FindPersonUseCase<S>
where
    S: PeopleService,
{
    // Ids that are not UUIDs cannot name a stored person, so they read as unknown.
    pub async fn execute(&self, raw_id: &str) -> Result<Person, PeopleError> {
        let id: PersonId = raw_id.parse().map_err(|_| PeopleError::NotFound)?;

        self.service.get(id).await?.ok_or(PeopleError::NotFound)
    }

    pub async fn list(&self) -> Result<Vec<Person>, PeopleError> {
        let mut people = self.service.list().await?;
        // Stable order for clients regardless of the backing store.
        people.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(people)
    }
}
