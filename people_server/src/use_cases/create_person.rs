use crate::domain::entities::{PersonCandidate, PersonId};
use crate::domain::errors::PeopleError;
use crate::domain::ports::PeopleService;
use crate::domain::validation;

// Create-person use case with the people service injected.
pub struct CreatePersonUseCase<S> {
    pub service: S,
}

impl<S> CreatePersonUseCase<S>
where
    S: PeopleService,
{
    pub async fn execute(&self, candidate: PersonCandidate) -> Result<PersonId, PeopleError> {
        let person = validation::validate(&candidate).map_err(PeopleError::Validation)?;

        // Service failures are not recovered here; the caller reports them as unhandled.
        let id = self.service.add(person).await?;

        Ok(id)
    }
}
