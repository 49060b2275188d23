use crate::domain::entities::PersonId;
use crate::domain::errors::PeopleError;
use crate::domain::ports::PeopleService;

// Delete use case with the people service injected.
pub struct DeletePersonUseCase<S> {
    pub service: S,
}

impl<S> DeletePersonUseCase<S>
where
    S: PeopleService,
{
    pub async fn execute(&self, raw_id: &str) -> Result<(), PeopleError> {
        let id: PersonId = raw_id.parse().map_err(|_| PeopleError::NotFound)?;

        if self.service.remove(id).await? {
            Ok(())
        } else {
            Err(PeopleError::NotFound)
        }
    }
}
