use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use crate::domain::errors::PeopleError;
use crate::domain::validation::RULES;
use crate::interface_adapters::errors::ApiError;
use crate::interface_adapters::media::{self, PEOPLE_V1_JSON};
use crate::interface_adapters::protocol::{self, ConstraintsResponse, PersonResponse};
use crate::interface_adapters::state::AppState;
use crate::use_cases::create_person::CreatePersonUseCase;
use crate::use_cases::delete_person::DeletePersonUseCase;
use crate::use_cases::find_person::FindPersonUseCase;

// Handler for creating a person from a people-v1 document.
#[tracing::instrument(name = "create_person", skip_all)]
pub async fn create_person(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    if !media::is_people_v1(&headers) {
        info!(content_type = ?headers.get(header::CONTENT_TYPE), "unsupported media type");
        return Ok(StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response());
    }

    let candidate = protocol::decode_candidate(&body)
        .ok_or_else(|| ApiError::new(PeopleError::MalformedBody, uri.path()))?;
    let client_ref = candidate.client_ref().map(str::to_owned);

    let use_case = CreatePersonUseCase {
        service: state.people.clone(),
    };
    let id = use_case
        .execute(candidate)
        .await
        .map_err(|err| ApiError::new(err, uri.path()).with_client_ref(client_ref))?;

    info!(person_id = %id, "person created");

    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/people/{id}"))]).into_response())
}

// Handler for reading one person.
#[tracing::instrument(name = "get_person", skip_all, fields(person_id = %id))]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<Response, ApiError> {
    let use_case = FindPersonUseCase {
        service: state.people.clone(),
    };
    let person = use_case
        .execute(&id)
        .await
        .map_err(|err| ApiError::new(err, uri.path()))?;

    Ok(people_document(PersonResponse::from(person)))
}

// Handler for listing every person.
pub async fn list_people(State(state): State<AppState>, uri: Uri) -> Result<Response, ApiError> {
    let use_case = FindPersonUseCase {
        service: state.people.clone(),
    };
    let people = use_case
        .list()
        .await
        .map_err(|err| ApiError::new(err, uri.path()))?;

    let body: Vec<PersonResponse> = people.into_iter().map(PersonResponse::from).collect();
    Ok(people_document(body))
}

// Handler for deleting a person.
#[tracing::instrument(name = "delete_person", skip_all, fields(person_id = %id))]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<StatusCode, ApiError> {
    let use_case = DeletePersonUseCase {
        service: state.people.clone(),
    };
    use_case
        .execute(&id)
        .await
        .map_err(|err| ApiError::new(err, uri.path()))?;

    info!("person deleted");
    Ok(StatusCode::NO_CONTENT)
}

// Handler listing the constraint text of each create field.
pub async fn constraints() -> Json<ConstraintsResponse> {
    Json(
        RULES
            .iter()
            .map(|rule| (rule.field, rule.constraint))
            .collect(),
    )
}

fn people_document<T: serde::Serialize>(body: T) -> Response {
    ([(header::CONTENT_TYPE, PEOPLE_V1_JSON)], Json(body)).into_response()
}
