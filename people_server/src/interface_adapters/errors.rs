use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::errors::PeopleError;
use crate::interface_adapters::media::ERROR_JSON;
use crate::interface_adapters::protocol::{
    EmbeddedErrors, ErrorResponse, ErrorsResponse, ExceptionResponse,
};

const MALFORMED_BODY_MESSAGE: &str = "malformed request body";
const NOT_FOUND_MESSAGE: &str = "person not found";

// Domain error bound to the request path it happened on.
#[derive(Debug)]
pub struct ApiError {
    pub error: PeopleError,
    pub path: String,
    // Client reference from the rejected document; becomes the logref of validation errors.
    pub client_ref: Option<String>,
}

impl ApiError {
    pub fn new(error: PeopleError, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
            client_ref: None,
        }
    }

    pub fn with_client_ref(mut self, client_ref: Option<String>) -> Self {
        self.client_ref = client_ref;
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // One logref per failed request; every error in the body shares it.
        let logref = match (&self.error, self.client_ref) {
            (PeopleError::Validation(_), Some(client_ref)) => client_ref,
            _ => Uuid::new_v4().to_string(),
        };
        let path = self.path;

        let document = |message: String| ErrorResponse {
            message,
            path: path.clone(),
            logref: logref.clone(),
        };

        match self.error {
            PeopleError::Validation(violations) => {
                info!(%logref, %path, total = violations.len(), "request rejected by validation");
                let mut errors: Vec<ErrorResponse> = violations
                    .into_iter()
                    .map(|violation| document(violation.message))
                    .collect();

                if errors.len() == 1 {
                    let single = errors.remove(0);
                    error_document(StatusCode::BAD_REQUEST, single)
                } else {
                    error_document(
                        StatusCode::BAD_REQUEST,
                        ErrorsResponse {
                            total: errors.len(),
                            embedded: EmbeddedErrors { errors },
                        },
                    )
                }
            }
            PeopleError::MalformedBody => {
                info!(%logref, %path, "request body is not a person document");
                error_document(
                    StatusCode::BAD_REQUEST,
                    document(MALFORMED_BODY_MESSAGE.to_string()),
                )
            }
            PeopleError::NotFound => error_document(
                StatusCode::NOT_FOUND,
                document(NOT_FOUND_MESSAGE.to_string()),
            ),
            PeopleError::Unhandled(err) => {
                error!(%logref, %path, error = %err, "people service failed");
                error_document(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ExceptionResponse {
                        message: err.to_string(),
                    },
                )
            }
        }
    }
}

fn error_document<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, ERROR_JSON)], Json(body)).into_response()
}
