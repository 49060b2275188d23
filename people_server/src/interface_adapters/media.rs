use axum::http::{HeaderMap, header};

// Versioned media type for people payloads.
pub const PEOPLE_V1_JSON: &str = "application/vnd.bst.people-v1+json";

// vnd.error document media type used for every error body.
pub const ERROR_JSON: &str = "application/vnd.error+json";

// True when the request body is declared as people v1 JSON. Parameters such as
// `charset` are ignored; type and subtype compare case-insensitively.
pub fn is_people_v1(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or_default().trim();
    essence.eq_ignore_ascii_case(PEOPLE_V1_JSON)
}
