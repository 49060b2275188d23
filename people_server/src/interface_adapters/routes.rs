use crate::interface_adapters::auth::require_basic_auth;
use crate::interface_adapters::handlers::{
    constraints, create_person, delete_person, get_person, list_people,
};
use crate::interface_adapters::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

// Every people route sits behind Basic auth; unknown paths still fall through to 404.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/people", post(create_person).get(list_people))
        .route("/people/constraints", get(constraints))
        .route("/people/{id}", get(get_person).delete(delete_person))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ))
        .with_state(state)
}
