pub mod auth;
pub mod errors;
pub mod handlers;
pub mod media;
pub mod protocol;
pub mod routes;
pub mod state;
