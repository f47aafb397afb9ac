//! Account routes.

use crate::handlers::auth::{login, register, reset_password, retrieve_password};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn auth_routes(state: AppState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/retreive_password/:email", get(retrieve_password))
        .route("/retrieve_password/:email", get(retrieve_password))
        .route("/reset_password", post(reset_password))
        .with_state(state)
}
