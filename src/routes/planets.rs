//! Planet routes. Reads are public; create, update and delete require a bearer token.

use crate::handlers::planets::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn planet_routes(state: AppState) -> Router {
    Router::new()
        .route("/planets/list", get(list))
        .route("/planet/:id", get(read))
        .route("/planet/create", post(create))
        .route("/planet/update/:id", put(update))
        .route("/planet/delete/:id", delete(delete_handler))
        .with_state(state)
}
