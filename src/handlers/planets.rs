//! Planet handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::extractors::{AuthUser, JsonOrForm};
use crate::models::{PlanetInput, PlanetList, PlanetResponse};
use crate::response::{message, MessageBody};
use crate::service::planets::PLANET_NOT_FOUND;
use crate::service::{PlanetService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid planet id '{}'", id_str)))
}

/// GET /planets/list
#[utoipa::path(
    get,
    path = "/planets/list",
    tag = "planets",
    responses((status = 200, description = "Every planet", body = PlanetList))
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let data = PlanetService::list(&state.pool).await?;
    Ok((StatusCode::OK, Json(PlanetList { data })))
}

/// GET /planet/:id. Responds 404 with `data: null` when absent.
#[utoipa::path(
    get,
    path = "/planet/{id}",
    tag = "planets",
    params(("id" = i64, Path, description = "Planet id")),
    responses(
        (status = 200, description = "Planet found", body = PlanetResponse),
        (status = 404, description = "No planet with that id", body = PlanetResponse),
        (status = 400, description = "Id is not an integer", body = MessageBody)
    )
)]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let response = match PlanetService::read(&state.pool, id).await? {
        Some(planet) => (
            StatusCode::OK,
            Json(PlanetResponse {
                message: "Planet found".into(),
                data: Some(planet),
            }),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(PlanetResponse {
                message: PLANET_NOT_FOUND.into(),
                data: None,
            }),
        ),
    };
    Ok(response)
}

/// POST /planet/create
#[utoipa::path(
    post,
    path = "/planet/create",
    tag = "planets",
    request_body(content = PlanetInput, description = "JSON or url-encoded form"),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Planet added", body = MessageBody),
        (status = 401, description = "Missing or invalid bearer token", body = MessageBody),
        (status = 409, description = "Name already taken", body = MessageBody),
        (status = 422, description = "Invalid field", body = MessageBody)
    )
)]
pub async fn create(
    user: AuthUser,
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<PlanetInput>,
) -> Result<impl IntoResponse, AppError> {
    RequestValidator::planet(&input)?;
    let planet = PlanetService::create(&state.pool, &input).await?;
    tracing::info!(planet_id = planet.id, by = %user.email, "planet created");
    Ok(message(StatusCode::CREATED, "You added a planet"))
}

/// PUT /planet/update/:id. The path id wins over any `id` in the body.
#[utoipa::path(
    put,
    path = "/planet/update/{id}",
    tag = "planets",
    params(("id" = i64, Path, description = "Planet id")),
    request_body(content = PlanetInput, description = "JSON or url-encoded form"),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Planet updated", body = MessageBody),
        (status = 401, description = "Missing or invalid bearer token", body = MessageBody),
        (status = 404, description = "No planet with that id", body = MessageBody),
        (status = 409, description = "Name already taken", body = MessageBody),
        (status = 422, description = "Invalid field", body = MessageBody)
    )
)]
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonOrForm(input): JsonOrForm<PlanetInput>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    RequestValidator::planet(&input)?;
    PlanetService::update(&state.pool, id, &input).await?;
    tracing::info!(planet_id = id, by = %user.email, "planet updated");
    Ok(message(StatusCode::OK, "You updated a planet"))
}

/// DELETE /planet/delete/:id
#[utoipa::path(
    delete,
    path = "/planet/delete/{id}",
    tag = "planets",
    params(("id" = i64, Path, description = "Planet id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Planet deleted", body = MessageBody),
        (status = 401, description = "Missing or invalid bearer token", body = MessageBody),
        (status = 404, description = "No planet with that id", body = MessageBody)
    )
)]
pub async fn delete(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    PlanetService::delete(&state.pool, id).await?;
    tracing::info!(planet_id = id, by = %user.email, "planet deleted");
    Ok(message(StatusCode::OK, "You deleted a planet"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("7").unwrap(), 7);
        assert_eq!(parse_id(" 12 ").unwrap(), 12);
        assert!(matches!(parse_id("mars"), Err(AppError::BadRequest(_))));
        assert!(parse_id("1.5").is_err());
    }
}
