//! Standard response envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct TokenBody {
    pub message: String,
    pub access_token: String,
}

pub fn message(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<MessageBody>) {
    (
        status,
        Json(MessageBody {
            message: message.into(),
        }),
    )
}

pub fn token(access_token: String) -> (StatusCode, Json<TokenBody>) {
    (
        StatusCode::OK,
        Json(TokenBody {
            message: "Login succeeded!".into(),
            access_token,
        }),
    )
}
