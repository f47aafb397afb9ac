//! Account handlers: register, login, password retrieval and reset.

use crate::error::AppError;
use crate::extractors::JsonOrForm;
use crate::models::{LoginInput, RegisterInput, ResetPasswordInput};
use crate::response::{message, token, MessageBody, TokenBody};
use crate::service::AuthService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

/// POST /register
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body(content = RegisterInput, description = "JSON or url-encoded form"),
    responses(
        (status = 201, description = "User created", body = MessageBody),
        (status = 409, description = "Email already registered", body = MessageBody),
        (status = 422, description = "Invalid field", body = MessageBody)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<RegisterInput>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state).register(&input).await?;
    Ok(message(StatusCode::CREATED, "User created successfully."))
}

/// POST /login
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body(content = LoginInput, description = "JSON or url-encoded form"),
    responses(
        (status = 200, description = "Access token issued", body = TokenBody),
        (status = 401, description = "Bad email or password", body = MessageBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<LoginInput>,
) -> Result<impl IntoResponse, AppError> {
    let access_token = AuthService::new(&state).login(&input).await?;
    Ok(token(access_token))
}

/// GET /retreive_password/:email. Mails a one-time reset token, never the stored hash.
#[utoipa::path(
    get,
    path = "/retreive_password/{email}",
    tag = "auth",
    params(("email" = String, Path, description = "Account email")),
    responses(
        (status = 200, description = "Reset token mailed", body = MessageBody),
        (status = 404, description = "No account with that email", body = MessageBody)
    )
)]
pub async fn retrieve_password(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state).request_password_reset(&email).await?;
    Ok(message(
        StatusCode::OK,
        format!("Password reset instructions sent to {}", email.trim()),
    ))
}

/// POST /reset_password
#[utoipa::path(
    post,
    path = "/reset_password",
    tag = "auth",
    request_body(content = ResetPasswordInput, description = "JSON or url-encoded form"),
    responses(
        (status = 200, description = "Password replaced", body = MessageBody),
        (status = 401, description = "Token invalid, expired, or already used", body = MessageBody),
        (status = 422, description = "New password too weak", body = MessageBody)
    )
)]
pub async fn reset_password(
    State(state): State<AppState>,
    JsonOrForm(input): JsonOrForm<ResetPasswordInput>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state).reset_password(&input).await?;
    Ok(message(StatusCode::OK, "Password updated successfully."))
}
