//! Extract the authenticated user from `Authorization: Bearer <token>`.

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::auth::AuthError;
use crate::error::AppError;
use crate::state::AppState;

/// Caller proven by a valid access token. Rejects with 401 before any body is read.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v: &axum::http::HeaderValue| v.to_str().ok())
            .and_then(bearer_token)
            .ok_or(AuthError::MissingToken)?;
        let state = AppState::from_ref(state);
        let claims = state.tokens.verify_access(token)?;
        Ok(AuthUser { email: claims.sub })
    }
}

/// The token part of a `Bearer` header value, scheme matched case-insensitively.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
