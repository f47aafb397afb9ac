//! Body extractor accepting JSON or url-encoded forms, chosen by `Content-Type`.

use async_trait::async_trait;
use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// `application/json` bodies go through `Json`; everything else through `Form`.
/// Rejections become `AppError` so clients always get a `{message}` body.
#[derive(Debug, Clone)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.trim_start().to_ascii_lowercase().starts_with("application/json"))
            .unwrap_or(false);

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(json_rejection)?;
            Ok(JsonOrForm(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state).await.map_err(form_rejection)?;
            Ok(JsonOrForm(value))
        }
    }
}

/// Anything wrong with the body's content is a 422; only an unreadable body is a 400.
fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::BytesRejection(e) => AppError::BadRequest(e.body_text()),
        other => AppError::Validation(other.body_text()),
    }
}

fn form_rejection(rejection: FormRejection) -> AppError {
    match rejection {
        FormRejection::BytesRejection(e) => AppError::BadRequest(e.body_text()),
        other => AppError::Validation(other.body_text()),
    }
}
