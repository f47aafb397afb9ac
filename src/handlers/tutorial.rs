//! Introductory routes: greetings and the age gate on query and path parameters.

use crate::error::AppError;
use crate::response::{message, MessageBody};
use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Json,
};
use std::collections::HashMap;

const MIN_AGE: i64 = 18;

pub async fn hello_world() -> &'static str {
    "Hello World!"
}

pub async fn super_simple() -> (StatusCode, Json<MessageBody>) {
    message(StatusCode::OK, "Hello from the Planetary API")
}

/// GET /parameters?name=..&age=..
pub async fn parameters(
    Query(params): Query<HashMap<String, String>>,
) -> Result<(StatusCode, Json<MessageBody>), AppError> {
    let name = params
        .get("name")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest("name is required".into()))?;
    let age = params
        .get("age")
        .ok_or_else(|| AppError::BadRequest("age is required".into()))
        .and_then(|s| parse_age(s))?;
    Ok(age_gate(name, age))
}

/// GET /url_variables/:name/:age
pub async fn url_variables(
    Path((name, age)): Path<(String, String)>,
) -> Result<(StatusCode, Json<MessageBody>), AppError> {
    let age = parse_age(&age)?;
    Ok(age_gate(&name, age))
}

fn parse_age(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("age must be an integer, got '{}'", raw)))
}

fn age_gate(name: &str, age: i64) -> (StatusCode, Json<MessageBody>) {
    if age < MIN_AGE {
        message(
            StatusCode::UNAUTHORIZED,
            format!("Sorry, {}, you are not old enough", name),
        )
    } else {
        message(StatusCode::OK, format!("Welcome {}, you are old enough", name))
    }
}
