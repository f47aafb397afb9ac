//! Request validation for planet and user bodies.

use crate::error::AppError;
use crate::models::{PlanetInput, RegisterInput};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

const MAX_TEXT_LEN: usize = 255;
pub const MIN_PASSWORD_LEN: usize = 8;

pub struct RequestValidator;

impl RequestValidator {
    /// Text fields non-blank; mass, radius and distance finite and non-negative.
    pub fn planet(input: &PlanetInput) -> Result<(), AppError> {
        validate_text("planet_name", &input.planet_name)?;
        validate_text("planet_type", &input.planet_type)?;
        validate_text("home_star", &input.home_star)?;
        validate_measure("mass", input.mass)?;
        validate_measure("radius", input.radius)?;
        validate_measure("distance", input.distance)?;
        Ok(())
    }

    pub fn registration(input: &RegisterInput) -> Result<(), AppError> {
        validate_email("email", &input.email)?;
        validate_text("first_name", &input.first_name)?;
        validate_text("last_name", &input.last_name)?;
        Self::password("password", &input.password)
    }

    pub fn password(col: &str, value: &str) -> Result<(), AppError> {
        if value.chars().count() < MIN_PASSWORD_LEN {
            return Err(AppError::Validation(format!(
                "{} must be at least {} characters",
                col, MIN_PASSWORD_LEN
            )));
        }
        Ok(())
    }
}

fn validate_text(col: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", col)));
    }
    if value.chars().count() > MAX_TEXT_LEN {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            col, MAX_TEXT_LEN
        )));
    }
    Ok(())
}

fn validate_measure(col: &str, value: f64) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::Validation(format!("{} must be a finite number", col)));
    }
    if value < 0.0 {
        return Err(AppError::Validation(format!("{} must be at least 0", col)));
    }
    Ok(())
}

fn validate_email(col: &str, value: &str) -> Result<(), AppError> {
    validate_text(col, value)?;
    if !EMAIL_RE.is_match(value.trim()) {
        return Err(AppError::Validation(format!("{} must be a valid email", col)));
    }
    Ok(())
}
