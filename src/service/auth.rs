//! Registration, login, and password reset.

use crate::auth::{hash_password, verify_dummy_password, verify_password, AuthError};
use crate::error::AppError;
use crate::mail::OutgoingMail;
use crate::models::{LoginInput, RegisterInput, ResetPasswordInput, User};
use crate::service::users::{NewUser, UserService};
use crate::service::validation::RequestValidator;
use crate::state::AppState;

pub const EMAIL_NOT_FOUND: &str = "That email doesn't exist";

pub struct AuthService<'a> {
    state: &'a AppState,
}

impl<'a> AuthService<'a> {
    pub const fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Validate, hash the password, and insert. Duplicate email is a `Conflict`.
    pub async fn register(&self, input: &RegisterInput) -> Result<User, AppError> {
        RequestValidator::registration(input)?;
        let password_hash = hash_password(&input.password)?;
        let user = UserService::create(
            &self.state.pool,
            &NewUser {
                first_name: &input.first_name,
                last_name: &input.last_name,
                email: &input.email,
                password_hash: &password_hash,
            },
        )
        .await?;
        tracing::info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// Check credentials and issue an access token. Unknown email and wrong password
    /// fail identically, and both pay for one Argon2 verification.
    pub async fn login(&self, input: &LoginInput) -> Result<String, AppError> {
        let Some(user) = UserService::find_by_email(&self.state.pool, &input.email).await? else {
            tracing::warn!("login rejected: unknown email");
            return Err(verify_dummy_password(&input.password).into());
        };
        if let Err(e) = verify_password(&input.password, &user.password) {
            tracing::warn!(user_id = user.id, "login rejected: bad password");
            return Err(e.into());
        }
        Ok(self.state.tokens.issue_access(&user.email)?)
    }

    /// Mail a one-time reset token to `email`. Absent email is `NotFound`.
    pub async fn request_password_reset(&self, email: &str) -> Result<(), AppError> {
        let user = UserService::find_by_email(&self.state.pool, email)
            .await?
            .ok_or_else(|| AppError::NotFound(EMAIL_NOT_FOUND.into()))?;
        let token = self.state.tokens.issue_reset(&user.email, &user.password)?;
        let mail = OutgoingMail::password_reset(&user.email, &user.first_name, &token, self.state.reset_ttl_secs);
        self.state.mailer.send(mail).await?;
        tracing::info!(user_id = user.id, "password reset mailed");
        Ok(())
    }

    /// Replace the password if the token is valid for the user's current hash.
    pub async fn reset_password(&self, input: &ResetPasswordInput) -> Result<(), AppError> {
        let claims = self.state.tokens.verify_reset(&input.token)?;
        let user = UserService::find_by_email(&self.state.pool, &claims.sub)
            .await?
            .ok_or(AuthError::InvalidToken)?;
        if !claims.matches_password(&user.password) {
            tracing::warn!(user_id = user.id, "reset token already used or stale");
            return Err(AuthError::InvalidToken.into());
        }
        RequestValidator::password("new_password", &input.new_password)?;
        let password_hash = hash_password(&input.new_password)?;
        UserService::update_password(&self.state.pool, user.id, &password_hash).await?;
        tracing::info!(user_id = user.id, "password reset");
        Ok(())
    }
}
