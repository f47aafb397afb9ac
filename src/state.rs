//! Shared application state for all routes. Passed explicitly; nothing here is global.

use crate::auth::TokenService;
use crate::mail::Mailer;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: TokenService,
    pub mailer: Arc<dyn Mailer>,
    /// Reset-token lifetime, quoted in the reset mail.
    pub reset_ttl_secs: u64,
}
