//! Planetary API: planets and users over SQLite, with bearer-token auth for planet mutations.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod mail;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use auth::TokenService;
pub use config::Config;
pub use error::{AppError, ConfigError};
pub use mail::{Mailer, MemoryMailer};
pub use migration::{apply_migrations, drop_tables};
pub use routes::app;
pub use service::seed::seed;
pub use state::AppState;
pub use store::connect;
