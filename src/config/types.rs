//! Runtime configuration, assembled from the environment by the loader.

use secrecy::SecretString;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://planets.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_ACCESS_TTL_SECS: u64 = 3600;
pub const DEFAULT_RESET_TTL_SECS: u64 = 900;
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_MAIL_FROM: &str = "admin@planetary-api.com";

#[derive(Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub auth: AuthConfig,
    pub mail: MailConfig,
}

#[derive(Debug)]
pub struct AuthConfig {
    /// HS256 signing key for access and reset tokens.
    pub jwt_secret: SecretString,
    pub access_ttl_secs: u64,
    pub reset_ttl_secs: u64,
}

#[derive(Debug)]
pub struct MailConfig {
    /// `None` selects the log-only mailer.
    pub smtp: Option<SmtpConfig>,
    pub from_address: String,
}

#[derive(Debug)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}
