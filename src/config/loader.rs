//! Load config from environment variables (after `.env`, if present).

use crate::config::types::*;
use crate::error::ConfigError;
use secrecy::SecretString;
use std::net::SocketAddr;
use std::str::FromStr;

/// Used when `JWT_SECRET` is unset. Tokens signed with it are only fit for local development.
const DEV_JWT_SECRET: &str = "planetary-api-dev-secret";

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let bind_addr: SocketAddr = get("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.into())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let jwt_secret = match get("JWT_SECRET") {
            Some(s) => s,
            None => {
                tracing::warn!("JWT_SECRET is not set; using the development secret");
                DEV_JWT_SECRET.to_string()
            }
        };
        let auth = AuthConfig {
            jwt_secret: SecretString::from(jwt_secret),
            access_ttl_secs: parse_or("JWT_TTL_SECS", get("JWT_TTL_SECS"), DEFAULT_ACCESS_TTL_SECS)?,
            reset_ttl_secs: parse_or(
                "RESET_TOKEN_TTL_SECS",
                get("RESET_TOKEN_TTL_SECS"),
                DEFAULT_RESET_TTL_SECS,
            )?,
        };
        for (key, secs) in [
            ("JWT_TTL_SECS", auth.access_ttl_secs),
            ("RESET_TOKEN_TTL_SECS", auth.reset_ttl_secs),
        ] {
            if secs == 0 {
                return Err(ConfigError::Invalid {
                    key,
                    reason: "must be positive".into(),
                });
            }
        }

        let smtp = match get("SMTP_HOST") {
            Some(host) => Some(SmtpConfig {
                host,
                port: parse_or("SMTP_PORT", get("SMTP_PORT"), DEFAULT_SMTP_PORT)?,
                username: get("SMTP_USERNAME"),
                password: get("SMTP_PASSWORD").map(SecretString::from),
            }),
            None => None,
        };
        let mail = MailConfig {
            smtp,
            from_address: get("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.into()),
        };

        Ok(Config {
            database_url,
            bind_addr,
            auth,
            mail,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        Some(s) => s.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
